//! One-shot notices ("toasts") carried to the next rendered page in a cookie.

use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};

const NOTICE_COOKIE: &str = "notice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            description: description.into(),
        }
    }

    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    fn encode(&self) -> Option<String> {
        let json = serde_json::to_string(self).ok()?;
        Some(urlencoding::encode(&json).into_owned())
    }

    fn decode(raw: &str) -> Option<Self> {
        let json = urlencoding::decode(raw).ok()?;
        serde_json::from_str(&json).ok()
    }
}

/// Queues `notice` for the next page rendered for this browser.
pub fn push_notice(cookies: &Cookies, notice: Notice) {
    let Some(value) = notice.encode() else {
        log::warn!("Dropping notice that failed to encode: {}", notice.title);
        return;
    };
    let cookie = Cookie::build((NOTICE_COOKIE, value))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::minutes(1))
        .build();
    cookies.add(cookie);
}

/// Reads and clears the pending notice, if any.
pub fn take_notice(cookies: &Cookies) -> Option<Notice> {
    let raw = cookies.get(NOTICE_COOKIE)?.value().to_string();
    cookies.remove(Cookie::build((NOTICE_COOKIE, "")).path("/").build());
    Notice::decode(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_survive_cookie_encoding() {
        let notice = Notice::error("Product not found", "No product found with ID: PRD-0; \"quoted\"");
        let encoded = notice.encode().unwrap();
        assert!(!encoded.contains(';') && !encoded.contains('"'));
        assert_eq!(Notice::decode(&encoded), Some(notice));
    }

    #[test]
    fn garbage_cookie_is_ignored() {
        assert_eq!(Notice::decode("%7Bnot-json"), None);
    }
}
