pub mod api;
pub mod auth;
pub mod dashboard;
pub mod feedback;
pub mod logistics;
pub mod products;
pub mod storefront;
pub mod users;

use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;

use crate::{
    error::{AppError, NotFoundTemplate},
    middleware::{take_notice, Notice},
};

/// Navigation entries in the sidebar: (key, title, href).
pub const NAV_LINKS: [(&str, &str, &str); 7] = [
    ("dashboard", "Dashboard", "/dashboard"),
    ("products", "Products", "/products"),
    ("store", "Store", "/store"),
    ("logistics", "Logistics", "/logistics"),
    ("users", "User Management", "/users"),
    ("feedback", "Customer Feedback", "/feedback"),
    ("feedback-analytics", "Feedback Analytics", "/feedback-analytics"),
];

/// Data the page chrome (sidebar, navbar, notice area) needs.
pub struct Shell {
    pub active: &'static str,
    pub notice: Option<Notice>,
}

impl Shell {
    /// Chrome for the `active` page, consuming any pending notice.
    pub fn new(active: &'static str, cookies: &Cookies) -> Self {
        Self {
            active,
            notice: take_notice(cookies),
        }
    }

    pub fn links(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        &NAV_LINKS
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }
}

pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// `/path?k=v&...` with values percent-encoded; empty values are left out.
pub fn url_with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

pub async fn index() -> Redirect {
    Redirect::permanent("/login")
}

pub async fn not_found(uri: Uri) -> Response {
    let template = NotFoundTemplate {
        path: uri.path().to_string(),
    };
    match template.render() {
        Ok(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_urls_encode_and_skip_empty_values() {
        assert_eq!(url_with_query("/products", &[("q", ""), ("tab", "all")]), "/products?tab=all");
        assert_eq!(
            url_with_query("/logistics", &[("q", "Store #1"), ("tab", "inventory")]),
            "/logistics?q=Store%20%231&tab=inventory"
        );
        assert_eq!(url_with_query("/users", &[]), "/users");
    }
}
