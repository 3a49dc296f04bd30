//! Request-level errors.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::Store(StoreError::UnknownId { .. }) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::NOT_FOUND => {
                let path = match &self {
                    Self::NotFound(what) => what.clone(),
                    other => other.to_string(),
                };
                match (NotFoundTemplate { path }).render() {
                    Ok(page) => (status, Html(page)).into_response(),
                    Err(_) => (status, self.to_string()).into_response(),
                }
            }
            StatusCode::BAD_REQUEST => (status, self.to_string()).into_response(),
            _ => {
                log::error!("Request failed: {self}");
                (status, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        let missing = AppError::from(StoreError::UnknownId {
            collection: "users",
            id: "9".to_string(),
        });
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let exhausted = AppError::from(StoreError::IdsExhausted("users"));
        assert_eq!(exhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let response = AppError::from(StoreError::IdsExhausted("users")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
