use askama::Template;
use axum::response::Html;

use crate::{error::AppError, handlers::render};

/// Sign-in screen. There are no accounts; the form just opens the dashboard.
#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    product_name: &'static str,
}

pub async fn login_page() -> Result<Html<String>, AppError> {
    render(&LoginTemplate {
        product_name: "ProLogiX",
    })
}
