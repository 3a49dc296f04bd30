pub mod config;
pub mod error;
pub mod filters;
pub mod fixtures;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod search;
pub mod services;
pub mod state;
pub mod store;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::auth::login_page))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        // Products and barcode scanning
        .route("/products", get(handlers::products::products_list))
        .route("/products/lookup", post(handlers::products::lookup_barcode))
        .route("/products/scan", post(handlers::products::start_scan))
        .route("/products/scan/:session", get(handlers::products::scan_view))
        .route("/products/scan/:session/cancel", post(handlers::products::cancel_scan))
        .route("/products/:id", get(handlers::products::product_detail))
        .route("/store", get(handlers::storefront::storefront))
        .route("/logistics", get(handlers::logistics::logistics))
        // User management
        .route("/users", get(handlers::users::users_list).post(handlers::users::create_user))
        .route("/users/new", get(handlers::users::user_form))
        .route("/users/:id", post(handlers::users::update_user))
        .route("/users/:id/edit", get(handlers::users::user_edit_form))
        .route(
            "/users/:id/delete",
            get(handlers::users::confirm_delete_user).post(handlers::users::delete_user),
        )
        // Feedback
        .route(
            "/feedback",
            get(handlers::feedback::feedback_list).post(handlers::feedback::submit_feedback),
        )
        .route("/feedback-analytics", get(handlers::feedback::analytics))
        .route("/feedback-analytics/refresh", post(handlers::feedback::refresh_analysis))
        .route("/feedback-analytics/cancel", post(handlers::feedback::cancel_refresh))
        // API routes
        .route("/api/products", get(handlers::api::products))
        .route("/api/users", get(handlers::api::users))
        .route("/api/scan/:session", get(handlers::api::scan_status))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CookieManagerLayer::new())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(64 * 1024)),
        )
        .with_state(state)
}
