use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    handlers::{products::ProductFilters, users::UserFilters},
    models::{Product, User},
    search::derive_view,
    services::ScanStatus,
    state::AppState,
};

#[derive(Serialize)]
pub struct ViewResponse<T> {
    pub total: usize,
    pub count: usize,
    pub records: Vec<T>,
}

impl<T: Clone> ViewResponse<T> {
    fn new(total: usize, view: Vec<&T>) -> Self {
        Self {
            total,
            count: view.len(),
            records: view.into_iter().cloned().collect(),
        }
    }
}

pub async fn products(
    State(state): State<AppState>,
    Query(filters): Query<ProductFilters>,
) -> Json<ViewResponse<Product>> {
    let tab = filters.tab();
    let data = state.store().read().await;
    let in_tab = |p: &Product| tab.admits(p);
    let view = derive_view(data.products.all(), &filters.q, &[&in_tab]);
    Json(ViewResponse::new(data.products.len(), view))
}

pub async fn users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilters>,
) -> Json<ViewResponse<User>> {
    let active_only = filters.active_only();
    let data = state.store().read().await;
    let status_filter = |u: &User| !active_only || u.is_active();
    let view = derive_view(data.users.all(), &filters.q, &[&status_filter]);
    Json(ViewResponse::new(data.users.len(), view))
}

pub async fn scan_status(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Json<ScanStatus>, AppError> {
    state
        .scanner()
        .status(session)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("/api/scan/{session}")))
}
