use askama::Template;
use axum::{extract::State, response::Html};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    fixtures,
    handlers::{render, Shell},
    models::{Product, ProductStat, ShipmentStatus, SummaryCard},
    state::AppState,
};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    shell: Shell,
    cards: Vec<SummaryCard>,
    top_products: Vec<ProductStat>,
    expiring: Vec<Product>,
}

pub async fn dashboard(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let data = state.store().read().await;

    let pending_shipments = data
        .shipments
        .all()
        .iter()
        .filter(|s| s.status != ShipmentStatus::Delivered)
        .count();
    let mut expiring: Vec<Product> = data
        .products
        .all()
        .iter()
        .filter(|p| p.is_expiring_soon())
        .cloned()
        .collect();
    expiring.sort_by_key(|p| p.days_until_expiry);

    let cards = vec![
        SummaryCard::new("Total Products", data.products.len(), "+12% from last month", true),
        SummaryCard::new("Pending Shipments", pending_shipments, "+4% from last week", true),
        SummaryCard::new("Expiring Items", expiring.len(), "-2% from last week", false),
        SummaryCard::new("Customer Feedback", data.feedback.len(), "+18% from last month", true),
    ];

    let template = DashboardTemplate {
        shell: Shell::new("dashboard", &cookies),
        cards,
        top_products: fixtures::top_products(),
        expiring,
    };
    render(&template)
}
