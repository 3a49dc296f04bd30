use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    filters,
    handlers::{render, url_with_query, Shell},
    models::{InventoryLocation, LogisticsTab, Shipment},
    search::derive_view,
    state::AppState,
};

#[derive(Template)]
#[template(path = "logistics/index.html")]
struct LogisticsTemplate<'a> {
    shell: Shell,
    query: String,
    tab: LogisticsTab,
    shipments: Vec<&'a Shipment>,
    locations: Vec<&'a InventoryLocation>,
}

impl LogisticsTemplate<'_> {
    fn tab_url(&self, tab: &str) -> String {
        url_with_query("/logistics", &[("q", &self.query), ("tab", tab)])
    }

    fn showing_shipments(&self) -> bool {
        self.tab == LogisticsTab::Shipments
    }
}

#[derive(Deserialize, Default)]
pub struct LogisticsFilters {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub tab: String,
}

pub async fn logistics(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(filters): Query<LogisticsFilters>,
) -> Result<Html<String>, AppError> {
    let tab = filters.tab.parse().unwrap_or_default();
    let data = state.store().read().await;
    // One query narrows both tabs, so switching tabs keeps the search.
    let shipments = derive_view(data.shipments.all(), &filters.q, &[]);
    let locations = derive_view(data.locations.all(), &filters.q, &[]);

    let template = LogisticsTemplate {
        shell: Shell::new("logistics", &cookies),
        query: filters.q,
        tab,
        shipments,
        locations,
    };
    render(&template)
}
