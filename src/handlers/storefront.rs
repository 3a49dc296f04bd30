use askama::Template;
use axum::{extract::State, response::Html};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    fixtures,
    handlers::{render, Shell},
    models::{LoyaltyTier, SummaryCard, TierStanding},
    state::AppState,
};

#[derive(Template)]
#[template(path = "store.html")]
struct StorefrontTemplate {
    shell: Shell,
    summary: Vec<SummaryCard>,
    tiers: Vec<LoyaltyTier>,
    standing: Option<TierStanding>,
}

impl StorefrontTemplate {
    fn is_current(&self, tier: &LoyaltyTier) -> bool {
        self.standing.as_ref().is_some_and(|s| s.is_current(tier))
    }
}

pub async fn storefront(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let tiers = fixtures::loyalty_tiers();
    let standing = TierStanding::for_points(&tiers, state.config().loyalty_points);

    let template = StorefrontTemplate {
        shell: Shell::new("store", &cookies),
        summary: fixtures::store_summary(),
        tiers,
        standing,
    };
    render(&template)
}
