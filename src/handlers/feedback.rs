use askama::Template;
use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    filters,
    handlers::{render, Shell},
    middleware::{push_notice, Notice},
    models::{
        AnalysisView, FeedbackAnalysis, FeedbackEntry, FeedbackTab, Tier, TierBreakdown,
        MAX_RATING, MIN_RATING,
    },
    search::filter_view,
    state::AppState,
    store::{NewFeedback, StoreError},
};

#[derive(Template)]
#[template(path = "feedback/list.html")]
struct FeedbackTemplate<'a> {
    shell: Shell,
    tab: FeedbackTab,
    tiers: [Tier; 3],
    entries: Vec<&'a FeedbackEntry>,
}

impl FeedbackTemplate<'_> {
    fn tier_selected(&self, tier: &Tier) -> bool {
        self.tab == FeedbackTab::Tier(*tier)
    }
}

#[derive(Template)]
#[template(path = "feedback/analytics.html")]
struct AnalyticsTemplate<'a> {
    shell: Shell,
    view: AnalysisView,
    views: [AnalysisView; 4],
    analysis: &'a FeedbackAnalysis,
    tiers: Vec<TierBreakdown>,
    feedback_count: usize,
    max_keywords: u32,
    refreshing: bool,
}

#[derive(Deserialize, Default)]
pub struct FeedbackFilters {
    #[serde(default)]
    pub tab: String,
}

#[derive(Deserialize, Default)]
pub struct AnalyticsFilters {
    #[serde(default)]
    pub view: String,
}

#[derive(Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    product_id: String,
    #[serde(default)]
    customer: String,
    #[serde(default)]
    tier: String,
    #[serde(default)]
    rating: String,
    #[serde(default)]
    comment: String,
}

/// Reads the rating field leniently: out-of-range numbers are clamped and a
/// blank or unreadable value counts as the top rating.
fn parse_rating(raw: &str) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING)) as u8,
        Err(_) => MAX_RATING,
    }
}

pub async fn feedback_list(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(filters): Query<FeedbackFilters>,
) -> Result<Html<String>, AppError> {
    let tab: FeedbackTab = filters.tab.parse().unwrap_or_default();
    let data = state.store().read().await;
    let in_tab = |e: &FeedbackEntry| tab.admits(e);
    let entries = filter_view(data.feedback.all(), &[&in_tab]);

    let template = FeedbackTemplate {
        shell: Shell::new("feedback", &cookies),
        tab,
        tiers: Tier::ALL,
        entries,
    };
    render(&template)
}

pub async fn submit_feedback(
    cookies: Cookies,
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> Result<Redirect, AppError> {
    let product_id = form.product_id.trim().to_string();
    if product_id.is_empty() {
        push_notice(&cookies, Notice::error("Error", "Please enter a product ID"));
        return Ok(Redirect::to("/feedback"));
    }

    let customer = match form.customer.trim() {
        "" => "Anonymous".to_string(),
        name => name.to_string(),
    };
    let new = NewFeedback {
        product_id: product_id.clone(),
        customer,
        tier: form.tier.parse().unwrap_or(Tier::Bronze),
        rating: parse_rating(&form.rating),
        comment: form.comment.trim().to_string(),
    };

    match state.store().submit_feedback(new).await {
        Ok(_) => push_notice(
            &cookies,
            Notice::info(
                "Feedback submitted",
                format!("Thank you for your feedback on product {product_id}"),
            ),
        ),
        Err(StoreError::UnknownId { .. }) => push_notice(
            &cookies,
            Notice::error("Product not found", format!("No product found with ID: {product_id}")),
        ),
        Err(err) => return Err(err.into()),
    }
    Ok(Redirect::to("/feedback"))
}

pub async fn analytics(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(filters): Query<AnalyticsFilters>,
) -> Result<Html<String>, AppError> {
    let refreshing = state.refresher().settle(state.store()).await;
    let view = filters.view.parse().unwrap_or_default();
    let data = state.store().read().await;

    let template = AnalyticsTemplate {
        shell: Shell::new("feedback-analytics", &cookies),
        view,
        views: AnalysisView::ALL,
        analysis: &data.analysis,
        tiers: TierBreakdown::for_entries(data.feedback.all()),
        feedback_count: data.feedback.len(),
        max_keywords: data.analysis.max_keyword_count(),
        refreshing,
    };
    render(&template)
}

pub async fn refresh_analysis(State(state): State<AppState>) -> Redirect {
    if !state.refresher().start().await {
        log::debug!("Refresh requested while one is running");
    }
    Redirect::to("/feedback-analytics")
}

pub async fn cancel_refresh(cookies: Cookies, State(state): State<AppState>) -> Redirect {
    if state.refresher().cancel().await {
        push_notice(&cookies, Notice::info("Analysis cancelled", "The previous analysis is kept"));
    }
    Redirect::to("/feedback-analytics")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_clamped_into_range() {
        assert_eq!(parse_rating("4"), 4);
        assert_eq!(parse_rating("300"), MAX_RATING);
        assert_eq!(parse_rating("-2"), MIN_RATING);
        assert_eq!(parse_rating("0"), MIN_RATING);
    }

    #[test]
    fn blank_or_garbled_rating_counts_as_top() {
        assert_eq!(parse_rating(""), MAX_RATING);
        assert_eq!(parse_rating("  "), MAX_RATING);
        assert_eq!(parse_rating("five"), MAX_RATING);
    }
}
