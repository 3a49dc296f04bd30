use serde::Serialize;

/// Headline card on the dashboard and storefront pages.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub trend_up: bool,
}

impl SummaryCard {
    pub fn new(title: &str, value: impl ToString, trend: &str, trend_up: bool) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            trend: trend.to_string(),
            trend_up,
        }
    }

    pub fn trend_class(&self) -> &'static str {
        if self.trend_up {
            "trend-up"
        } else {
            "trend-down"
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductStat {
    pub name: String,
    pub sold: u32,
    pub in_stock: u32,
    pub rating: f32,
}
