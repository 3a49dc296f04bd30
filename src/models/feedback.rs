use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::Record;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Customer loyalty classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    /// Highest first, the order the feedback tabs use.
    pub const ALL: [Tier; 3] = [Self::Gold, Self::Silver, Self::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSource {
    App,
    Email,
    Web,
    Store,
}

impl FeedbackSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Email => "email",
            Self::Web => "web",
            Self::Store => "store",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub customer: String,
    pub tier: Tier,
    rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    pub source: Option<FeedbackSource>,
}

impl FeedbackEntry {
    /// Ratings outside 1..=5 are clamped into range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        product_id: &str,
        product_name: &str,
        customer: &str,
        tier: Tier,
        rating: u8,
        comment: &str,
        date: NaiveDate,
        source: Option<FeedbackSource>,
    ) -> Self {
        Self {
            id: id.to_string(),
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            customer: customer.to_string(),
            tier,
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            comment: comment.to_string(),
            date,
            source,
        }
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// One flag per star, filled first.
    pub fn stars(&self) -> Vec<bool> {
        (MIN_RATING..=MAX_RATING).map(|n| n <= self.rating).collect()
    }

    /// Numeric part of an `F-<n>` id.
    pub fn sequence(&self) -> Option<u32> {
        self.id.strip_prefix("F-")?.parse().ok()
    }
}

impl Record for FeedbackEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Tabs on the feedback page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackTab {
    #[default]
    All,
    Tier(Tier),
}

impl FeedbackTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tier(tier) => tier.as_str(),
        }
    }

    pub fn admits(&self, entry: &FeedbackEntry) -> bool {
        match self {
            Self::All => true,
            Self::Tier(tier) => entry.tier == *tier,
        }
    }
}

impl FromStr for FeedbackTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Tier)
    }
}

/// Count and mean rating of the feedback left by one tier.
#[derive(Debug, Clone, Serialize)]
pub struct TierBreakdown {
    pub tier: Tier,
    pub count: usize,
    pub average_rating: f64,
}

impl TierBreakdown {
    pub fn for_entries(entries: &[FeedbackEntry]) -> Vec<TierBreakdown> {
        Tier::ALL
            .into_iter()
            .map(|tier| {
                let ratings: Vec<u8> = entries
                    .iter()
                    .filter(|e| e.tier == tier)
                    .map(FeedbackEntry::rating)
                    .collect();
                let average_rating = if ratings.is_empty() {
                    0.0
                } else {
                    ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
                };
                TierBreakdown {
                    tier,
                    count: ratings.len(),
                    average_rating,
                }
            })
            .collect()
    }

    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentShare {
    pub sentiment: Sentiment,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u32,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductSentiment {
    pub product_id: String,
    pub product_name: String,
    pub positive: u8,
    pub negative: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub id: u32,
    pub topic: String,
    pub insight: String,
    pub sentiment: Sentiment,
}

/// Precomputed "AI" analysis shown on the analytics page.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackAnalysis {
    pub sentiment_breakdown: Vec<SentimentShare>,
    pub top_keywords: Vec<KeywordCount>,
    pub product_feedback: Vec<ProductSentiment>,
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
}

impl FeedbackAnalysis {
    /// Largest keyword count, used to scale the keyword bars.
    pub fn max_keyword_count(&self) -> u32 {
        self.top_keywords.iter().map(|k| k.count).max().unwrap_or(0)
    }
}

/// Analytics page sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisView {
    #[default]
    Overview,
    Keywords,
    Products,
    Insights,
}

impl AnalysisView {
    pub const ALL: [AnalysisView; 4] = [Self::Overview, Self::Keywords, Self::Products, Self::Insights];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Keywords => "keywords",
            Self::Products => "products",
            Self::Insights => "insights",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Keywords => "Keywords",
            Self::Products => "Products",
            Self::Insights => "AI Insights",
        }
    }
}

impl FromStr for AnalysisView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, tier: Tier, rating: u8) -> FeedbackEntry {
        let date = NaiveDate::from_ymd_opt(2023, 4, 12).unwrap();
        FeedbackEntry::new(id, "PRD-1", "Thing", "Someone", tier, rating, "", date, None)
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(entry("F-1", Tier::Gold, 9).rating(), 5);
        assert_eq!(entry("F-1", Tier::Gold, 0).rating(), 1);
        assert_eq!(entry("F-1", Tier::Gold, 3).stars(), vec![true, true, true, false, false]);
    }

    #[test]
    fn tabs_parse_tiers_and_all() {
        assert_eq!("all".parse::<FeedbackTab>(), Ok(FeedbackTab::All));
        assert_eq!("gold".parse::<FeedbackTab>(), Ok(FeedbackTab::Tier(Tier::Gold)));
        assert!("platinum".parse::<FeedbackTab>().is_err());
    }

    #[test]
    fn sequence_reads_numeric_suffix() {
        assert_eq!(entry("F-1026", Tier::Bronze, 3).sequence(), Some(1026));
        assert_eq!(entry("legacy", Tier::Bronze, 3).sequence(), None);
    }

    #[test]
    fn tier_breakdown_averages_per_tier() {
        let entries = vec![
            entry("F-1", Tier::Gold, 5),
            entry("F-2", Tier::Gold, 4),
            entry("F-3", Tier::Bronze, 3),
        ];
        let breakdown = TierBreakdown::for_entries(&entries);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].tier, Tier::Gold);
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].average_display(), "4.5");
        assert_eq!(breakdown[1].count, 0);
        assert_eq!(breakdown[1].average_rating, 0.0);
    }
}
