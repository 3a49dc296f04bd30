pub mod dashboard;
pub mod feedback;
pub mod inventory;
pub mod loyalty;
pub mod role;
pub mod user;

pub use dashboard::{ProductStat, SummaryCard};
pub use feedback::{
    AnalysisView, FeedbackAnalysis, FeedbackEntry, FeedbackSource, FeedbackTab, Insight,
    KeywordCount, ProductSentiment, Sentiment, SentimentShare, Tier, TierBreakdown, MAX_RATING,
    MIN_RATING,
};
pub use inventory::{
    CategoryCount, InventoryLocation, LogisticsTab, Product, ProductStatus, ProductTab, Shipment,
    ShipmentStatus,
};
pub use loyalty::{LoyaltyTier, TierStanding};
pub use role::{Role, UserStatus};
pub use user::{generate_user_id, CreateUser, User};
