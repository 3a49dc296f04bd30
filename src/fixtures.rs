//! Seed data for the in-memory store and the static dashboard figures.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    FeedbackAnalysis, FeedbackEntry, FeedbackSource, Insight, InventoryLocation, KeywordCount,
    LoyaltyTier, Product, ProductSentiment, ProductStat, ProductStatus, Role, Sentiment,
    SentimentShare, Shipment, ShipmentStatus, SummaryCard, Tier, User, UserStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn product(
    id: &str,
    name: &str,
    category: &str,
    quantity: u32,
    location: &str,
    days_until_expiry: u32,
    status: ProductStatus,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        location: location.to_string(),
        days_until_expiry,
        status,
    }
}

pub fn products() -> Vec<Product> {
    use ProductStatus::*;
    vec![
        product("PRD-78321", "Premium Coffee Beans", "Beverages", 342, "Warehouse A", 120, InStock),
        product("PRD-92381", "Organic Tea Collection", "Beverages", 157, "Warehouse A", 90, InStock),
        product("PRD-12465", "Artisan Chocolate Box", "Confectionery", 84, "Store #3", 60, InStock),
        product("PRD-45692", "Natural Honey Jar", "Natural Products", 51, "Store #2", 180, LowStock),
        product("PRD-63741", "Organic Bread", "Bakery", 16, "Store #1", 3, LowStock),
        product("PRD-58123", "Fresh Milk", "Dairy", 67, "Distribution Center", 5, InStock),
        product("PRD-29475", "Yogurt Pack", "Dairy", 24, "Store #5", 7, LowStock),
        product("PRD-30981", "Fruit Juice", "Beverages", 38, "Warehouse B", 15, InStock),
    ]
}

pub fn shipments() -> Vec<Shipment> {
    use ShipmentStatus::*;
    vec![
        Shipment::new("SHP-1023", "Warehouse A", "Store #1", 24, InTransit, 65, date(2023, 4, 10), date(2023, 4, 15)),
        Shipment::new("SHP-1024", "Warehouse B", "Store #3", 18, Pending, 0, date(2023, 4, 17), date(2023, 4, 22)),
        Shipment::new("SHP-1025", "Warehouse A", "Distribution Center", 36, Delivered, 100, date(2023, 4, 5), date(2023, 4, 8)),
        Shipment::new("SHP-1026", "Distribution Center", "Store #2", 12, InTransit, 25, date(2023, 4, 12), date(2023, 4, 16)),
    ]
}

pub fn inventory_locations() -> Vec<InventoryLocation> {
    vec![
        InventoryLocation::new(
            "LOC-1",
            "Warehouse A",
            80,
            &[("Beverages", 520), ("Confectionery", 320), ("Dairy", 150), ("Bakery", 210)],
            2,
        ),
        InventoryLocation::new(
            "LOC-2",
            "Warehouse B",
            65,
            &[("Natural Products", 180), ("Beverages", 240), ("Confectionery", 170), ("Dairy", 110)],
            0,
        ),
        InventoryLocation::new(
            "LOC-3",
            "Distribution Center",
            45,
            &[("Beverages", 120), ("Dairy", 95), ("Bakery", 75)],
            1,
        ),
        InventoryLocation::new(
            "LOC-4",
            "Store #1",
            30,
            &[("Beverages", 45), ("Confectionery", 38), ("Dairy", 32), ("Bakery", 28)],
            3,
        ),
    ]
}

fn user(id: &str, name: &str, email: &str, role: Role, status: UserStatus, created: NaiveDate) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        date_created: created,
        department: None,
        avatar: None,
        last_active: None,
    }
}

pub fn users() -> Vec<User> {
    use UserStatus::*;
    vec![
        user("1", "John Smith", "john.smith@example.com", Role::Admin, Active, date(2024, 1, 15)),
        user("2", "Emily Johnson", "emily.j@example.com", Role::Manager, Active, date(2024, 2, 3)),
        user("3", "Michael Brown", "michael.b@example.com", Role::User, Inactive, date(2024, 3, 22)),
        user("4", "Sarah Williams", "sarah.w@example.com", Role::Manager, Active, date(2024, 1, 30)),
        user("5", "David Lee", "david.lee@example.com", Role::User, Active, date(2024, 4, 10)),
    ]
}

pub fn feedback() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry::new(
            "F-1023",
            "PRD-78321",
            "Premium Coffee Beans",
            "Alex Johnson",
            Tier::Gold,
            5,
            "Excellent quality and superb packaging. The beans arrived in perfect condition and the freshness is outstanding.",
            date(2023, 4, 12),
            Some(FeedbackSource::App),
        ),
        FeedbackEntry::new(
            "F-1024",
            "PRD-92381",
            "Organic Tea Collection",
            "Sarah Miller",
            Tier::Silver,
            4,
            "Great variety and good value. Would appreciate better labeling on the individual tea packets.",
            date(2023, 4, 10),
            Some(FeedbackSource::Email),
        ),
        FeedbackEntry::new(
            "F-1025",
            "PRD-12465",
            "Artisan Chocolate Box",
            "David Wilson",
            Tier::Gold,
            5,
            "These chocolates are absolutely divine! The presentation is beautiful and they taste amazing.",
            date(2023, 4, 8),
            Some(FeedbackSource::App),
        ),
        FeedbackEntry::new(
            "F-1026",
            "PRD-45692",
            "Natural Honey Jar",
            "Emily Brown",
            Tier::Bronze,
            3,
            "The honey is good but the jar arrived with a small crack. Packaging could be improved.",
            date(2023, 4, 7),
            Some(FeedbackSource::Store),
        ),
    ]
}

fn keyword(keyword: &str, count: u32, sentiment: Sentiment) -> KeywordCount {
    KeywordCount {
        keyword: keyword.to_string(),
        count,
        sentiment,
    }
}

fn product_sentiment(id: &str, name: &str, positive: u8) -> ProductSentiment {
    ProductSentiment {
        product_id: id.to_string(),
        product_name: name.to_string(),
        positive,
        negative: 100 - positive,
    }
}

fn insight(id: u32, topic: &str, text: &str, sentiment: Sentiment) -> Insight {
    Insight {
        id,
        topic: topic.to_string(),
        insight: text.to_string(),
        sentiment,
    }
}

pub fn feedback_analysis() -> FeedbackAnalysis {
    use Sentiment::*;
    FeedbackAnalysis {
        sentiment_breakdown: vec![
            SentimentShare { sentiment: Positive, percent: 65 },
            SentimentShare { sentiment: Neutral, percent: 20 },
            SentimentShare { sentiment: Negative, percent: 15 },
        ],
        top_keywords: vec![
            keyword("quality", 28, Positive),
            keyword("packaging", 22, Positive),
            keyword("delivery", 18, Negative),
            keyword("price", 15, Neutral),
            keyword("taste", 12, Positive),
            keyword("customer service", 10, Positive),
            keyword("freshness", 8, Positive),
            keyword("variety", 6, Positive),
        ],
        product_feedback: vec![
            product_sentiment("PRD-78321", "Premium Coffee Beans", 85),
            product_sentiment("PRD-92381", "Organic Tea Collection", 70),
            product_sentiment("PRD-12465", "Artisan Chocolate Box", 92),
            product_sentiment("PRD-45692", "Natural Honey Jar", 60),
        ],
        insights: vec![
            insight(
                1,
                "Product Quality",
                "Customers consistently praise the quality of Premium Coffee Beans, with 85% positive feedback. Consider highlighting quality in marketing materials.",
                Positive,
            ),
            insight(
                2,
                "Packaging",
                "Several customers mentioned concerns about the Natural Honey Jar packaging. 23% of negative feedback relates to cracked jars upon delivery.",
                Negative,
            ),
            insight(
                3,
                "Customer Service",
                "Gold tier customers report higher satisfaction (92%) with customer service compared to Bronze tier (76%).",
                Positive,
            ),
            insight(
                4,
                "Delivery Times",
                "Delivery complaints increased by 12% this month compared to last month. Most common in rural areas.",
                Negative,
            ),
        ],
        generated_at: Utc
            .with_ymd_and_hms(2023, 4, 15, 9, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

fn loyalty_tier(tier: Tier, description: &str, required_points: u32, benefits: &[&str]) -> LoyaltyTier {
    LoyaltyTier {
        tier,
        description: description.to_string(),
        required_points,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}

/// Ordered by ascending required points.
pub fn loyalty_tiers() -> Vec<LoyaltyTier> {
    vec![
        loyalty_tier(
            Tier::Bronze,
            "Start your journey with basic benefits",
            0,
            &["Basic support", "Standard delivery", "Newsletter access"],
        ),
        loyalty_tier(
            Tier::Silver,
            "Unlock premium features and rewards",
            1000,
            &["Priority support", "Free delivery", "Exclusive deals", "Early access"],
        ),
        loyalty_tier(
            Tier::Gold,
            "Experience VIP treatment and maximum benefits",
            5000,
            &["24/7 VIP support", "Same-day delivery", "Special events", "Custom orders", "Loyalty bonus"],
        ),
    ]
}

pub fn store_summary() -> Vec<SummaryCard> {
    vec![
        SummaryCard::new("Total Products", "1,234", "+12% from last month", true),
        SummaryCard::new("Active Orders", "56", "+8% from last month", true),
        SummaryCard::new("Customer Rating", "4.8/5", "+0.3 from last month", true),
        SummaryCard::new("Daily Visitors", "892", "-3% from last month", false),
    ]
}

pub fn top_products() -> Vec<ProductStat> {
    [
        ("Premium Coffee Beans", 723, 412, 4.8),
        ("Organic Tea Collection", 541, 267, 4.5),
        ("Artisan Chocolate Box", 325, 178, 4.7),
        ("Natural Honey Jar", 289, 124, 4.6),
    ]
    .into_iter()
    .map(|(name, sold, in_stock, rating)| ProductStat {
        name: name.to_string(),
        sold,
        in_stock,
        rating,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique<I: IntoIterator<Item = String>>(ids: I) -> bool {
        let ids: Vec<String> = ids.into_iter().collect();
        ids.iter().collect::<HashSet<_>>().len() == ids.len()
    }

    #[test]
    fn fixture_ids_are_unique() {
        assert!(unique(products().into_iter().map(|p| p.id)));
        assert!(unique(shipments().into_iter().map(|s| s.id)));
        assert!(unique(inventory_locations().into_iter().map(|l| l.id)));
        assert!(unique(users().into_iter().map(|u| u.id)));
        assert!(unique(feedback().into_iter().map(|f| f.id)));
    }

    #[test]
    fn feedback_refers_to_known_products() {
        let products = products();
        for entry in feedback() {
            let product = products.iter().find(|p| p.id == entry.product_id);
            assert_eq!(product.map(|p| p.name.as_str()), Some(entry.product_name.as_str()));
        }
    }

    #[test]
    fn sentiment_breakdown_sums_to_one_hundred() {
        let analysis = feedback_analysis();
        let total: u32 = analysis
            .sentiment_breakdown
            .iter()
            .map(|s| u32::from(s.percent))
            .sum();
        assert_eq!(total, 100);
        assert_eq!(analysis.max_keyword_count(), 28);
    }

    #[test]
    fn loyalty_tiers_ascend_from_zero() {
        let tiers = loyalty_tiers();
        assert_eq!(tiers[0].required_points, 0);
        assert!(tiers.windows(2).all(|w| w[0].required_points < w[1].required_points));
    }
}
