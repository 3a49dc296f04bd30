use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{search::Searchable, store::Record};

/// Products expiring within this many days show up under "Expiring Soon".
pub const EXPIRING_SOON_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    InStock,
    LowStock,
    OutOfStock,
    Transit,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
            Self::Transit => "transit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
            Self::Transit => "In Transit",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::InStock => "status-badge-success",
            Self::LowStock => "status-badge-warning",
            Self::OutOfStock => "status-badge-error",
            Self::Transit => "status-badge-info",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub location: String,
    pub days_until_expiry: u32,
    pub status: ProductStatus,
}

impl Product {
    pub fn is_expiring_soon(&self) -> bool {
        self.days_until_expiry <= EXPIRING_SOON_DAYS
    }

    /// Width of the freshness bar on the product card, capped at 100.
    pub fn freshness_percent(&self) -> u32 {
        (self.days_until_expiry.saturating_mul(100) / 30).min(100)
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.name]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-badge-warning",
            Self::InTransit => "status-badge-info",
            Self::Delivered => "status-badge-success",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Shipment {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub product_count: u32,
    pub status: ShipmentStatus,
    progress: u8,
    pub departure_date: NaiveDate,
    pub estimated_arrival: NaiveDate,
}

impl Shipment {
    /// Progress above 100 is clamped.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        origin: &str,
        destination: &str,
        product_count: u32,
        status: ShipmentStatus,
        progress: u8,
        departure_date: NaiveDate,
        estimated_arrival: NaiveDate,
    ) -> Self {
        Self {
            id: id.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            product_count,
            status,
            progress: progress.min(100),
            departure_date,
            estimated_arrival,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }
}

impl Record for Shipment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Shipment {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.origin, &self.destination]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryLocation {
    pub id: String,
    pub name: String,
    capacity: u8,
    pub products: Vec<CategoryCount>,
    pub alerts: u32,
}

impl InventoryLocation {
    pub fn new(id: &str, name: &str, capacity: u8, products: &[(&str, u32)], alerts: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            capacity: capacity.min(100),
            products: products
                .iter()
                .map(|(category, count)| CategoryCount {
                    category: category.to_string(),
                    count: *count,
                })
                .collect(),
            alerts,
        }
    }

    /// Used capacity in percent, 0 to 100.
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn total_items(&self) -> u32 {
        self.products.iter().map(|p| p.count).sum()
    }
}

impl Record for InventoryLocation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for InventoryLocation {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.name]
    }
}

/// Tabs on the products page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductTab {
    #[default]
    All,
    ExpiringSoon,
    LowStock,
}

impl ProductTab {
    pub const ALL: [ProductTab; 3] = [Self::All, Self::ExpiringSoon, Self::LowStock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ExpiringSoon => "expiring-soon",
            Self::LowStock => "low-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::ExpiringSoon => "Expiring Soon",
            Self::LowStock => "Low Stock",
        }
    }

    pub fn admits(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::ExpiringSoon => product.is_expiring_soon(),
            Self::LowStock => product.status == ProductStatus::LowStock,
        }
    }
}

impl FromStr for ProductTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

/// Tabs on the logistics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogisticsTab {
    #[default]
    Shipments,
    Inventory,
}

impl LogisticsTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shipments => "shipments",
            Self::Inventory => "inventory",
        }
    }
}

impl FromStr for LogisticsTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shipments" => Ok(Self::Shipments),
            "inventory" => Ok(Self::Inventory),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(days: u32, status: ProductStatus) -> Product {
        Product {
            id: "PRD-1".to_string(),
            name: "Test".to_string(),
            category: "Dairy".to_string(),
            quantity: 1,
            location: "Store #1".to_string(),
            days_until_expiry: days,
            status,
        }
    }

    #[test]
    fn expiring_soon_is_inclusive_at_seven_days() {
        assert!(product(7, ProductStatus::InStock).is_expiring_soon());
        assert!(!product(8, ProductStatus::InStock).is_expiring_soon());
    }

    #[test]
    fn tabs_select_by_expiry_and_status() {
        let low = product(90, ProductStatus::LowStock);
        let fresh = product(3, ProductStatus::InStock);
        assert!(ProductTab::LowStock.admits(&low));
        assert!(!ProductTab::LowStock.admits(&fresh));
        assert!(ProductTab::ExpiringSoon.admits(&fresh));
        assert!(!ProductTab::ExpiringSoon.admits(&low));
        assert!(ProductTab::All.admits(&low) && ProductTab::All.admits(&fresh));
    }

    #[test]
    fn unknown_tab_does_not_parse() {
        assert_eq!("low-stock".parse::<ProductTab>(), Ok(ProductTab::LowStock));
        assert!("archived".parse::<ProductTab>().is_err());
        assert_eq!("inventory".parse::<LogisticsTab>(), Ok(LogisticsTab::Inventory));
    }

    #[test]
    fn bounded_fields_are_clamped() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let shipment = Shipment::new("S", "A", "B", 1, ShipmentStatus::Pending, 150, date, date);
        assert_eq!(shipment.progress(), 100);
        let location = InventoryLocation::new("L", "Depot", 120, &[("Dairy", 4), ("Bakery", 6)], 0);
        assert_eq!(location.capacity(), 100);
        assert_eq!(location.total_items(), 10);
    }

    #[test]
    fn serialized_records_carry_clamped_values() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
        let shipment = Shipment::new("S", "A", "B", 1, ShipmentStatus::InTransit, 250, date, date);
        let json = serde_json::to_value(&shipment).unwrap();
        assert_eq!(json["progress"], 100);
        assert_eq!(json["status"], "in-transit");
    }
}
