//! Pharmacy stock: items, reorder levels and stock status.
//!
//! Status is derived from quantity and reorder level on every read, so an
//! update can never leave a stale status behind.

use crate::error::AppError;
use crate::forms::{finish, optional, require};
use crate::pharmacy::{format_cents, parse_price_cents};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Good,
    Low,
    Critical,
}

impl StockStatus {
    /// Below the reorder level is low; below half of it is critical.
    pub fn for_levels(quantity: u32, reorder_level: u32) -> Self {
        if quantity >= reorder_level {
            StockStatus::Good
        } else if u64::from(quantity) * 2 < u64::from(reorder_level) {
            StockStatus::Critical
        } else {
            StockStatus::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Good => "Good Stock",
            StockStatus::Low => "Low Stock",
            StockStatus::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub reorder_level: u32,
    pub price_cents: u32,
    pub manufacturer: Option<String>,
    pub expiry: Option<NaiveDate>,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        StockStatus::for_levels(self.quantity, self.reorder_level)
    }

    pub fn value_cents(&self) -> u32 {
        self.quantity.saturating_mul(self.price_cents)
    }
}

/// Add-medicine dialog input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDraft {
    pub name: String,
    pub quantity: String,
    pub reorder_level: String,
    pub price: String,
    pub manufacturer: String,
    pub expiry_date: String,
}

fn parse_count(
    fields: &mut HashMap<String, String>,
    name: &str,
    value: &str,
    label: &str,
) -> Option<u32> {
    if value.trim().is_empty() {
        fields.insert(name.to_string(), format!("{label} is required"));
        return None;
    }
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            fields.insert(name.to_string(), format!("{label} must be a whole number"));
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Validate `draft` and append it. Returns the new id.
    pub fn add(&mut self, draft: &InventoryDraft) -> Result<u32, AppError> {
        let mut fields = HashMap::new();
        require(&mut fields, "name", &draft.name, "Medicine name is required");
        let quantity = parse_count(&mut fields, "quantity", &draft.quantity, "Quantity");
        let reorder_level =
            parse_count(&mut fields, "reorder_level", &draft.reorder_level, "Reorder level");
        let price_cents = match optional(&draft.price) {
            Some(text) => parse_price_cents(&text).or_else(|| {
                fields.insert("price".to_string(), "Enter a price such as 4.99".to_string());
                None
            }),
            None => Some(0),
        };
        let expiry = match optional(&draft.expiry_date) {
            Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d").ok().or_else(|| {
                fields.insert(
                    "expiry_date".to_string(),
                    "Enter a date as YYYY-MM-DD".to_string(),
                );
                None
            }),
            None => None,
        };
        finish(fields)?;
        let (Some(quantity), Some(reorder_level), Some(price_cents)) =
            (quantity, reorder_level, price_cents)
        else {
            return Err(AppError::validation("Validation failed", HashMap::new()));
        };

        let id = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let item = InventoryItem {
            id,
            name: draft.name.trim().to_string(),
            quantity,
            reorder_level,
            price_cents,
            manufacturer: optional(&draft.manufacturer),
            expiry,
        };
        tracing::info!(item = %item.name, quantity, status = item.status().label(), "stock added");
        self.items.push(item);
        Ok(id)
    }

    /// Set the on-hand quantity and return the resulting status.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) -> Result<StockStatus, AppError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::not_found(format!("No inventory item with id {id}")))?;
        item.quantity = quantity;
        let status = item.status();
        tracing::debug!(item = %item.name, quantity, status = status.label(), "stock updated");
        Ok(status)
    }

    pub fn remove(&mut self, id: u32) -> Result<InventoryItem, AppError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::not_found(format!("No inventory item with id {id}")))?;
        let removed = self.items.remove(index);
        tracing::info!(item = %removed.name, "stock removed");
        Ok(removed)
    }

    /// Items matching a name search, optionally only those below their
    /// reorder level.
    pub fn filter(&self, query: &str, low_stock_only: bool) -> Vec<&InventoryItem> {
        let q = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&q))
            .filter(|i| !low_stock_only || i.status() != StockStatus::Good)
            .collect()
    }

    pub fn low_stock_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status() != StockStatus::Good)
            .count()
    }

    pub fn total_value_cents(&self) -> u32 {
        self.items
            .iter()
            .map(InventoryItem::value_cents)
            .fold(0, u32::saturating_add)
    }

    pub fn total_value_label(&self) -> String {
        format_cents(self.total_value_cents())
    }
}

fn item(id: u32, name: &str, quantity: u32, reorder_level: u32, price_cents: u32) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        quantity,
        reorder_level,
        price_cents,
        manufacturer: Some("Pharma Corp".to_string()),
        expiry: NaiveDate::from_ymd_opt(2025, 12, 31),
    }
}

pub fn demo_inventory() -> Inventory {
    Inventory::new(vec![
        item(1, "Aspirin 100mg", 45, 20, 599),
        item(2, "Paracetamol 500mg", 12, 20, 399),
        item(3, "Cough Syrup", 6, 15, 850),
        item(4, "Multivitamin", 156, 30, 1499),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn draft() -> InventoryDraft {
        InventoryDraft {
            name: "Cetirizine 10mg".into(),
            quantity: "8".into(),
            reorder_level: "10".into(),
            price: "2.49".into(),
            ..InventoryDraft::default()
        }
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(StockStatus::for_levels(20, 20), StockStatus::Good);
        assert_eq!(StockStatus::for_levels(10, 20), StockStatus::Low);
        assert_eq!(StockStatus::for_levels(9, 20), StockStatus::Critical);
        assert_eq!(StockStatus::for_levels(0, 0), StockStatus::Good);
    }

    #[test]
    fn demo_stock_levels() {
        let inventory = demo_inventory();
        let statuses: Vec<_> = inventory.items().iter().map(InventoryItem::status).collect();
        assert_eq!(
            statuses,
            vec![StockStatus::Good, StockStatus::Low, StockStatus::Critical, StockStatus::Good]
        );
        assert_eq!(inventory.low_stock_count(), 2);
    }

    #[test]
    fn add_appends_with_next_id() {
        let mut inventory = demo_inventory();
        let id = inventory.add(&draft()).unwrap();
        assert_eq!(id, 5);
        let added = inventory.get(5).unwrap();
        assert_eq!(added.price_cents, 249);
        assert_eq!(added.manufacturer, None);
        assert_eq!(added.status(), StockStatus::Low);
    }

    #[test]
    fn add_requires_name_and_whole_counts() {
        let mut inventory = Inventory::default();
        let err = inventory
            .add(&InventoryDraft {
                name: String::new(),
                quantity: "lots".into(),
                ..draft()
            })
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field("name").is_some());
        assert_eq!(err.field("quantity"), Some("Quantity must be a whole number"));
        assert!(inventory.items().is_empty());

        let err = inventory
            .add(&InventoryDraft {
                reorder_level: " ".into(),
                ..draft()
            })
            .unwrap_err();
        assert_eq!(err.field("reorder_level"), Some("Reorder level is required"));
    }

    #[test]
    fn add_rejects_bad_price_and_expiry() {
        let mut inventory = Inventory::default();
        let err = inventory
            .add(&InventoryDraft {
                price: "free".into(),
                expiry_date: "soon".into(),
                ..draft()
            })
            .unwrap_err();
        assert!(err.field("price").is_some());
        assert!(err.field("expiry_date").is_some());
    }

    #[test]
    fn quantity_update_recomputes_status() {
        let mut inventory = demo_inventory();
        assert_eq!(inventory.set_quantity(1, 15).unwrap(), StockStatus::Low);
        assert_eq!(inventory.set_quantity(1, 5).unwrap(), StockStatus::Critical);
        assert_eq!(inventory.set_quantity(3, 40).unwrap(), StockStatus::Good);
        assert_eq!(inventory.low_stock_count(), 2);
    }

    #[test]
    fn unknown_item_is_not_found() {
        let mut inventory = demo_inventory();
        assert_eq!(
            inventory.set_quantity(42, 1).unwrap_err().kind,
            AppErrorKind::NotFound
        );
        assert_eq!(inventory.remove(42).unwrap_err().kind, AppErrorKind::NotFound);
    }

    #[test]
    fn remove_drops_the_item() {
        let mut inventory = demo_inventory();
        let removed = inventory.remove(2).unwrap();
        assert_eq!(removed.name, "Paracetamol 500mg");
        assert_eq!(inventory.items().len(), 3);
        assert!(inventory.get(2).is_none());
    }

    #[test]
    fn low_stock_filter_and_search() {
        let inventory = demo_inventory();
        let low: Vec<_> = inventory.filter("", true).iter().map(|i| i.id).collect();
        assert_eq!(low, vec![2, 3]);
        let syrup = inventory.filter("SYRUP", false);
        assert_eq!(syrup.len(), 1);
        assert!(inventory.filter("aspirin", true).is_empty());
    }

    #[test]
    fn total_value() {
        let inventory = demo_inventory();
        let expected = 45 * 599 + 12 * 399 + 6 * 850 + 156 * 1499;
        assert_eq!(inventory.total_value_cents(), expected);
    }
}
