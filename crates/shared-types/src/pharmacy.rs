//! Medicine catalogue and the patient's shopping cart.
//!
//! Prices are held in cents. The cart lives in page state only; checkout
//! validates the shipping details, produces a receipt and empties the cart.

use crate::error::AppError;
use crate::forms::{finish, require};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Orders above this subtotal ship free.
pub const FREE_SHIPPING_OVER_CENTS: u32 = 50_000;

pub const SHIPPING_FEE_CENTS: u32 = 5_000;

pub const DELIVERY_ESTIMATE: &str = "2-3 business days";

/// `1299` → `"$12.99"`.
pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Parse a price typed as dollars (`"12.5"`, `"$3.99"`) into cents.
pub fn parse_price_cents(value: &str) -> Option<u32> {
    let dollars: f64 = value.trim().trim_start_matches('$').parse().ok()?;
    if !dollars.is_finite() || dollars < 0.0 {
        return None;
    }
    Some((dollars * 100.0).round() as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    InStock,
    LowStock,
    OutOfStock,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::LowStock => "Low Stock",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medicine {
    pub id: u32,
    pub name: &'static str,
    pub brand: &'static str,
    pub manufacturer: &'static str,
    pub price_cents: u32,
    pub availability: Availability,
}

impl Medicine {
    pub fn price_label(&self) -> String {
        format_cents(self.price_cents)
    }
}

pub const MEDICINES: &[Medicine] = &[
    Medicine {
        id: 1,
        name: "Aspirin",
        brand: "Bayer",
        manufacturer: "Bayer AG",
        price_cents: 599,
        availability: Availability::InStock,
    },
    Medicine {
        id: 2,
        name: "Paracetamol",
        brand: "Tylenol",
        manufacturer: "Johnson & Johnson",
        price_cents: 399,
        availability: Availability::InStock,
    },
    Medicine {
        id: 3,
        name: "Ibuprofen",
        brand: "Advil",
        manufacturer: "Pfizer",
        price_cents: 799,
        availability: Availability::LowStock,
    },
    Medicine {
        id: 4,
        name: "Amoxicillin",
        brand: "Amoxil",
        manufacturer: "GSK",
        price_cents: 1299,
        availability: Availability::InStock,
    },
];

pub fn find_medicine(id: u32) -> Option<&'static Medicine> {
    MEDICINES.iter().find(|m| m.id == id)
}

/// Medicines whose name or brand contains `query`, case-insensitively.
pub fn search_medicines(query: &str) -> Vec<&'static Medicine> {
    let q = query.trim().to_lowercase();
    MEDICINES
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&q) || m.brand.to_lowercase().contains(&q))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub medicine_id: u32,
    pub name: String,
    pub unit_price_cents: u32,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total_cents(&self) -> u32 {
        self.unit_price_cents.saturating_mul(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
}

impl ShippingInfo {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        require(&mut fields, "address", &self.address, "Address is required");
        require(&mut fields, "city", &self.city, "City is required");
        require(&mut fields, "pincode", &self.pincode, "Pincode is required");
        require(&mut fields, "phone", &self.phone, "Phone is required");
        finish(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub items: usize,
    pub total_cents: u32,
    pub delivery_estimate: &'static str,
}

impl OrderReceipt {
    pub fn summary(&self) -> String {
        format!(
            "Order placed! Total: {}. Your medicine will be delivered in {}.",
            format_cents(self.total_cents),
            self.delivery_estimate
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct medicines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, medicine_id: u32) -> u32 {
        self.items
            .iter()
            .find(|i| i.medicine_id == medicine_id)
            .map_or(0, |i| i.quantity)
    }

    /// Add one unit, or bump the quantity if the medicine is already there.
    pub fn add(&mut self, medicine: &Medicine) -> Result<(), AppError> {
        if medicine.availability == Availability::OutOfStock {
            return Err(AppError::validation(
                format!("{} is out of stock", medicine.name),
                HashMap::new(),
            ));
        }
        match self.items.iter_mut().find(|i| i.medicine_id == medicine.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                medicine_id: medicine.id,
                name: medicine.name.to_string(),
                unit_price_cents: medicine.price_cents,
                quantity: 1,
            }),
        }
        Ok(())
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, medicine_id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(medicine_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.medicine_id == medicine_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, medicine_id: u32) {
        self.items.retain(|i| i.medicine_id != medicine_id);
    }

    pub fn subtotal_cents(&self) -> u32 {
        self.items
            .iter()
            .map(CartItem::line_total_cents)
            .fold(0, u32::saturating_add)
    }

    pub fn shipping_cents(&self) -> u32 {
        if self.is_empty() || self.subtotal_cents() > FREE_SHIPPING_OVER_CENTS {
            0
        } else {
            SHIPPING_FEE_CENTS
        }
    }

    pub fn total_cents(&self) -> u32 {
        self.subtotal_cents() + self.shipping_cents()
    }

    /// Place the order. The cart is emptied only when the order goes through.
    pub fn checkout(&mut self, shipping: &ShippingInfo) -> Result<OrderReceipt, AppError> {
        if self.is_empty() {
            return Err(AppError::validation("Your cart is empty", HashMap::new()));
        }
        shipping.validate()?;
        let receipt = OrderReceipt {
            items: self.len(),
            total_cents: self.total_cents(),
            delivery_estimate: DELIVERY_ESTIMATE,
        };
        tracing::info!(
            items = receipt.items,
            total = %format_cents(receipt.total_cents),
            city = %shipping.city.trim(),
            "order placed"
        );
        self.items.clear();
        Ok(receipt)
    }
}
