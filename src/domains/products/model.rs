//! Product rows and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A row of the `product` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw request body for product create/update.
///
/// Kept untyped so validation can name the offending field instead of
/// failing deserialization as a whole. `None` means the key was absent; a
/// key sent as `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub unit: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub quantity: Option<Value>,
}

// Only called for keys that appear in the body, so `null` stays visible.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Validated fields for a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub quantity: i32,
}

/// Validated partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.unit.is_none() && self.price.is_none() && self.quantity.is_none()
    }

    /// Merge the supplied fields into `product`.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(unit) = &self.unit {
            product.unit = unit.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}
