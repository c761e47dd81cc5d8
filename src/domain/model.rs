use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type KitId = i32;
pub type OrderId = i32;
pub type CustomerId = i32;

pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 999;

pub const DEFAULT_KIT_ID: KitId = 1;
pub const DEFAULT_KIT_VARIANT: &str = "default Kit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    pub id: KitId,
    pub variant: String,
    pub base_price: Decimal,
}

impl Kit {
    /// The kit every fresh catalog starts with: id 1, 98.99.
    pub fn default_kit() -> Self {
        Self {
            id: DEFAULT_KIT_ID,
            variant: DEFAULT_KIT_VARIANT.to_string(),
            base_price: Decimal::new(9899, 2),
        }
    }
}

impl From<KitEntry> for Kit {
    fn from(entry: KitEntry) -> Self {
        Self {
            id: entry.kit_id,
            variant: entry.variant,
            base_price: entry.base_price,
        }
    }
}

/// One row of a catalog import batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitEntry {
    pub kit_id: KitId,
    pub variant: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
}

impl KitEntry {
    pub fn new(kit_id: KitId, variant: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            kit_id,
            variant: variant.into(),
            base_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub expected_delivery_date: DateTime<Utc>,
    pub quantity: i32,
    pub kit_id: KitId,
}

/// A placed order. The total is frozen at placement and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub expected_delivery_date: DateTime<Utc>,
    pub kit_id: KitId,
    pub quantity: i32,
    pub total_price: Decimal,
}
