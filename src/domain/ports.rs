use crate::domain::model::{CustomerId, KitEntry, Order, OrderRequest};
use crate::utils::error::{Result, ValidationError};
use chrono::{DateTime, Utc};

/// Source of "now" for the delivery-date check.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Supplies the rows consumed by a catalog import.
pub trait KitSource {
    fn load_kits(&self) -> Result<Vec<KitEntry>>;
}

pub trait OrderService {
    fn place_order(&mut self, request: OrderRequest) -> std::result::Result<Order, ValidationError>;
    fn get_customer_orders(&self, customer_id: CustomerId) -> Vec<Order>;
}
