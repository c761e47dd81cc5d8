pub mod order_service;

pub use crate::domain::model::{CustomerId, Kit, KitEntry, KitId, Order, OrderId, OrderRequest};
pub use crate::domain::ports::{Clock, KitSource, OrderService};
pub use crate::utils::error::Result;
