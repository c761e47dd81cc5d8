pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CsvKitSource, FixedClock, SystemClock};
pub use config::toml_config::SessionConfig;
pub use core::order_service::OrderCatalogService;
pub use domain::model::{Kit, KitEntry, Order, OrderRequest};
pub use domain::ports::{Clock, KitSource, OrderService};
pub use domain::pricing::{round_to_cents, total_price, DiscountTier};
pub use utils::error::{KitOrderError, Result, ValidationError};
