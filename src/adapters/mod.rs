// Adapters layer: concrete implementations of the domain ports (clocks, catalog sources).

pub mod clock;
pub mod csv_source;

pub use clock::{FixedClock, SystemClock};
pub use csv_source::CsvKitSource;
