// Domain layer: kit and order models, pricing rules and ports (interfaces).

pub mod model;
pub mod ports;
pub mod pricing;
