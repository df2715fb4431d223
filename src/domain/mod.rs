// Domain layer: typed models and ports (interfaces).

pub mod model;
pub mod ports;
pub mod staff;
