// Domain layer: inquiry models and the ports implemented at the edges.

pub mod model;
pub mod ports;
