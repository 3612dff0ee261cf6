// Domain layer: catalogue model and the ports the core depends on.

pub mod model;
pub mod ports;
