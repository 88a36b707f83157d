// Domain layer: skyline data types and the ports the pipeline is built on.

pub mod model;
pub mod ports;
