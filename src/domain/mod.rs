// Domain layer: core models and ports. Adapters implement the ports; the probe consumes them.

pub mod model;
pub mod ports;
