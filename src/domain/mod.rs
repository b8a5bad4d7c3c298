// Domain layer: registry models and ports (interfaces). No chain plumbing here.

pub mod model;
pub mod ports;
