// Domain layer: account state types and the config port. No I/O here.

pub mod model;
pub mod ports;
