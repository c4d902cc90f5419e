// Value types and the settings port; no I/O here.

pub mod model;
pub mod ports;
