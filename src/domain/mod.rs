// Domain layer: name lists, placeholders and the ports the engine talks through.

pub mod model;
pub mod ports;
