// Domain layer: models and ports (capability interfaces). No dependencies beyond std/serde.

pub mod model;
pub mod ports;
