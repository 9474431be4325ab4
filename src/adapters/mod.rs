// Adapters layer: concrete implementations of the host-supplied capabilities.

pub mod logging;
