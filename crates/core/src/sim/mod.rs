//! Simulation driver and object-file loading.

/// `.yo` object-file parsing.
pub mod loader;

/// The cycle driver.
pub mod simulator;

pub use simulator::Simulator;
