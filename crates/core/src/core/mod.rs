//! CPU core: architectural state and the five-stage pipeline.

/// Architectural state and the snapshot recorder.
pub mod cpu;

/// Pipeline latches, hazard unit, and stage logic.
pub mod pipeline;

/// Retirement snapshots and their serialization model.
pub mod snapshot;

pub use cpu::Cpu;
pub use snapshot::Snapshot;
