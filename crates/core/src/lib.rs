//! Y86-64 pipeline simulator library.
//!
//! This crate implements a cycle-accurate five-stage Y86-64 pipeline
//! (SEQ+ with forwarding) with the following:
//! 1. **Core:** Pipeline latches, hazard unit, the five stages, and the
//!    architectural CPU state with its retirement snapshot log.
//! 2. **Memory:** The 1 MiB byte-addressed image with little-endian word
//!    access and the sparse non-zero view used by snapshots.
//! 3. **ISA:** Opcodes, register identifiers, status codes, condition
//!    predicates, and instruction decoding.
//! 4. **Simulation:** The W→M→E→D→F cycle driver, the `.yo` loader, and
//!    statistics collection.

/// Architectural storage (registers, memory) and fault types.
pub mod common;
/// CPU core (pipeline, stages, hazards, snapshots).
pub mod core;
/// Instruction set (opcodes, ABI, status, conditions, decode).
pub mod isa;
/// Cycle driver and object-file loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Architectural CPU state; owns registers, memory, flags, and snapshots.
pub use crate::core::Cpu;
/// One retirement snapshot; serializes to the external JSON shape.
pub use crate::core::Snapshot;
/// Top-level simulator; load a program and `run()` it.
pub use crate::sim::Simulator;
