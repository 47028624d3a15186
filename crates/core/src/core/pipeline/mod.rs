//! The five-stage pipeline.
//!
//! This module holds the moving parts between fetch and write-back:
//! 1. **Latches:** The four pipeline registers (F/D, D/E, E/M, M/W).
//! 2. **Hazards:** Operand forwarding and the load-use stall predicate.
//! 3. **Stages:** One function per stage, run by the cycle driver.

/// Data hazard detection and forwarding.
pub mod hazards;

/// Pipeline latch structures.
pub mod latches;

/// The five stage functions.
pub mod stages;

use latches::{DeLatch, EmLatch, FdLatch, MwLatch};

/// The four pipeline registers, as committed at the end of a cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline {
    pub f_d: FdLatch,
    pub d_e: DeLatch,
    pub e_m: EmLatch,
    pub m_w: MwLatch,
}

impl Pipeline {
    /// Creates an empty pipeline (all latches invalid).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any latch still holds a live instruction or bubble.
    pub fn any_valid(&self) -> bool {
        self.f_d.valid || self.d_e.valid || self.e_m.valid || self.m_w.valid
    }
}
