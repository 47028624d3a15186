//! Architectural CPU state.
//!
//! Everything observable lives here: PC, registers, memory, condition
//! codes, status, and the retirement snapshot log. The pipeline stages
//! mutate this state; the latches between them live in
//! [`crate::core::pipeline`].

use crate::common::mem::Memory;
use crate::common::reg::RegisterFile;
use crate::core::snapshot::Snapshot;
use crate::isa::cond::ConditionCodes;
use crate::isa::status::Status;
use crate::stats::SimStats;

/// Architectural state plus simulation bookkeeping.
pub struct Cpu {
    /// Program counter (speculative during execution; snapshots carry the
    /// sequential view).
    pub pc: u64,
    pub regs: RegisterFile,
    pub mem: Memory,
    pub cc: ConditionCodes,
    pub stat: Status,
    /// Set when a `halt` retires; fetch has already ceased by then.
    pub halted: bool,
    /// Emit per-stage trace lines and the pipeline diagram on stderr.
    pub trace: bool,
    pub stats: SimStats,
    /// One entry per retired instruction, in program order.
    pub snapshots: Vec<Snapshot>,
}

impl Cpu {
    /// Creates a CPU in the reset state.
    pub fn new() -> Self {
        Self {
            pc: 0,
            regs: RegisterFile::new(),
            mem: Memory::new(),
            cc: ConditionCodes::default(),
            stat: Status::Aok,
            halted: false,
            trace: false,
            stats: SimStats::default(),
            snapshots: Vec::new(),
        }
    }

    /// Records one retirement snapshot.
    ///
    /// `cc` is the value carried through the pipeline by the retiring
    /// instruction, not the live flags; that distinction is what makes the
    /// snapshot stream read like a sequential execution.
    pub fn record_snapshot(&mut self, pc: u64, cc: ConditionCodes) {
        let snap = Snapshot::capture(pc, &self.regs, &self.mem, cc, self.stat);
        self.snapshots.push(snap);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
