//! Register file.
//!
//! Fifteen signed 64-bit registers indexed by their 4-bit encoding. The
//! `RNONE` sentinel (and any other out-of-range encoding) reads as zero and
//! swallows writes.

use crate::isa::abi;

/// The architectural register bank.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [i64; abi::NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with all registers zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; abi::NUM_REGS],
        }
    }

    /// Reads a register. `RNONE` reads as 0.
    pub fn read(&self, reg: u8) -> i64 {
        self.regs.get(reg as usize).copied().unwrap_or(0)
    }

    /// Writes a register. Writes to `RNONE` are ignored.
    pub fn write(&mut self, reg: u8, val: i64) {
        if let Some(slot) = self.regs.get_mut(reg as usize) {
            *slot = val;
        }
    }

    /// Copy of the full register bank, in canonical ISA order.
    pub fn dump(&self) -> [i64; abi::NUM_REGS] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
