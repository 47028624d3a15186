//! Processor status codes.
//!
//! The architectural `STAT` register reports how the machine stopped (or that
//! it has not). Faults are surfaced through this code rather than through
//! Rust errors: a faulting instruction carries its status down the pipeline
//! and commits it at write-back.

use std::fmt;

use serde::{Serialize, Serializer};

/// Architectural status code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// Normal operation.
    #[default]
    Aok = 1,
    /// Halted by a `halt` instruction.
    Hlt = 2,
    /// Memory access (fetch or data) outside the simulated range.
    Adr = 3,
    /// Illegal instruction code, or the cycle-cap safety abort.
    Ins = 4,
}

impl Status {
    /// Numeric code as reported in snapshots.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Aok => write!(f, "AOK"),
            Status::Hlt => write!(f, "HLT"),
            Status::Adr => write!(f, "ADR"),
            Status::Ins => write!(f, "INS"),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}
