//! Memory access fault definitions.

use std::fmt;

/// A failed memory access.
///
/// Stage code maps this onto the architectural `ADR` status; it never
/// crosses the crate boundary as a Rust error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Access past the end of simulated memory. Carries the faulting
    /// address.
    OutOfRange(u64),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::OutOfRange(addr) => write!(f, "OutOfRange({:#x})", addr),
        }
    }
}

impl std::error::Error for Fault {}
