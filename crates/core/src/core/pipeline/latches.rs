//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch is a tagged record: `valid` says whether a live entry is
//! present, and `is_bubble` marks entries injected by the hazard unit that
//! must flow through the back end without retiring. A latch that is invalid
//! but carries a non-`AOK` status represents a faulted fetch travelling to
//! write-back.
//!
//! Every latch carries the instruction's encoded `length` so that a faulting
//! write-back can report the instruction's own address (`valP - length`)
//! regardless of encoding size.

use crate::isa::cond::ConditionCodes;
use crate::isa::status::Status;
use crate::isa::{abi, opcodes};

/// F/D latch: fetch output, decode input.
#[derive(Clone, Copy, Debug)]
pub struct FdLatch {
    pub valid: bool,
    pub icode: u8,
    pub ifun: u8,
    pub ra: u8,
    pub rb: u8,
    /// Immediate or address constant.
    pub valc: u64,
    /// Address of the following instruction.
    pub valp: u64,
    /// Encoded instruction length in bytes.
    pub length: u64,
    pub stat: Status,
}

impl Default for FdLatch {
    fn default() -> Self {
        Self {
            valid: false,
            icode: opcodes::NOP,
            ifun: 0,
            ra: abi::RNONE,
            rb: abi::RNONE,
            valc: 0,
            valp: 0,
            length: 1,
            stat: Status::Aok,
        }
    }
}

/// D/E latch: decode output, execute input.
///
/// `vala`/`valb` hold the register-file reads from decode time; the
/// forwarding network supplies fresher values to execute without rewriting
/// the latch, so a stall-replay re-read still starts from the register file.
#[derive(Clone, Copy, Debug)]
pub struct DeLatch {
    pub valid: bool,
    pub is_bubble: bool,
    pub icode: u8,
    pub ifun: u8,
    pub vala: u64,
    pub valb: u64,
    pub valc: u64,
    pub valp: u64,
    pub length: u64,
    pub dst_e: u8,
    pub dst_m: u8,
    pub src_a: u8,
    pub src_b: u8,
    pub stat: Status,
}

impl Default for DeLatch {
    fn default() -> Self {
        Self {
            valid: false,
            is_bubble: false,
            icode: opcodes::NOP,
            ifun: 0,
            vala: 0,
            valb: 0,
            valc: 0,
            valp: 0,
            length: 1,
            dst_e: abi::RNONE,
            dst_m: abi::RNONE,
            src_a: abi::RNONE,
            src_b: abi::RNONE,
            stat: Status::Aok,
        }
    }
}

impl DeLatch {
    /// A live no-op that must not retire.
    pub fn bubble() -> Self {
        Self {
            valid: true,
            is_bubble: true,
            ..Self::default()
        }
    }
}

/// E/M latch: execute output, memory input.
#[derive(Clone, Copy, Debug)]
pub struct EmLatch {
    pub valid: bool,
    pub is_bubble: bool,
    pub icode: u8,
    /// ALU result or effective address.
    pub vale: u64,
    /// Data for stores; the old stack pointer for `popq`/`ret`.
    pub vala: u64,
    /// Jump/call target, carried for the retirement PC.
    pub valc: u64,
    pub valp: u64,
    pub length: u64,
    pub dst_e: u8,
    pub dst_m: u8,
    /// Condition outcome for `jXX` and conditional moves.
    pub cnd: bool,
    /// Whether this instruction produced new condition codes.
    pub set_cc: bool,
    /// Condition codes to report at retirement: the ALU's result for `opq`,
    /// otherwise the flags as they stood when the instruction left execute.
    pub cc: ConditionCodes,
    pub stat: Status,
}

impl Default for EmLatch {
    fn default() -> Self {
        Self {
            valid: false,
            is_bubble: false,
            icode: opcodes::NOP,
            vale: 0,
            vala: 0,
            valc: 0,
            valp: 0,
            length: 1,
            dst_e: abi::RNONE,
            dst_m: abi::RNONE,
            cnd: false,
            set_cc: false,
            cc: ConditionCodes::default(),
            stat: Status::Aok,
        }
    }
}

impl EmLatch {
    /// A live no-op that must not retire.
    pub fn bubble() -> Self {
        Self {
            valid: true,
            is_bubble: true,
            ..Self::default()
        }
    }
}

/// M/W latch: memory output, write-back input.
#[derive(Clone, Copy, Debug)]
pub struct MwLatch {
    pub valid: bool,
    pub is_bubble: bool,
    pub icode: u8,
    pub vale: u64,
    /// Memory read result; the return address for `ret`.
    pub valm: u64,
    pub valp: u64,
    pub valc: u64,
    pub length: u64,
    pub dst_e: u8,
    pub dst_m: u8,
    pub cnd: bool,
    pub set_cc: bool,
    pub cc: ConditionCodes,
    pub stat: Status,
}

impl Default for MwLatch {
    fn default() -> Self {
        Self {
            valid: false,
            is_bubble: false,
            icode: opcodes::NOP,
            vale: 0,
            valm: 0,
            valp: 0,
            valc: 0,
            length: 1,
            dst_e: abi::RNONE,
            dst_m: abi::RNONE,
            cnd: false,
            set_cc: false,
            cc: ConditionCodes::default(),
            stat: Status::Aok,
        }
    }
}
