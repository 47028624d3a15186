//! Instruction parsing.
//!
//! Decoding is a pure function of the memory image and a byte offset. The
//! result always carries a status: an unknown instruction code yields `INS`,
//! and running off the end of memory (first byte, register byte, or the
//! 8-byte immediate) yields `ADR`.

use crate::common::mem::Memory;
use crate::isa::status::Status;
use crate::isa::{abi, opcodes};

/// One parsed instruction.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub icode: u8,
    pub ifun: u8,
    pub ra: u8,
    pub rb: u8,
    /// Immediate or address constant; 0 when the encoding has none.
    pub valc: u64,
    /// Encoded length in bytes: 1, 2, or 10.
    pub length: u64,
    pub stat: Status,
}

impl Default for Instruction {
    fn default() -> Self {
        Self {
            icode: opcodes::NOP,
            ifun: 0,
            ra: abi::RNONE,
            rb: abi::RNONE,
            valc: 0,
            length: 1,
            stat: Status::Aok,
        }
    }
}

/// Whether the encoding of `icode` includes a register byte.
pub fn needs_regids(icode: u8) -> bool {
    matches!(
        icode,
        opcodes::RRMOVQ
            | opcodes::IRMOVQ
            | opcodes::RMMOVQ
            | opcodes::MRMOVQ
            | opcodes::OPQ
            | opcodes::PUSHQ
            | opcodes::POPQ
    )
}

/// Whether the encoding of `icode` includes an 8-byte constant.
pub fn needs_valc(icode: u8) -> bool {
    matches!(
        icode,
        opcodes::IRMOVQ | opcodes::RMMOVQ | opcodes::MRMOVQ | opcodes::JXX | opcodes::CALL
    )
}

/// Parses one instruction starting at byte offset `pc`.
pub fn decode(mem: &Memory, pc: u64) -> Instruction {
    let mut inst = Instruction::default();

    let byte0 = match mem.read8(pc) {
        Ok(b) => b,
        Err(_) => {
            inst.stat = Status::Adr;
            return inst;
        }
    };
    inst.icode = (byte0 >> 4) & 0xF;
    inst.ifun = byte0 & 0xF;
    inst.length = 1;

    if inst.icode > opcodes::POPQ {
        inst.stat = Status::Ins;
        return inst;
    }

    if needs_regids(inst.icode) {
        let regs = match mem.read8(pc + 1) {
            Ok(b) => b,
            Err(_) => {
                inst.stat = Status::Adr;
                return inst;
            }
        };
        inst.ra = (regs >> 4) & 0xF;
        inst.rb = regs & 0xF;
        inst.length = 2;
    }

    if needs_valc(inst.icode) {
        match mem.read64(pc + inst.length) {
            Ok(v) => {
                inst.valc = v;
                inst.length += 8;
            }
            Err(_) => {
                inst.stat = Status::Adr;
                return inst;
            }
        }
    }

    inst
}
