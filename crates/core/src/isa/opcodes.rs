//! Y86-64 instruction codes and function codes.
//!
//! An instruction's first byte carries the instruction code (`icode`) in the
//! upper nibble and the function code (`ifun`) in the lower nibble. `CMOVXX`
//! shares the `RRMOVQ` icode and is distinguished by a non-zero `ifun`.

/// Halt the processor.
pub const HALT: u8 = 0x0;
/// No operation.
pub const NOP: u8 = 0x1;
/// Register-to-register move; also `CMOVXX` when `ifun` is non-zero.
pub const RRMOVQ: u8 = 0x2;
/// Immediate-to-register move.
pub const IRMOVQ: u8 = 0x3;
/// Register-to-memory move (store).
pub const RMMOVQ: u8 = 0x4;
/// Memory-to-register move (load).
pub const MRMOVQ: u8 = 0x5;
/// Integer ALU operation; `ifun` selects the operation.
pub const OPQ: u8 = 0x6;
/// Conditional jump; `ifun` selects the condition.
pub const JXX: u8 = 0x7;
/// Procedure call.
pub const CALL: u8 = 0x8;
/// Procedure return.
pub const RET: u8 = 0x9;
/// Push onto the stack.
pub const PUSHQ: u8 = 0xA;
/// Pop from the stack.
pub const POPQ: u8 = 0xB;

/// Function codes for `OPQ`.
pub mod alu {
    pub const ADD: u8 = 0x0;
    pub const SUB: u8 = 0x1;
    pub const AND: u8 = 0x2;
    pub const XOR: u8 = 0x3;
}

/// Function codes for `JXX` and `CMOVXX` condition selection.
pub mod cc {
    /// Unconditional.
    pub const YES: u8 = 0x0;
    pub const LE: u8 = 0x1;
    pub const L: u8 = 0x2;
    pub const E: u8 = 0x3;
    pub const NE: u8 = 0x4;
    pub const GE: u8 = 0x5;
    pub const G: u8 = 0x6;
}

/// Mnemonic for an instruction code, for trace output.
pub fn name(icode: u8) -> &'static str {
    match icode {
        HALT => "halt",
        NOP => "nop",
        RRMOVQ => "rrmovq",
        IRMOVQ => "irmovq",
        RMMOVQ => "rmmovq",
        MRMOVQ => "mrmovq",
        OPQ => "opq",
        JXX => "jxx",
        CALL => "call",
        RET => "ret",
        PUSHQ => "pushq",
        POPQ => "popq",
        _ => "??",
    }
}
