//! Register identifiers and canonical register names.
//!
//! Y86-64 has fifteen architectural registers encoded in four bits; the
//! remaining encoding `0xF` is `RNONE`, the "no register" sentinel used in
//! instruction encodings and pipeline latches.

pub const RAX: u8 = 0x0;
pub const RCX: u8 = 0x1;
pub const RDX: u8 = 0x2;
pub const RBX: u8 = 0x3;
pub const RSP: u8 = 0x4;
pub const RBP: u8 = 0x5;
pub const RSI: u8 = 0x6;
pub const RDI: u8 = 0x7;
pub const R8: u8 = 0x8;
pub const R9: u8 = 0x9;
pub const R10: u8 = 0xA;
pub const R11: u8 = 0xB;
pub const R12: u8 = 0xC;
pub const R13: u8 = 0xD;
pub const R14: u8 = 0xE;
/// The "no register" sentinel. Reads yield 0; writes are ignored.
pub const RNONE: u8 = 0xF;

/// Number of architectural registers.
pub const NUM_REGS: usize = 15;

/// Canonical ISA register order, as used in snapshot output.
pub const REG_NAMES: [&str; NUM_REGS] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14",
];

/// Name of a register id; empty for `RNONE` or out-of-range encodings.
pub fn reg_name(reg: u8) -> &'static str {
    REG_NAMES.get(reg as usize).copied().unwrap_or("")
}
