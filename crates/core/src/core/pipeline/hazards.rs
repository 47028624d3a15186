//! Data hazard detection and forwarding.
//!
//! This module keeps dependent instructions correct while five of them are
//! in flight. It provides:
//! 1. **Operand forwarding:** Resolves RAW hazards by bypassing the register
//!    file from the E/M and M/W latches.
//! 2. **Load-use detection:** Identifies the one hazard forwarding cannot
//!    cover, where a load's value is still in the memory stage.

use crate::core::pipeline::latches::{DeLatch, EmLatch, MwLatch};
use crate::isa::{abi, opcodes};

/// Whether a latch's `dstE` result may be forwarded.
///
/// A conditional move whose condition did not hold produces no `dstE`
/// result, even though the register id is set.
fn dst_e_forwards(icode: u8, valid: bool, cnd: bool) -> bool {
    !(icode == opcodes::RRMOVQ && valid && !cnd)
}

/// Resolves the operands an instruction in D/E must observe.
///
/// Forwarding priority per source register: the ALU result one stage ahead
/// (E/M `dstE`), then the older ALU result (M/W `dstE`), then the memory
/// result (M/W `dstM`), and finally the decode-time register read. `RNONE`
/// never matches.
///
/// Pure over its inputs; the caller decides what to do with the resolved
/// `(valA, valB)` pair.
pub fn forward_operands(d_e: &DeLatch, e_m: &EmLatch, m_w: &MwLatch) -> (u64, u64) {
    let resolve = |src: u8, decoded: u64| -> u64 {
        if src == abi::RNONE {
            return decoded;
        }
        if e_m.dst_e == src && dst_e_forwards(e_m.icode, e_m.valid, e_m.cnd) {
            return e_m.vale;
        }
        if m_w.dst_e == src && dst_e_forwards(m_w.icode, m_w.valid, m_w.cnd) {
            return m_w.vale;
        }
        if m_w.dst_m == src {
            return m_w.valm;
        }
        decoded
    };

    (resolve(d_e.src_a, d_e.vala), resolve(d_e.src_b, d_e.valb))
}

/// Whether the instruction in D/E must wait one cycle for a load in E/M.
///
/// Triggered when E/M holds `mrmovq` or `popq` and D/E consumes the loaded
/// register: through `srcA` for the value-consuming forms, through `srcB`
/// for the address/operand forms, or through `rsp` for `ret`.
pub fn needs_load_use_stall(d_e: &DeLatch, e_m: &EmLatch) -> bool {
    if !e_m.valid || !matches!(e_m.icode, opcodes::MRMOVQ | opcodes::POPQ) {
        return false;
    }
    let loaded = e_m.dst_m;
    if loaded == abi::RNONE || !d_e.valid {
        return false;
    }

    if d_e.src_a == loaded
        && matches!(
            d_e.icode,
            opcodes::RRMOVQ | opcodes::RMMOVQ | opcodes::OPQ | opcodes::PUSHQ
        )
    {
        return true;
    }
    if d_e.src_b == loaded
        && matches!(d_e.icode, opcodes::OPQ | opcodes::RMMOVQ | opcodes::MRMOVQ)
    {
        return true;
    }
    d_e.icode == opcodes::RET && loaded == abi::RSP
}
