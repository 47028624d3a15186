//! Hazard unit tests over hand-built latches.

use y86_core::core::pipeline::hazards::{forward_operands, needs_load_use_stall};
use y86_core::core::pipeline::latches::{DeLatch, EmLatch, MwLatch};
use y86_core::isa::{abi, opcodes};

fn consumer(icode: u8, src_a: u8, src_b: u8) -> DeLatch {
    DeLatch {
        valid: true,
        icode,
        src_a,
        src_b,
        vala: 0xAAAA,
        valb: 0xBBBB,
        ..DeLatch::default()
    }
}

/// The ALU result one stage ahead wins over the older one.
#[test]
fn e_m_dst_e_has_priority() {
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RNONE);
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RAX,
        vale: 1,
        ..EmLatch::default()
    };
    let m_w = MwLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RAX,
        vale: 2,
        ..MwLatch::default()
    };
    let (vala, _) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 1);
}

/// With no match in E/M, the older ALU result is used.
#[test]
fn m_w_dst_e_as_fallback() {
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RNONE);
    let e_m = EmLatch::default();
    let m_w = MwLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RAX,
        vale: 2,
        ..MwLatch::default()
    };
    let (vala, _) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 2);
}

/// The memory result forwards when no ALU destination matches.
#[test]
fn m_w_dst_m_forwards_load_result() {
    let d_e = consumer(opcodes::OPQ, abi::RCX, abi::RNONE);
    let e_m = EmLatch::default();
    let m_w = MwLatch {
        valid: true,
        icode: opcodes::MRMOVQ,
        dst_m: abi::RCX,
        valm: 7,
        ..MwLatch::default()
    };
    let (vala, _) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 7);
}

/// Within M/W, the ALU destination outranks the memory destination.
#[test]
fn dst_e_outranks_dst_m() {
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RNONE);
    let e_m = EmLatch::default();
    let m_w = MwLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RAX,
        vale: 3,
        dst_m: abi::RAX,
        valm: 9,
        ..MwLatch::default()
    };
    let (vala, _) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 3);
}

/// A source of `RNONE` never picks anything up, even from a latch whose
/// destination is also `RNONE`.
#[test]
fn rnone_never_matches() {
    let d_e = consumer(opcodes::NOP, abi::RNONE, abi::RNONE);
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RNONE,
        vale: 5,
        ..EmLatch::default()
    };
    let m_w = MwLatch::default();
    let (vala, valb) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 0xAAAA);
    assert_eq!(valb, 0xBBBB);
}

/// A conditional move whose condition failed does not forward its dstE,
/// from either latch.
#[test]
fn untaken_cmov_does_not_forward() {
    let d_e = consumer(opcodes::OPQ, abi::RDX, abi::RNONE);
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::RRMOVQ,
        cnd: false,
        dst_e: abi::RDX,
        vale: 11,
        ..EmLatch::default()
    };
    let m_w = MwLatch {
        valid: true,
        icode: opcodes::RRMOVQ,
        cnd: false,
        dst_e: abi::RDX,
        vale: 22,
        ..MwLatch::default()
    };
    let (vala, _) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 0xAAAA, "register-file value must survive");
}

/// A taken conditional move forwards normally.
#[test]
fn taken_cmov_forwards() {
    let d_e = consumer(opcodes::OPQ, abi::RDX, abi::RNONE);
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::RRMOVQ,
        cnd: true,
        dst_e: abi::RDX,
        vale: 11,
        ..EmLatch::default()
    };
    let (vala, _) = forward_operands(&d_e, &e_m, &MwLatch::default());
    assert_eq!(vala, 11);
}

/// Both operands resolve independently.
#[test]
fn both_operands_resolve() {
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RBX);
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RBX,
        vale: 100,
        ..EmLatch::default()
    };
    let m_w = MwLatch {
        valid: true,
        icode: opcodes::MRMOVQ,
        dst_m: abi::RAX,
        valm: 200,
        ..MwLatch::default()
    };
    let (vala, valb) = forward_operands(&d_e, &e_m, &m_w);
    assert_eq!(vala, 200);
    assert_eq!(valb, 100);
}

/// A load in E/M followed by a consumer of the loaded register stalls.
#[test]
fn load_use_stall_on_src_a() {
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::MRMOVQ,
        dst_m: abi::RAX,
        ..EmLatch::default()
    };
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RBX);
    assert!(needs_load_use_stall(&d_e, &e_m));
}

/// The `srcB` consumers (address/operand forms) also stall.
#[test]
fn load_use_stall_on_src_b() {
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::POPQ,
        dst_m: abi::RBX,
        ..EmLatch::default()
    };
    let d_e = consumer(opcodes::RMMOVQ, abi::RAX, abi::RBX);
    assert!(needs_load_use_stall(&d_e, &e_m));
}

/// `ret` waits for a load of the stack pointer.
#[test]
fn ret_stalls_on_loaded_rsp() {
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::POPQ,
        dst_m: abi::RSP,
        ..EmLatch::default()
    };
    let d_e = consumer(opcodes::RET, abi::RSP, abi::RSP);
    assert!(needs_load_use_stall(&d_e, &e_m));
}

/// Non-consuming instructions do not stall on a pending load.
#[test]
fn no_stall_for_non_consumer() {
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::MRMOVQ,
        dst_m: abi::RAX,
        ..EmLatch::default()
    };
    // jXX reads no registers.
    let d_e = consumer(opcodes::JXX, abi::RNONE, abi::RNONE);
    assert!(!needs_load_use_stall(&d_e, &e_m));
    // pushq consumes srcA, not srcB.
    let push = consumer(opcodes::PUSHQ, abi::RBX, abi::RAX);
    assert!(!needs_load_use_stall(&push, &e_m));
}

/// Only loads trigger the stall; an ALU producer is covered by forwarding.
#[test]
fn no_stall_for_alu_producer() {
    let e_m = EmLatch {
        valid: true,
        icode: opcodes::OPQ,
        dst_e: abi::RAX,
        ..EmLatch::default()
    };
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RBX);
    assert!(!needs_load_use_stall(&d_e, &e_m));
}

/// An empty E/M slot never stalls, whatever stale fields it carries.
#[test]
fn no_stall_for_invalid_latch() {
    let e_m = EmLatch {
        valid: false,
        icode: opcodes::MRMOVQ,
        dst_m: abi::RAX,
        ..EmLatch::default()
    };
    let d_e = consumer(opcodes::OPQ, abi::RAX, abi::RBX);
    assert!(!needs_load_use_stall(&d_e, &e_m));
}
