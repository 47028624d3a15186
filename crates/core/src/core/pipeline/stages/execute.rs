//! Execute stage.
//!
//! Computes the ALU result and the condition outcome. `opq` updates the
//! architectural flags immediately so that a `jXX` or `cmovXX` executing in
//! a later cycle observes them; every other instruction captures the flags
//! as they stand, which is the value its retirement snapshot must report.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{DeLatch, EmLatch};
use crate::isa::cond::ConditionCodes;
use crate::isa::opcodes::{self, alu};
use crate::isa::status::Status;

/// ALU evaluation for `opq`, including the new condition codes.
///
/// Subtraction computes `valB - valA`. Overflow is arithmetic sign overflow
/// for add/sub; `and`/`xor` cannot overflow, so OF is cleared.
fn alu_op(ifun: u8, vala: i64, valb: i64) -> (i64, ConditionCodes) {
    let vale = match ifun {
        alu::ADD => vala.wrapping_add(valb),
        alu::SUB => valb.wrapping_sub(vala),
        alu::AND => vala & valb,
        alu::XOR => vala ^ valb,
        _ => 0,
    };
    let of = match ifun {
        alu::ADD => (vala > 0 && valb > 0 && vale < 0) || (vala < 0 && valb < 0 && vale > 0),
        alu::SUB => (vala < 0 && valb > 0 && vale < 0) || (vala > 0 && valb < 0 && vale > 0),
        _ => false,
    };
    (
        vale,
        ConditionCodes {
            zf: vale == 0,
            sf: vale < 0,
            of,
        },
    )
}

/// Runs the execute stage on a D/E latch whose operands have already been
/// resolved by the forwarding network.
pub fn execute_stage(cpu: &mut Cpu, d_e: &DeLatch) -> EmLatch {
    let mut e_m = EmLatch {
        valid: d_e.valid,
        is_bubble: d_e.is_bubble,
        icode: d_e.icode,
        vale: 0,
        vala: d_e.vala,
        valc: d_e.valc,
        valp: d_e.valp,
        length: d_e.length,
        dst_e: d_e.dst_e,
        dst_m: d_e.dst_m,
        cnd: false,
        set_cc: false,
        cc: cpu.cc,
        stat: d_e.stat,
    };

    // Faulted fetches and empty slots pass through untouched; the captured
    // flags above are what the fault snapshot reports.
    if !d_e.valid || d_e.stat != Status::Aok {
        return e_m;
    }

    if cpu.trace && !d_e.is_bubble {
        eprintln!(
            "EX  {} valA={:#x} valB={:#x}",
            opcodes::name(d_e.icode),
            d_e.vala,
            d_e.valb
        );
    }

    match d_e.icode {
        opcodes::OPQ => {
            let (vale, cc) = alu_op(d_e.ifun, d_e.vala as i64, d_e.valb as i64);
            e_m.vale = vale as u64;
            e_m.set_cc = true;
            e_m.cc = cc;
            // Visible to condition evaluation in later cycles.
            cpu.cc = cc;
        }
        opcodes::IRMOVQ => {
            e_m.vale = d_e.valc;
            e_m.cnd = true;
        }
        opcodes::RRMOVQ => {
            e_m.vale = d_e.vala;
            e_m.cnd = d_e.ifun == 0 || cpu.cc.holds(d_e.ifun);
        }
        opcodes::RMMOVQ | opcodes::MRMOVQ => {
            e_m.vale = d_e.valb.wrapping_add(d_e.valc);
        }
        opcodes::PUSHQ | opcodes::CALL => {
            e_m.vale = d_e.valb.wrapping_sub(8);
        }
        opcodes::POPQ | opcodes::RET => {
            e_m.vale = d_e.valb.wrapping_add(8);
        }
        opcodes::JXX => {
            e_m.cnd = cpu.cc.holds(d_e.ifun);
        }
        _ => {}
    }

    e_m
}
