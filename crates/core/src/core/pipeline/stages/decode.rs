//! Decode stage.
//!
//! Derives source and destination register ids from the instruction code
//! and reads the register file. The latch records the decode-time reads;
//! forwarding refines them later without touching the latch, so a
//! stall-replay re-read observes any intervening write-back.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{DeLatch, FdLatch};
use crate::isa::{abi, opcodes};

/// Runs the decode stage on the previous F/D latch.
pub fn decode_stage(cpu: &Cpu, f_d: &FdLatch) -> DeLatch {
    let icode = f_d.icode;

    let src_a = match icode {
        opcodes::RRMOVQ | opcodes::RMMOVQ | opcodes::OPQ | opcodes::PUSHQ => f_d.ra,
        opcodes::POPQ | opcodes::RET => abi::RSP,
        _ => abi::RNONE,
    };
    let src_b = match icode {
        opcodes::OPQ | opcodes::RMMOVQ | opcodes::MRMOVQ => f_d.rb,
        opcodes::PUSHQ | opcodes::POPQ | opcodes::CALL | opcodes::RET => abi::RSP,
        _ => abi::RNONE,
    };
    let dst_e = match icode {
        opcodes::IRMOVQ | opcodes::RRMOVQ | opcodes::OPQ => f_d.rb,
        opcodes::PUSHQ | opcodes::POPQ | opcodes::CALL | opcodes::RET => abi::RSP,
        _ => abi::RNONE,
    };
    let dst_m = match icode {
        opcodes::MRMOVQ | opcodes::POPQ => f_d.ra,
        _ => abi::RNONE,
    };

    let mut vala = cpu.regs.read(src_a) as u64;
    let valb = cpu.regs.read(src_b) as u64;
    // A call carries its return address through valA to the memory stage.
    if icode == opcodes::CALL {
        vala = f_d.valp;
    }

    if cpu.trace && f_d.valid {
        eprintln!(
            "ID  {} srcA={} srcB={} dstE={} dstM={}",
            opcodes::name(icode),
            abi::reg_name(src_a),
            abi::reg_name(src_b),
            abi::reg_name(dst_e),
            abi::reg_name(dst_m)
        );
    }

    DeLatch {
        valid: f_d.valid,
        is_bubble: false,
        icode,
        ifun: f_d.ifun,
        vala,
        valb,
        valc: f_d.valc,
        valp: f_d.valp,
        length: f_d.length,
        dst_e,
        dst_m,
        src_a,
        src_b,
        stat: f_d.stat,
    }
}
