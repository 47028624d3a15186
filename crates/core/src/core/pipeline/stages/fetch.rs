//! Instruction fetch stage.
//!
//! Parses one instruction at the current PC and speculates the next PC:
//! `call` is always taken, `jXX` is predicted not-taken, `ret` leaves the PC
//! for the memory stage to overwrite, and `halt` freezes it so fetch winds
//! down while the in-flight `halt` drains.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::FdLatch;
use crate::isa::status::Status;
use crate::isa::{decode, opcodes};

/// Runs the fetch stage, returning the new F/D latch and advancing the PC.
pub fn fetch_stage(cpu: &mut Cpu) -> FdLatch {
    if cpu.stat != Status::Aok {
        return FdLatch {
            valid: false,
            stat: cpu.stat,
            ..FdLatch::default()
        };
    }

    let inst = decode::decode(&cpu.mem, cpu.pc);
    let valp = cpu.pc.wrapping_add(inst.length);

    if cpu.trace {
        eprintln!(
            "IF  pc={:#x} {} ifun={:#x} len={}",
            cpu.pc,
            opcodes::name(inst.icode),
            inst.ifun,
            inst.length
        );
    }

    let latch = FdLatch {
        valid: inst.stat == Status::Aok,
        icode: inst.icode,
        ifun: inst.ifun,
        ra: inst.ra,
        rb: inst.rb,
        valc: inst.valc,
        valp,
        length: inst.length,
        stat: inst.stat,
    };

    match inst.icode {
        opcodes::CALL => cpu.pc = inst.valc,
        opcodes::JXX => cpu.pc = valp,
        // The return address is unknown until memory reads it; the driver's
        // return flush installs it.
        opcodes::RET => {}
        // No further instructions after halt.
        opcodes::HALT => {}
        _ => cpu.pc = valp,
    }

    latch
}
