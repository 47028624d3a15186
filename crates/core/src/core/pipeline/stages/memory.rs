//! Memory stage.
//!
//! Performs the data access: loads for `mrmovq`/`popq`/`ret`, stores for
//! `rmmovq`/`pushq`/`call`. A successful `ret` additionally installs the
//! return address as the architectural PC; the driver flushes the
//! speculative instructions behind it the same cycle.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{EmLatch, MwLatch};
use crate::isa::opcodes;
use crate::isa::status::Status;

/// Runs the memory stage on the previous E/M latch.
pub fn memory_stage(cpu: &mut Cpu, e_m: &EmLatch) -> MwLatch {
    let mut m_w = MwLatch {
        valid: e_m.valid,
        is_bubble: e_m.is_bubble,
        icode: e_m.icode,
        vale: e_m.vale,
        valm: 0,
        valp: e_m.valp,
        valc: e_m.valc,
        length: e_m.length,
        dst_e: e_m.dst_e,
        dst_m: e_m.dst_m,
        cnd: e_m.cnd,
        set_cc: e_m.set_cc,
        cc: e_m.cc,
        stat: e_m.stat,
    };

    if !e_m.valid || e_m.stat != Status::Aok {
        return m_w;
    }

    match e_m.icode {
        opcodes::MRMOVQ => match cpu.mem.read64(e_m.vale) {
            Ok(val) => m_w.valm = val,
            Err(_) => m_w.stat = Status::Adr,
        },
        // Pops read through the pre-decrement stack pointer carried in valA.
        opcodes::POPQ | opcodes::RET => match cpu.mem.read64(e_m.vala) {
            Ok(val) => {
                m_w.valm = val;
                if e_m.icode == opcodes::RET {
                    cpu.pc = val;
                }
            }
            Err(_) => m_w.stat = Status::Adr,
        },
        opcodes::RMMOVQ | opcodes::PUSHQ | opcodes::CALL => {
            if cpu.mem.write64(e_m.vale, e_m.vala).is_err() {
                m_w.stat = Status::Adr;
            }
        }
        _ => {}
    }

    if cpu.trace && !e_m.is_bubble {
        eprintln!(
            "MEM {} valE={:#x} valM={:#x} stat={}",
            opcodes::name(e_m.icode),
            m_w.vale,
            m_w.valm,
            m_w.stat
        );
    }

    m_w
}
