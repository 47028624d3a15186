//! Write-back stage.
//!
//! The retirement point. Commits register results, advances the retired
//! counter, and records one snapshot per real instruction with the PC a
//! sequential machine would fetch next. Bubbles never retire, and once the
//! machine has stopped nothing further commits.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::MwLatch;
use crate::isa::status::Status;
use crate::isa::{abi, opcodes};

/// Runs the write-back stage on the previous M/W latch.
pub fn writeback_stage(cpu: &mut Cpu, m_w: &MwLatch) {
    if cpu.halted || cpu.stat != Status::Aok {
        return;
    }
    if m_w.is_bubble {
        return;
    }

    if m_w.stat != Status::Aok {
        // The ALU result is architectural even when the data access failed
        // (a faulting pushq still moves rsp); the memory destination is not.
        if m_w.dst_e != abi::RNONE {
            cpu.regs.write(m_w.dst_e, m_w.vale as i64);
        }
        cpu.stat = m_w.stat;
        // Report the faulting instruction's own address.
        let fault_pc = m_w.valp.wrapping_sub(m_w.length);
        cpu.record_snapshot(fault_pc, m_w.cc);
        return;
    }

    if !m_w.valid {
        return;
    }

    if cpu.trace {
        eprintln!(
            "WB  {} dstE={} dstM={} valE={:#x} valM={:#x}",
            opcodes::name(m_w.icode),
            abi::reg_name(m_w.dst_e),
            abi::reg_name(m_w.dst_m),
            m_w.vale,
            m_w.valm
        );
    }

    if m_w.dst_e != abi::RNONE {
        // Conditional moves commit only when the condition held; everything
        // else writes dstE unconditionally.
        if m_w.icode != opcodes::RRMOVQ || m_w.cnd {
            cpu.regs.write(m_w.dst_e, m_w.vale as i64);
        }
    }
    if m_w.dst_m != abi::RNONE {
        cpu.regs.write(m_w.dst_m, m_w.valm as i64);
    }

    cpu.stats.instructions_retired += 1;

    // Set before recording so the halt's own snapshot reports HLT.
    if m_w.icode == opcodes::HALT {
        cpu.stat = Status::Hlt;
        cpu.halted = true;
    }

    let pc = match m_w.icode {
        opcodes::CALL => m_w.valc,
        opcodes::JXX if m_w.cnd => m_w.valc,
        opcodes::RET => m_w.valm,
        opcodes::HALT => m_w.valp.wrapping_sub(1),
        _ => m_w.valp,
    };
    cpu.record_snapshot(pc, m_w.cc);
}
