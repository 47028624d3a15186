//! The cycle driver.
//!
//! Owns the architectural state and the pipeline side by side and advances
//! them one cycle at a time. Within a cycle the stages run back to front
//! (W, M, E, D, F) over the latches committed at the end of the previous
//! cycle, writing into a fresh set that is swapped in atomically at the end.
//! That fixed order is what lets five overlapping instructions observe a
//! consistent machine: write-back lands before decode's stall-replay
//! re-read, and the forwarding network covers everything younger.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{DeLatch, EmLatch, FdLatch};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};
use crate::core::pipeline::{hazards, Pipeline};
use crate::isa::status::Status;
use crate::isa::{abi, opcodes};

/// Safety cap: a run exceeding this many cycles aborts with `INS`.
pub const MAX_CYCLES: u64 = 1_000_000;

/// Top-level simulator: CPU architectural state + pipeline latches.
pub struct Simulator {
    pub cpu: Cpu,
    pub pipe: Pipeline,
}

impl Simulator {
    /// Creates a simulator in the reset state with empty memory.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            pipe: Pipeline::new(),
        }
    }

    /// Resets the machine and installs a byte image at address 0.
    pub fn load_program(&mut self, image: &[u8]) {
        let trace = self.cpu.trace;
        self.cpu = Cpu::new();
        self.cpu.trace = trace;
        self.cpu.mem.load_image(image);
        self.pipe = Pipeline::new();
    }

    /// Runs the program to completion.
    ///
    /// The loop keeps going while the machine is live (`AOK` and not
    /// halted) or while any latch still carries an entry, so the pipeline
    /// drains after a halt or fault. A drained `HLT` machine whose last
    /// snapshot somehow predates the halt gets one final snapshot at the
    /// halt PC.
    pub fn run(&mut self) {
        while (self.cpu.stat == Status::Aok && !self.cpu.halted) || self.pipe.any_valid() {
            self.cpu.stats.cycles += 1;
            if self.cpu.trace {
                self.print_pipeline_diagram();
            }

            self.tick();

            if self.cpu.halted || self.cpu.stat != Status::Aok {
                if !self.pipe.any_valid() {
                    self.finish_halt_snapshot();
                    break;
                }
            }

            if self.cpu.stats.cycles > MAX_CYCLES {
                self.cpu.stat = Status::Ins;
                break;
            }
        }
    }

    /// Advances the machine by one clock cycle.
    fn tick(&mut self) {
        let f_d_prev = self.pipe.f_d;
        let d_e_prev = self.pipe.d_e;
        let e_m_prev = self.pipe.e_m;
        let m_w_prev = self.pipe.m_w;

        // 1. Write-back retires the oldest instruction first, so its
        //    register results are visible to this cycle's stall replay.
        writeback_stage(&mut self.cpu, &m_w_prev);

        // 2. Memory. A successful ret installs the return address as PC.
        let m_w_new = memory_stage(&mut self.cpu, &e_m_prev);

        // 3. Hazard signals for this cycle.
        let stall = hazards::needs_load_use_stall(&d_e_prev, &e_m_prev);
        if stall {
            self.cpu.stats.stall_cycles += 1;
        }
        let ret_flush =
            m_w_new.valid && m_w_new.icode == opcodes::RET && m_w_new.stat == Status::Aok;

        // 4. Execute, with operands resolved against the latches as they
        //    stood at the start of the cycle. A load-use stall puts a
        //    bubble in E/M instead.
        let mut e_m_new = if stall {
            EmLatch::bubble()
        } else {
            let mut resolved = d_e_prev;
            if resolved.valid {
                let (vala, valb) = hazards::forward_operands(&resolved, &e_m_prev, &m_w_prev);
                resolved.vala = vala;
                resolved.valb = valb;
            }
            execute_stage(&mut self.cpu, &resolved)
        };

        // 5. A taken jXX was predicted not-taken: redirect and flush.
        let jmp_flush = e_m_new.valid && e_m_new.icode == opcodes::JXX && e_m_new.cnd;
        if jmp_flush {
            self.cpu.pc = e_m_new.valc;
        }

        // 6. Decode. On a stall the latch is held but its operands are
        //    re-read so the replay observes this cycle's write-back; a
        //    flush injects a bubble; otherwise the fetched instruction
        //    (or faulted fetch) moves down.
        let d_e_new = if stall {
            let mut held = d_e_prev;
            if held.src_a != abi::RNONE {
                held.vala = self.cpu.regs.read(held.src_a) as u64;
            }
            if held.src_b != abi::RNONE {
                held.valb = self.cpu.regs.read(held.src_b) as u64;
            }
            held
        } else if ret_flush || jmp_flush {
            self.cpu.stats.bubble_cycles += if ret_flush { 3 } else { 2 };
            DeLatch::bubble()
        } else {
            decode_stage(&self.cpu, &f_d_prev)
        };

        // 7. A completed ret also kills the instruction in execute: the
        //    slots behind it held re-fetches of the ret itself.
        if ret_flush {
            e_m_new = EmLatch::bubble();
        }

        // 8. Fetch, unless the front end is frozen by a stall, invalidated
        //    by a flush, or wound down because a halt is in flight.
        let f_d_new = if stall {
            f_d_prev
        } else {
            let halt_in_pipe = (f_d_prev.valid && f_d_prev.icode == opcodes::HALT)
                || (d_e_prev.valid && d_e_prev.icode == opcodes::HALT)
                || (e_m_prev.valid && e_m_prev.icode == opcodes::HALT)
                || (m_w_prev.valid && m_w_prev.icode == opcodes::HALT);
            if ret_flush || jmp_flush || halt_in_pipe {
                FdLatch::default()
            } else {
                fetch_stage(&mut self.cpu)
            }
        };

        // 9. Commit: the new latches become current, atomically.
        self.pipe = Pipeline {
            f_d: f_d_new,
            d_e: d_e_new,
            e_m: e_m_new,
            m_w: m_w_new,
        };
    }

    /// Appends the terminal `HLT` snapshot if the drain finished without
    /// one (the halt's own retirement normally records it).
    fn finish_halt_snapshot(&mut self) {
        if self.cpu.stat != Status::Hlt {
            return;
        }
        let needs_final = self
            .cpu
            .snapshots
            .last()
            .is_some_and(|snap| snap.stat == Status::Aok);
        if needs_final {
            let pc = self.cpu.snapshots.last().map(|snap| snap.pc).unwrap_or(0);
            let cc = self.cpu.cc;
            self.cpu.record_snapshot(pc, cc);
        }
    }

    /// One line per cycle showing which instruction occupies each stage.
    fn print_pipeline_diagram(&self) {
        let fd = |latch: &FdLatch| -> &'static str {
            if latch.valid {
                opcodes::name(latch.icode)
            } else {
                "--"
            }
        };
        let slot = |valid: bool, bubble: bool, icode: u8| -> &'static str {
            if !valid {
                "--"
            } else if bubble {
                "bubble"
            } else {
                opcodes::name(icode)
            }
        };
        eprintln!(
            "[{:^8}] -> [{:^8}] -> [{:^8}] -> [{:^8}]",
            fd(&self.pipe.f_d),
            slot(self.pipe.d_e.valid, self.pipe.d_e.is_bubble, self.pipe.d_e.icode),
            slot(self.pipe.e_m.valid, self.pipe.e_m.is_bubble, self.pipe.e_m.icode),
            slot(self.pipe.m_w.valid, self.pipe.m_w.is_bubble, self.pipe.m_w.icode),
        );
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
