//! Main Execution Loop.
//!
//! This module implements one simulated clock cycle. It performs:
//! 1. **Controller Pre-Pass:** Applies last cycle's squash and stall decisions.
//! 2. **Stage Pass:** WB, MEM, EX, ID, Forward, IF, each reading the current
//!    latches and writing the next ones.
//! 3. **Latch Swap:** The next latches become current at the cycle boundary.
//! 4. **Observability:** Optional per-cycle pipeline trace.

use super::Cpu;
use crate::common::{RegId, SimError};
use crate::core::pipeline::control::pipeline_control;
use crate::core::pipeline::hazards::forward_operands;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::isa::Instruction;
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    ///
    /// Does nothing once the program has exited.
    ///
    /// # Errors
    ///
    /// Returns the fatal error raised by a stage. The latches, control state
    /// and counters are then restored to their values at the start of the
    /// cycle. Register commits and memory side effects made before the fault
    /// are not undone.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.exit_code.is_some() {
            return Ok(());
        }

        let latches = self.latches;
        let control = self.control;
        let stats = self.stats.clone();
        if let Err(err) = self.cycle() {
            self.latches = latches;
            self.control = control;
            self.stats = stats;
            return Err(err);
        }

        if self.trace {
            self.trace_pipeline();
        }
        Ok(())
    }

    fn cycle(&mut self) -> Result<(), SimError> {
        pipeline_control(&mut self.control, &mut self.latches, &mut self.stats);
        self.stats.cycles += 1;
        self.stats.clock += 1;

        let cur = self.latches;
        let mut next = Latches::default();

        next.wb = wb_stage(self, &cur.mem_wb)?;
        if self.exit_code.is_some() {
            self.latches = next;
            return Ok(());
        }
        next.mem_wb = mem_stage(self, &cur.ex_mem)?;
        next.ex_mem = execute_stage(self, &cur.id_ex);
        next.id_ex = decode_stage(self, &cur.if_id);
        forward_operands(
            &mut next.id_ex,
            &next.ex_mem,
            &next.mem_wb,
            &next.wb,
            &self.regs,
        );
        next.if_id = fetch_stage(self, &cur.if_id, &next)?;

        self.latches = next;
        Ok(())
    }

    /// Logs the instruction held by each latch and a few registers.
    pub fn trace_pipeline(&self) {
        let l = &self.latches;
        let row = |inst: Instruction, pc: u32| {
            if inst.is_nop() {
                "-".to_string()
            } else {
                format!("{pc:#010x} {}", disassemble(inst, pc))
            }
        };
        tracing::info!(
            "cycle {} (clock {})",
            self.stats.cycles,
            self.stats.clock
        );
        tracing::info!("  IF  {}", row(l.if_id.inst, l.if_id.pc));
        tracing::info!("  ID  {}", row(l.id_ex.inst, l.id_ex.pc));
        tracing::info!("  EX  {}", row(l.ex_mem.inst, l.ex_mem.pc));
        tracing::info!("  MEM {}", row(l.mem_wb.inst, l.mem_wb.pc));
        tracing::info!("  WB  {}", row(l.wb.inst, l.wb.pc));

        let regs: Vec<String> = (1..=8)
            .map(|r| {
                let id = RegId::new(r);
                format!("{id}={:#x}", self.regs.read(id))
            })
            .collect();
        tracing::info!(
            stall = self.control.stall,
            in_flight = format_args!("{:#x}", self.control.regs.bits()),
            "  {}",
            regs.join(" ")
        );
    }
}
