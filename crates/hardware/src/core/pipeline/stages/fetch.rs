//! Instruction Fetch (IF) Stage.
//!
//! Selects the next program counter and reads the two words of the
//! instruction there. Redirects take priority in this order: a branch that
//! execute resolved taken this cycle, then a jump that decode resolved this
//! cycle, then the sequential successor.

use crate::common::SimError;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IfId, Latches};
use crate::core::pipeline::signals::{COND_JUMP, COND_TAKEN};

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `if_id` - The IF/ID entry at the start of this cycle
/// * `next` - Entries already produced this cycle by the later stages; the
///   redirect targets are read from them
///
/// # Behavior
///
/// - While decode is stalled and no redirect is pending, nothing is fetched
///   and the IF/ID entry is held unchanged
/// - The access latency is added to the cycle counter
///
/// # Errors
///
/// Returns [`SimError::MemoryFault`] if the fetch faults.
pub fn fetch_stage(cpu: &mut Cpu, if_id: &IfId, next: &Latches) -> Result<IfId, SimError> {
    let cond = cpu.control.cond;
    let pc = if cond & COND_TAKEN != 0 {
        next.ex_mem.target
    } else if cond & COND_JUMP != 0 {
        next.id_ex.target
    } else if cpu.control.stall {
        return Ok(*if_id);
    } else {
        if_id.pc.wrapping_add(INSTRUCTION_SIZE)
    };

    let (inst, latency) = cpu.fetch_instruction(pc)?;
    cpu.stats.clock += latency;

    if cond != 0 {
        tracing::debug!(
            dest = format_args!("{pc:#010x}"),
            taken_branch = cond & COND_TAKEN != 0,
            "redirect fetch"
        );
    }

    Ok(IfId {
        inst,
        pc,
        npc: pc.wrapping_add(INSTRUCTION_SIZE),
    })
}
