//! Hazard & Branch Controller.
//!
//! Holds the control block shared by every stage and the `pipeline_control`
//! pre-pass that runs at the start of each cycle. The pre-pass acts on what
//! the stages raised during the previous cycle:
//! 1. **Squash:** A taken branch turns the wrong-path instruction in decode
//!    into a bubble.
//! 2. **Stall Replay:** A decode hazard re-injects the stalled instruction
//!    into the fetch latch and sends a bubble down in its place.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::hazards::InFlightRegs;
use crate::core::pipeline::latches::{IdEx, IfId, Latches};
use crate::core::pipeline::signals::{BranchSense, COND_TAKEN};
use crate::stats::SimStats;

/// Control state consulted and mutated by the stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Decode hit a hazard and must replay its instruction.
    pub stall: bool,
    /// A conditional branch (or jump) is in flight and unresolved.
    pub flag: bool,
    /// Sense of the pending conditional branch.
    pub cmp: BranchSense,
    /// Resolution bits raised this cycle (`COND_JUMP`, `COND_TAKEN`).
    pub cond: u8,
    /// Registers with an outstanding load write.
    pub regs: InFlightRegs,
}

/// Applies last cycle's squash and stall decisions to the current latches.
///
/// Runs once per cycle before any stage. A taken branch squashes exactly one
/// instruction (the one decoded behind it); a stall never drops one.
///
/// # Arguments
///
/// * `control` - The shared control block.
/// * `latches` - Current latches, modified in place.
/// * `stats` - Counters for squashes.
pub fn pipeline_control(control: &mut ControlState, latches: &mut Latches, stats: &mut SimStats) {
    if control.cond != 0 {
        if control.cond & COND_TAKEN != 0 {
            let squashed = latches.id_ex;
            if let Some(dst) = squashed.dst_m {
                control.regs.remove(dst);
            }
            if !squashed.inst.is_nop() {
                stats.squashes += 1;
                tracing::debug!(pc = format_args!("{:#010x}", squashed.pc), "squash");
            }
            latches.id_ex = IdEx::default();
            // Anything stalled in decode was fetched down the wrong path.
            control.stall = false;
        }
        control.flag = false;
        control.cond = 0;
    }

    if control.stall {
        let stalled = latches.id_ex;
        latches.if_id = IfId {
            inst: stalled.inst,
            pc: stalled.pc,
            npc: stalled.pc.wrapping_add(INSTRUCTION_SIZE),
        };
        latches.id_ex = IdEx::default();
    }
}
