//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for keeping the pipeline consistent when
//! instructions depend on each other. It provides:
//! 1. **In-Flight Tracking:** `InFlightRegs`, the set of registers with an
//!    outstanding load write.
//! 2. **Hazard Detection:** Decides whether decode must stall.
//! 3. **Operand Forwarding:** Resolves Read-After-Write hazards by bypassing
//!    the register file with values still travelling down the pipeline.

use crate::common::{RegId, RegisterFile};
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb, WbLatch};
use crate::isa::decode::Operands;

/// Fixed-width bitmask of registers whose load result is still in flight.
///
/// Identifiers up to 127 are tracked, covering the GPRs and the `HI`/`LO`
/// accumulators. Decode sets a bit when it issues a load; the memory stage
/// clears it when the loaded value becomes forwardable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlightRegs(u128);

impl InFlightRegs {
    #[inline]
    fn bit(reg: RegId) -> u128 {
        1u128.checked_shl(u32::from(reg.raw())).unwrap_or(0)
    }

    /// Marks `reg` as having a write in flight.
    pub fn insert(&mut self, reg: RegId) {
        self.0 |= Self::bit(reg);
    }

    /// Clears the in-flight mark on `reg`.
    pub fn remove(&mut self, reg: RegId) {
        self.0 &= !Self::bit(reg);
    }

    /// Returns `true` if `reg` has a write in flight.
    pub fn contains(self, reg: RegId) -> bool {
        self.0 & Self::bit(reg) != 0
    }

    /// Returns `true` if no register is in flight.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bitmask, bit `n` standing for register `n`.
    pub const fn bits(self) -> u128 {
        self.0
    }
}

/// Checks whether the instruction in decode must stall.
///
/// A stall is required when any input register has a load in flight (the
/// value is not yet forwardable), or when a load would target a register
/// that already has a load in flight (which keeps at most one outstanding
/// writer per register).
///
/// # Arguments
///
/// * `operands` - Resolved operands of the instruction in decode.
/// * `is_load` - Whether that instruction is a load.
/// * `in_flight` - Registers with an outstanding load.
///
/// # Returns
///
/// `true` if decode must stall this cycle.
pub fn need_stall(operands: &Operands, is_load: bool, in_flight: InFlightRegs) -> bool {
    if operands.inputs().any(|r| in_flight.contains(r)) {
        return true;
    }
    is_load && operands.out1.is_some_and(|r| in_flight.contains(r))
}

/// Produces the live value of one source register.
///
/// Destinations are searched youngest first: the execute result, the memory
/// stage's ALU result, the memory stage's loaded value, then the values
/// committed by writeback. With no match the architected register file is
/// read. A missing source yields 0.
///
/// # Arguments
///
/// * `src` - Source register, or `None`.
/// * `ex_mem` - Entry just produced by execute.
/// * `mem_wb` - Entry just produced by memory.
/// * `wb` - Entry just committed by writeback.
/// * `regs` - Architected register file.
pub fn forward(
    src: Option<RegId>,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb: &WbLatch,
    regs: &RegisterFile,
) -> u32 {
    let Some(reg) = src else {
        return 0;
    };
    let hit = |dst: Option<RegId>| dst == Some(reg);

    if hit(ex_mem.dst_e) {
        ex_mem.val_e
    } else if hit(mem_wb.dst_e) {
        mem_wb.val_e
    } else if hit(mem_wb.dst_m) {
        mem_wb.val_m
    } else if hit(wb.dst_e) {
        wb.val_e
    } else if hit(wb.dst_m) {
        wb.val_m
    } else {
        regs.read(reg)
    }
}

/// Fills the operand values of a freshly decoded entry.
///
/// Resolves `alu_a` from `src_a`, `alu_b` from `src_b`, and `val_a` (store
/// data) from the first input register.
pub fn forward_operands(
    id_ex: &mut IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb: &WbLatch,
    regs: &RegisterFile,
) {
    id_ex.alu_a = forward(id_ex.src_a, ex_mem, mem_wb, wb, regs);
    id_ex.alu_b = forward(id_ex.src_b, ex_mem, mem_wb, wb, regs);
    id_ex.val_a = forward(id_ex.operands.in1, ex_mem, mem_wb, wb, regs);
}
