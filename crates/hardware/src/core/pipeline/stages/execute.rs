//! Instruction Execute (EX) Stage.
//!
//! Selects the second ALU operand, applies the ALU function (or the MULTU
//! multiplier), and resolves a pending conditional branch by testing the
//! subtract result against zero.

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::pipeline::signals::{AluOp, COND_TAKEN};
use crate::core::units::alu::{Alu, arithmetic};
use crate::isa::InstFlags;
use crate::isa::opcodes as op;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `id_ex` - The ID/EX entry at the start of this cycle
///
/// # Returns
///
/// The EX/MEM entry; a bubble if the incoming instruction is `NOP`.
pub fn execute_stage(cpu: &mut Cpu, id_ex: &IdEx) -> ExMem {
    if id_ex.inst.is_nop() {
        return ExMem::default();
    }
    let inst = id_ex.inst;

    let alu_b = if id_ex.flags.contains(InstFlags::IMM) || id_ex.flags.contains(InstFlags::DISP) {
        inst.imm() as u32
    } else if id_ex.func == AluOp::Shl {
        inst.shamt()
    } else {
        id_ex.alu_b
    };

    let val_e = if id_ex.opcode == op::MULTU {
        let (hi, lo) = arithmetic::multu(id_ex.alu_a, alu_b);
        cpu.regs.set_accumulators(hi, lo);
        0
    } else {
        Alu::execute(id_ex.func, id_ex.alu_a, alu_b)
    };

    if cpu.control.flag {
        if cpu.control.cmp.taken(val_e) {
            cpu.control.cond |= COND_TAKEN;
            cpu.stats.branches_taken += 1;
        } else {
            cpu.control.flag = false;
        }
    }

    ExMem {
        inst,
        pc: id_ex.pc,
        val_e,
        val_a: id_ex.val_a,
        dst_e: id_ex.dst_e,
        dst_m: id_ex.dst_m,
        mem_read: id_ex.mem_read,
        mem_write: id_ex.mem_write,
        target: id_ex.target,
    }
}
