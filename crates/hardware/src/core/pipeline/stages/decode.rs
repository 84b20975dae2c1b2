//! Instruction Decode (ID) Stage.
//!
//! Decode works in two phases. First the opcode is looked up in the decode
//! table and the operand slots are resolved against the instruction; if an
//! input still waits on a load, decode stalls. Otherwise a pure dispatch on
//! the opcode selects the ALU function, records branch and jump state in the
//! control block, and chooses the forwarding sources and destinations.

use crate::common::RegId;
use crate::common::constants::JUMP_REGION_MASK;
use crate::core::Cpu;
use crate::core::pipeline::hazards::need_stall;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::pipeline::signals::{AluOp, BranchSense, COND_JUMP};
use crate::isa::disasm::branch_target;
use crate::isa::opcodes as op;
use crate::isa::{InstFlags, OpInfo};

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `if_id` - The IF/ID entry at the start of this cycle
///
/// # Returns
///
/// The ID/EX entry. On a stall only the instruction and PC are filled in;
/// the controller replays the instruction next cycle.
pub fn decode_stage(cpu: &mut Cpu, if_id: &IfId) -> IdEx {
    let inst = if_id.inst;
    let mut de = IdEx {
        inst,
        pc: if_id.pc,
        opcode: inst.opcode(),
        ..IdEx::default()
    };
    if inst.is_nop() {
        return de;
    }

    let info = cpu.decoder.lookup(de.opcode).unwrap_or_else(|| {
        tracing::warn!(
            opcode = format_args!("{:#04x}", de.opcode),
            pc = format_args!("{:#010x}", de.pc),
            "unknown opcode decoded as no-op"
        );
        OpInfo::default()
    });
    let operands = info.resolve(inst);
    let is_load = info.flags.contains(InstFlags::LOAD);

    if need_stall(&operands, is_load, cpu.control.regs) {
        cpu.control.stall = true;
        cpu.stats.stalls_data += 1;
        tracing::debug!(pc = format_args!("{:#010x}", de.pc), "load-use stall");
        return de;
    }
    cpu.control.stall = false;

    de.flags = info.flags;
    de.operands = operands;
    de.func = match de.opcode {
        op::LUI => {
            de.flags = de.flags | InstFlags::IMM;
            AluOp::Add
        }
        op::LW | op::SW | op::ADD | op::ADDI | op::ADDU | op::ADDIU | op::MFHI | op::MFLO => {
            AluOp::Add
        }
        op::SUB | op::SUBU => AluOp::Sub,
        op::BEQ | op::BNE => {
            cpu.control.flag = true;
            cpu.control.cmp = if de.opcode == op::BNE {
                BranchSense::Ne
            } else {
                BranchSense::Eq
            };
            de.target = branch_target(de.pc, inst.imm());
            AluOp::Sub
        }
        op::AND | op::ANDI => AluOp::And,
        op::OR | op::ORI => AluOp::Or,
        op::SLL => AluOp::Shl,
        op::SLT | op::SLTI => AluOp::Slt,
        op::JUMP => {
            cpu.control.flag = true;
            cpu.control.cond |= COND_JUMP;
            de.target = (de.pc & JUMP_REGION_MASK) | (inst.target() << 2);
            AluOp::Nop
        }
        _ => AluOp::Nop,
    };

    de.src_a = if de.flags.contains(InstFlags::DISP) {
        operands.in2
    } else {
        operands.in1
    };
    de.src_b = operands.in2;

    de.mem_write = de.flags.contains(InstFlags::STORE);
    de.mem_read = is_load;

    // Only GPRs other than r0 are published; accumulators are written by execute.
    let writable = |r: &RegId| r.is_gpr() && *r != RegId::ZERO;
    if is_load {
        de.dst_m = operands.out1.filter(writable);
        if let Some(dst) = de.dst_m {
            cpu.control.regs.insert(dst);
        }
    } else {
        de.dst_e = operands.out1.filter(writable);
    }

    de
}
