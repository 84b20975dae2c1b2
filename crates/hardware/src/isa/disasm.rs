//! Instruction Disassembler for PISA.
//!
//! Converts a 64-bit PISA instruction into a human-readable mnemonic string
//! for the pipeline trace and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pisa_pipe_core::isa::{Instruction, disasm::disassemble};
//! // addu $3,$1,$2
//! let inst = Instruction::new(0x42, (1 << 24) | (2 << 16) | (3 << 8));
//! assert_eq!(disassemble(inst, 0x0040_0000), "addu $3,$1,$2");
//! ```

use crate::common::constants::{INSTRUCTION_SIZE, JUMP_REGION_MASK};
use crate::isa::decode;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes as op;

/// Disassembles `inst` located at `pc`.
///
/// Branch and jump targets are printed as absolute addresses. Unmodelled
/// opcodes render as `unknown(0xNN)`.
pub fn disassemble(inst: Instruction, pc: u32) -> String {
    let Some(info) = decode::lookup(inst.opcode()) else {
        return format!("unknown({:#04x})", inst.opcode());
    };
    let name = info.name;
    let (rs, rt, rd) = (inst.rs(), inst.rt(), inst.rd());

    match inst.opcode() {
        op::NOP | op::SYSCALL => name.to_string(),
        op::JUMP => {
            let target = (pc & JUMP_REGION_MASK) | (inst.target() << 2);
            format!("{name} {target:#010x}")
        }
        op::BEQ | op::BNE => {
            let target = branch_target(pc, inst.imm());
            format!("{name} {rs},{rt},{target:#010x}")
        }
        op::LW | op::SW => format!("{name} {rt},{}({rs})", inst.imm()),
        op::ADDI | op::ADDIU | op::ANDI | op::ORI | op::SLTI => {
            format!("{name} {rt},{rs},{}", inst.imm())
        }
        op::LUI => format!("{name} {rt},{:#x}", inst.uimm()),
        op::SLL => format!("{name} {rd},{rt},{}", inst.shamt()),
        op::MULTU => format!("{name} {rs},{rt}"),
        op::MFHI | op::MFLO => format!("{name} {rd}"),
        _ => format!("{name} {rd},{rs},{rt}"),
    }
}

/// Computes a PC-relative branch target: `pc + 8 + (imm << 2)`.
pub const fn branch_target(pc: u32, imm: i32) -> u32 {
    pc.wrapping_add(INSTRUCTION_SIZE)
        .wrapping_add((imm << 2) as u32)
}
