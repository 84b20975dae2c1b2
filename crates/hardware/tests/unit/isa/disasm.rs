//! Disassembler Tests.

use pisa_pipe_core::isa::Instruction;
use pisa_pipe_core::isa::disasm::{branch_target, disassemble};
use rstest::rstest;

use crate::common::builder::instruction::*;

const PC: u32 = 0x0040_0000;

#[rstest]
#[case(add(3, 1, 2), "add $3,$1,$2")]
#[case(subu_like(), "subu $8,$9,$10")]
#[case(addi(4, 29, -16), "addi $4,$29,-16")]
#[case(lw(2, 8, 29), "lw $2,8($29)")]
#[case(sw(31, -4, 29), "sw $31,-4($29)")]
#[case(beq(1, 0, 2), "beq $1,$0,0x00400010")]
#[case(bne(1, 0, -2), "bne $1,$0,0x00400000")]
#[case(jump(0x0040_0100), "j 0x00400100")]
#[case(sll(5, 6, 3), "sll $5,$6,3")]
#[case(lui(1, 0x1000), "lui $1,0x1000")]
#[case(multu(4, 5), "multu $4,$5")]
#[case(mflo(2), "mflo $2")]
#[case(syscall(), "syscall")]
#[case(nop(), "nop")]
fn renders_mnemonics(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(disassemble(inst, PC), text);
}

fn subu_like() -> Instruction {
    Instruction::new(
        u32::from(pisa_pipe_core::isa::opcodes::SUBU),
        (9 << 24) | (10 << 16) | (8 << 8),
    )
}

#[test]
fn unknown_opcode_is_marked() {
    assert_eq!(disassemble(unknown(0xfe), PC), "unknown(0xfe)");
}

#[test]
fn branch_target_is_sign_extended() {
    assert_eq!(branch_target(0x0040_0010, 1), 0x0040_001c);
    assert_eq!(branch_target(0x0040_0010, -6), 0x0040_0000);
}
