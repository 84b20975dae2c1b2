//! PISA instruction encoders.
//!
//! Word `a` holds the opcode; word `b` packs `rs` (bits 31..24), `rt`
//! (23..16), `rd` (15..8) and `shamt` (7..0), or a 16-bit immediate in its
//! low half.

use pisa_pipe_core::isa::Instruction;
use pisa_pipe_core::isa::opcodes as op;

fn r3(opcode: u8, rd: u8, rs: u8, rt: u8) -> Instruction {
    Instruction::new(
        u32::from(opcode),
        (u32::from(rs) << 24) | (u32::from(rt) << 16) | (u32::from(rd) << 8),
    )
}

fn ri(opcode: u8, rt: u8, rs: u8, imm: i16) -> Instruction {
    Instruction::new(
        u32::from(opcode),
        (u32::from(rs) << 24) | (u32::from(rt) << 16) | u32::from(imm as u16),
    )
}

pub fn nop() -> Instruction {
    Instruction::NOP
}

pub fn add(rd: u8, rs: u8, rt: u8) -> Instruction {
    r3(op::ADD, rd, rs, rt)
}

pub fn addu(rd: u8, rs: u8, rt: u8) -> Instruction {
    r3(op::ADDU, rd, rs, rt)
}

pub fn sub(rd: u8, rs: u8, rt: u8) -> Instruction {
    r3(op::SUB, rd, rs, rt)
}

pub fn and(rd: u8, rs: u8, rt: u8) -> Instruction {
    r3(op::AND, rd, rs, rt)
}

pub fn or(rd: u8, rs: u8, rt: u8) -> Instruction {
    r3(op::OR, rd, rs, rt)
}

pub fn slt(rd: u8, rs: u8, rt: u8) -> Instruction {
    r3(op::SLT, rd, rs, rt)
}

pub fn addi(rt: u8, rs: u8, imm: i16) -> Instruction {
    ri(op::ADDI, rt, rs, imm)
}

pub fn addiu(rt: u8, rs: u8, imm: i16) -> Instruction {
    ri(op::ADDIU, rt, rs, imm)
}

pub fn andi(rt: u8, rs: u8, imm: i16) -> Instruction {
    ri(op::ANDI, rt, rs, imm)
}

pub fn ori(rt: u8, rs: u8, imm: i16) -> Instruction {
    ri(op::ORI, rt, rs, imm)
}

pub fn slti(rt: u8, rs: u8, imm: i16) -> Instruction {
    ri(op::SLTI, rt, rs, imm)
}

pub fn lui(rt: u8, imm: i16) -> Instruction {
    ri(op::LUI, rt, 0, imm)
}

pub fn lw(rt: u8, offset: i16, base: u8) -> Instruction {
    ri(op::LW, rt, base, offset)
}

pub fn sw(rt: u8, offset: i16, base: u8) -> Instruction {
    ri(op::SW, rt, base, offset)
}

/// Branch offsets count instructions relative to `pc + 8`.
pub fn beq(rs: u8, rt: u8, offset: i16) -> Instruction {
    ri(op::BEQ, rt, rs, offset)
}

pub fn bne(rs: u8, rt: u8, offset: i16) -> Instruction {
    ri(op::BNE, rt, rs, offset)
}

/// Jumps to an absolute address within the current 256 MiB region.
pub fn jump(addr: u32) -> Instruction {
    Instruction::new(u32::from(op::JUMP), (addr >> 2) & 0x03ff_ffff)
}

pub fn sll(rd: u8, rt: u8, shamt: u8) -> Instruction {
    Instruction::new(
        u32::from(op::SLL),
        (u32::from(rt) << 16) | (u32::from(rd) << 8) | u32::from(shamt),
    )
}

pub fn multu(rs: u8, rt: u8) -> Instruction {
    r3(op::MULTU, 0, rs, rt)
}

pub fn mfhi(rd: u8) -> Instruction {
    r3(op::MFHI, rd, 0, 0)
}

pub fn mflo(rd: u8) -> Instruction {
    r3(op::MFLO, rd, 0, 0)
}

pub fn syscall() -> Instruction {
    Instruction::new(u32::from(op::SYSCALL), 0)
}

/// An opcode absent from the decode table.
pub fn unknown(opcode: u8) -> Instruction {
    Instruction::new(u32::from(opcode), 0x0102_0300)
}
