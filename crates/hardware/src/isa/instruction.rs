//! PISA Instruction Encoding.
//!
//! A PISA instruction is 64 bits wide, stored as two little-endian words:
//! word `a` carries the opcode in its low byte, word `b` carries the operand
//! fields. This module provides the `Instruction` container and accessors for
//! each field of `b`.

use crate::common::RegId;
use crate::common::constants::{
    IMM_MASK, OPCODE_MASK, RD_SHIFT, REG_FIELD_MASK, RS_SHIFT, RT_SHIFT, SHAMT_MASK, TARGET_MASK,
};
use crate::isa::opcodes;

/// A raw 64-bit PISA instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Opcode word.
    pub a: u32,
    /// Operand word.
    pub b: u32,
}

impl Instruction {
    /// The bubble sentinel (opcode `NOP`, no operands).
    pub const NOP: Self = Self { a: 0, b: 0 };

    /// Builds an instruction from its two words.
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Primary opcode.
    #[inline]
    pub const fn opcode(self) -> u8 {
        (self.a & OPCODE_MASK) as u8
    }

    /// Returns `true` when the instruction is the NOP sentinel.
    #[inline]
    pub const fn is_nop(self) -> bool {
        self.opcode() == opcodes::NOP
    }

    /// Source register `rs` (bits 31..24 of `b`).
    #[inline]
    pub const fn rs(self) -> RegId {
        RegId::new(((self.b >> RS_SHIFT) & REG_FIELD_MASK) as u8)
    }

    /// Source/target register `rt` (bits 23..16 of `b`).
    #[inline]
    pub const fn rt(self) -> RegId {
        RegId::new(((self.b >> RT_SHIFT) & REG_FIELD_MASK) as u8)
    }

    /// Destination register `rd` (bits 15..8 of `b`).
    #[inline]
    pub const fn rd(self) -> RegId {
        RegId::new(((self.b >> RD_SHIFT) & REG_FIELD_MASK) as u8)
    }

    /// Shift amount (bits 7..0 of `b`).
    #[inline]
    pub const fn shamt(self) -> u32 {
        self.b & SHAMT_MASK
    }

    /// Sign-extended 16-bit immediate.
    #[inline]
    pub const fn imm(self) -> i32 {
        (self.b & IMM_MASK) as u16 as i16 as i32
    }

    /// Zero-extended 16-bit immediate.
    #[inline]
    pub const fn uimm(self) -> u32 {
        self.b & IMM_MASK
    }

    /// 26-bit jump target field (word index).
    #[inline]
    pub const fn target(self) -> u32 {
        self.b & TARGET_MASK
    }
}
