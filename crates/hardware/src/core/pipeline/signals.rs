//! Pipeline control signals and operation types.
//!
//! This module defines the signals produced by decode and consumed downstream:
//! 1. **ALU Function:** The operation the execute stage applies.
//! 2. **Branch Sense:** Whether a conditional branch is taken on equality or inequality.
//! 3. **Resolution Bits:** The `cond` bits raised when control flow is resolved.

/// ALU function selected by decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// No operation; the result is zero.
    #[default]
    Nop,

    /// Wrapping addition (also address generation and moves).
    Add,

    /// Wrapping subtraction (also branch comparison).
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Set less than (signed); the result is 0 or 1.
    Slt,

    /// Shift left logical.
    Shl,
}

/// Sense of a pending conditional branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchSense {
    /// Taken when the operands compare equal (`beq`).
    #[default]
    Eq,

    /// Taken when the operands differ (`bne`).
    Ne,
}

impl BranchSense {
    /// Evaluates the branch on the subtract result `val_e`.
    #[inline]
    pub const fn taken(self, val_e: u32) -> bool {
        match self {
            Self::Eq => val_e == 0,
            Self::Ne => val_e != 0,
        }
    }
}

/// `cond` bit: an unconditional jump was resolved in decode this cycle.
pub const COND_JUMP: u8 = 0b01;

/// `cond` bit: a conditional branch resolved taken in execute this cycle.
pub const COND_TAKEN: u8 = 0b10;
