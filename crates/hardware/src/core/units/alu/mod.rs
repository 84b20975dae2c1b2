//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. All
//! operations are 32-bit and wrap on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, and the MULTU shift-and-add multiplier
//! - [`logic`]:      And, Or, Slt
//! - [`shifts`]:     Shl

/// Integer arithmetic operations (add, subtract, unsigned multiply).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, slt).
pub mod logic;

/// Shift operations (sll).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU function selected by decode
    /// * `a`  - First operand
    /// * `b`  - Second operand (also the shift amount for `Shl`)
    ///
    /// # Returns
    ///
    /// The 32-bit result. `AluOp::Nop` yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pisa_pipe_core::core::units::alu::Alu;
    /// use pisa_pipe_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Shl, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Nop, 7, 9), 0);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Shl => shifts::execute(op, a, b),
            AluOp::Nop => 0,
        }
    }
}
