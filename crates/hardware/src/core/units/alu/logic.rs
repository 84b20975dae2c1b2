//! ALU logical and comparison operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// `Slt` compares the operands as signed 32-bit integers and yields 0 or 1.
/// Returns `0` for other opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        _ => 0,
    }
}
