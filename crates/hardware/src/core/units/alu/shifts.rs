//! ALU shift operations.
//!
//! The shift amount comes from the 8-bit `shamt` field, so amounts of 32 or
//! more are possible; they shift every bit out and yield 0.

use crate::core::pipeline::signals::AluOp;

/// Executes a shift operation.
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Shl => match a.checked_shl(b) {
            Some(v) => v,
            None => 0,
        },
        _ => 0,
    }
}
