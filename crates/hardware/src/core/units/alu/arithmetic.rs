//! ALU arithmetic operations.
//!
//! Wrapping add and subtract, plus the unsigned widening multiply used by
//! `multu`. The multiply is modelled as the iterative shift-and-add a
//! sequential hardware multiplier performs, producing the 64-bit product as
//! a `(hi, lo)` pair.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Unsigned 32x32 multiply by shift-and-add.
///
/// For each set bit `i` of the multiplier, the multiplicand shifted left by
/// `i` is added into a 64-bit accumulator held as two 32-bit halves, with
/// the carry out of the low half propagated into the high half.
///
/// # Returns
///
/// `(hi, lo)`: the upper and lower 32 bits of `a * b`.
pub const fn multu(a: u32, b: u32) -> (u32, u32) {
    let mut hi: u32 = 0;
    let mut lo: u32 = 0;
    let mut i = 0;
    while i < 32 {
        if (b >> i) & 1 == 1 {
            let part_lo = a << i;
            let part_hi = if i == 0 { 0 } else { a >> (32 - i) };
            let (sum, carry) = lo.overflowing_add(part_lo);
            lo = sum;
            hi = hi.wrapping_add(part_hi).wrapping_add(carry as u32);
        }
        i += 1;
    }
    (hi, lo)
}
