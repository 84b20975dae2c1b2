//! PISA Application Binary Interface (ABI) register name constants.
//!
//! Defines the MIPS-style ABI names and the register indices used by the
//! system-call convention.

/// Register r0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register r2 (system call number and return value, v0).
pub const REG_V0: usize = 2;
/// Register r4 (first argument, a0).
pub const REG_A0: usize = 4;
/// Register r5 (second argument, a1).
pub const REG_A1: usize = 5;
/// Register r6 (third argument, a2).
pub const REG_A2: usize = 6;
/// Register r7 (system call error flag, a3).
pub const REG_A3: usize = 7;
/// Register r29 (stack pointer, sp).
pub const REG_SP: usize = 29;

/// ABI names for r0–r31.
pub const NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "s8",
    "ra",
];
