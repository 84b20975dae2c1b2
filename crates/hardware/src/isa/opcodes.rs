//! PISA primary opcodes.
//!
//! The opcode occupies the low byte of instruction word `a`. Only the integer
//! subset modelled by the pipeline is listed.

/// No operation; also the bubble sentinel.
pub const NOP: u8 = 0x00;
/// Direct jump.
pub const JUMP: u8 = 0x01;
/// Branch on equal.
pub const BEQ: u8 = 0x05;
/// Branch on not equal.
pub const BNE: u8 = 0x06;

/// Load word.
pub const LW: u8 = 0x28;
/// Store word.
pub const SW: u8 = 0x34;

/// Add (signed).
pub const ADD: u8 = 0x40;
/// Add immediate (signed).
pub const ADDI: u8 = 0x41;
/// Add unsigned.
pub const ADDU: u8 = 0x42;
/// Add immediate unsigned.
pub const ADDIU: u8 = 0x43;
/// Subtract (signed).
pub const SUB: u8 = 0x44;
/// Subtract unsigned.
pub const SUBU: u8 = 0x45;
/// Multiply unsigned into HI/LO.
pub const MULTU: u8 = 0x47;
/// Move from HI.
pub const MFHI: u8 = 0x4a;
/// Move from LO.
pub const MFLO: u8 = 0x4c;
/// Bitwise and.
pub const AND: u8 = 0x4e;
/// Bitwise and immediate.
pub const ANDI: u8 = 0x4f;
/// Bitwise or.
pub const OR: u8 = 0x50;
/// Bitwise or immediate.
pub const ORI: u8 = 0x51;
/// Shift left logical by immediate amount.
pub const SLL: u8 = 0x55;
/// Set on less than (signed).
pub const SLT: u8 = 0x5b;
/// Set on less than immediate (signed).
pub const SLTI: u8 = 0x5c;

/// System call.
pub const SYSCALL: u8 = 0xa0;
/// Load upper immediate.
pub const LUI: u8 = 0xa2;
