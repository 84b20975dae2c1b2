//! Global System Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Instruction Constants:** PISA instruction width and field masks.
//! 2. **Register Constants:** GPR count and accumulator identifiers.
//! 3. **Memory Constants:** Word and page geometry for the backing store.

/// Size of one PISA instruction in bytes (two 32-bit words).
pub const INSTRUCTION_SIZE: u32 = 8;

/// Size of one memory word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Mask for the opcode field held in the low byte of instruction word `a`.
pub const OPCODE_MASK: u32 = 0xFF;

/// Mask for a register field in instruction word `b`.
pub const REG_FIELD_MASK: u32 = 0xFF;

/// Bit position of the `rs` field in instruction word `b`.
pub const RS_SHIFT: u32 = 24;

/// Bit position of the `rt` field in instruction word `b`.
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` field in instruction word `b`.
pub const RD_SHIFT: u32 = 8;

/// Mask for the 16-bit immediate field in instruction word `b`.
pub const IMM_MASK: u32 = 0xFFFF;

/// Mask for the shift-amount field in instruction word `b`.
pub const SHAMT_MASK: u32 = 0xFF;

/// Mask for the 26-bit jump target field in instruction word `b`.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Region bits of the PC preserved by a direct jump.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Register identifier of the HI multiply accumulator.
pub const REG_HI: u8 = 64;

/// Register identifier of the LO multiply accumulator.
pub const REG_LO: u8 = 65;

/// Page size of the sparse backing store in bytes (4KB).
pub const PAGE_SIZE: u32 = 4096;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u32 = 12;
