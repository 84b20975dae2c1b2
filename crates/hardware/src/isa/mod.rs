//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the SimpleScalar PISA encoding used by the pipeline: opcodes,
//! instruction field extraction, the opcode decode table, ABI register names,
//! and a disassembler for tracing.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Opcode decode table (operand slots and flag bits per opcode).
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structure and bit extraction utilities.
pub mod instruction;

/// PISA primary opcode values.
pub mod opcodes;

pub use decode::{DecodeTable, InstFlags, OpInfo, Operand, PisaDecodeTable};
pub use instruction::Instruction;
