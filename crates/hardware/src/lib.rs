//! PISA pipeline simulator library.
//!
//! This crate implements a cycle-level simulator of a five-stage in-order
//! pipeline for the 64-bit PISA instruction format. It provides:
//! 1. **Core:** Fetch, decode, execute, memory, and writeback stages with
//!    operand forwarding, load-use stalls, and branch squashing.
//! 2. **Memory:** A sparse word-addressed backing store and an optional
//!    write-back FIFO cache with latency accounting.
//! 3. **ISA:** Instruction field extraction, the opcode decode table, and a
//!    disassembler.
//! 4. **Simulation:** Image loading, system-call emulation, configuration,
//!    and statistics.

/// Common types and constants (registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults and JSON-deserialisable structures).
pub mod config;
/// CPU core (pipeline, execution units, memory path).
pub mod core;
/// Instruction set (fields, decode table, ABI names, disassembly).
pub mod isa;
/// Image loader, system calls, and the run loop.
pub mod sim;
/// Backing memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, latches, cache, and stats.
pub use crate::core::Cpu;
/// Top-level run-loop driver.
pub use crate::sim::simulator::{RunOutcome, Simulator};
