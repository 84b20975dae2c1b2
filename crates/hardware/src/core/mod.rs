//! Core processor implementation.
//!
//! This module contains the CPU context, the five-stage pipeline that
//! advances it, and the execution units (ALU and cache) the stages use.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (control, stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, cache).
pub mod units;

pub use self::cpu::Cpu;
