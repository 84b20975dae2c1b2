//! Execution units and functional components.
//!
//! This module contains the integer ALU used by the execute stage and the
//! write-back cache used by the fetch and memory stages.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Set-associative write-back cache.
pub mod cache;
