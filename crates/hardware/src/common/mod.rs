//! Common types and constants shared across the simulator.
//!
//! This module provides the building blocks used by every pipeline component:
//! 1. **Constants:** Instruction width, register counts, and memory geometry.
//! 2. **Access Types:** Classification of memory operations for fault reporting.
//! 3. **Error Handling:** Backing-store faults and fatal simulation errors.
//! 4. **Registers:** Register identifiers and the architected register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for memory faults and fatal simulation conditions.
pub mod error;

/// Register identifiers and register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::{MemFault, SimError};
pub use reg::{RegId, RegisterFile};
