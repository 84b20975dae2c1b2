//! Backing memory.
//!
//! This module provides the storage side of the memory system:
//! 1. **Traits:** `BackingStore`, the word read/write contract used by the
//!    pipeline and the cache.
//! 2. **Memory:** A sparse, demand-allocated implementation covering the
//!    32-bit PISA address space.

/// Sparse paged memory implementation.
pub mod memory;

/// Backing-store contract.
pub mod traits;

pub use memory::Memory;
pub use traits::BackingStore;
