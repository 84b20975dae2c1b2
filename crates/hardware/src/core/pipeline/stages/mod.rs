//! Pipeline stage implementations.
//!
//! This module contains the five stages of the instruction pipeline. Each
//! stage reads its incoming latch from the current cycle's snapshot and
//! returns the entry for the next latch. Stages are invoked in reverse order
//! (WB, MEM, EX, ID, then IF) so the shared control block is updated in the
//! same order as the hardware it models.
//! 1. **Fetch:** Selects the next PC and reads both instruction words.
//! 2. **Decode:** Looks up operands and flags, checks hazards, selects the ALU function.
//! 3. **Execute:** Runs the ALU or multiplier and resolves conditional branches.
//! 4. **Memory:** Performs loads and stores through the memory path.
//! 5. **Writeback:** Commits results and dispatches system calls.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
