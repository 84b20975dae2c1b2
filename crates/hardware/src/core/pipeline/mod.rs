//! Instruction pipeline implementation.
//!
//! This module contains the five-stage in-order pipeline. It includes:
//! 1. **Control:** The shared control block and the per-cycle squash/stall pre-pass.
//! 2. **Hazards:** In-flight load tracking, stall detection, and operand forwarding.
//! 3. **Latches:** Inter-stage buffers between Fetch, Decode, Execute, Memory, and Writeback.
//! 4. **Signals:** ALU functions, branch sense, and resolution bits produced by decode.
//! 5. **Stages:** Implementation of the five stages.

/// Hazard and branch controller.
pub mod control;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB, post-WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
