//! Simulation driver, program loading, and system-call emulation.
//!
//! Provides the utilities that sit around the pipeline core: placing a flat
//! program image in memory, servicing the system calls a program issues,
//! and running the cycle loop until the program exits.

/// Flat image loader.
pub mod loader;

/// Cycle-loop driver.
pub mod simulator;

/// System-call contract and the built-in handler.
pub mod syscall;
