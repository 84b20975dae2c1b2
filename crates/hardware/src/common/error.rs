//! Fault and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Memory Faults:** The outcome of a failed backing-store word access.
//! 2. **Simulation Errors:** Fatal conditions surfaced to the embedding driver.
//!
//! A memory fault on any committing access (fetch, load, store, cache fill or
//! write-back) is unrecoverable. Hazards are not errors; they are handled by
//! the pipeline controller.

use thiserror::Error;

use super::data::AccessType;

/// Fault reported by a backing-store word access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemFault {
    /// The address is not aligned to a 4-byte word boundary.
    #[error("misaligned word address")]
    Misaligned,

    /// The address lies outside the mapped range of the store.
    #[error("address out of range")]
    OutOfRange,
}

impl MemFault {
    /// Attaches the faulting access and address, producing a fatal error.
    ///
    /// # Arguments
    ///
    /// * `access` - The operation that raised the fault.
    /// * `addr` - The faulting address.
    pub const fn at(self, access: AccessType, addr: u32) -> SimError {
        SimError::MemoryFault {
            access,
            addr,
            fault: self,
        }
    }
}

/// Fatal simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A memory access faulted; the accessed state is no longer reliable.
    #[error("memory fault during {access} at {addr:#010x}: {fault}")]
    MemoryFault {
        /// Operation that raised the fault.
        access: AccessType,
        /// Faulting address.
        addr: u32,
        /// Fault reported by the backing store.
        fault: MemFault,
    },

    /// The program issued a system call the handler does not implement.
    #[error("unsupported system call {code} at pc {pc:#010x}")]
    UnsupportedSyscall {
        /// System call number taken from `v0`.
        code: u32,
        /// Address of the `syscall` instruction.
        pc: u32,
    },

    /// The program image does not fit in the 32-bit address space.
    #[error("image of {len} bytes does not fit at base {base:#010x}")]
    ImageTooLarge {
        /// Requested load address.
        base: u32,
        /// Image length in bytes.
        len: usize,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a program image or configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
