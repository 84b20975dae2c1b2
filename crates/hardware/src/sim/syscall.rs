//! System-call emulation.
//!
//! The writeback stage invokes a [`SyscallHandler`] exactly once for every
//! committed `syscall` instruction, after the cache has been flushed. The
//! call number is taken from `$v0` and arguments from `$a0`..`$a2`, following
//! the SimpleScalar convention; `$a3` reports an error flag on return.

use std::io::{self, Write};

use crate::common::{AccessType, RegisterFile, SimError};
use crate::isa::Instruction;
use crate::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A3, REG_V0};
use crate::soc::BackingStore;

/// `exit(code)`.
pub const SYS_EXIT: u32 = 1;
/// `write(fd, buf, len)`.
pub const SYS_WRITE: u32 = 4;

/// Bytes copied from guest memory per host write.
const WRITE_CHUNK: usize = 4096;

/// Result of servicing one system call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyscallOutcome {
    /// Keep simulating.
    Continue,
    /// The program requested termination with this exit code.
    Exit(i32),
}

/// System-call contract.
pub trait SyscallHandler: Send {
    /// Services the system call issued by `inst` at `pc`.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported calls or failing I/O.
    fn handle(
        &mut self,
        inst: Instruction,
        pc: u32,
        regs: &mut RegisterFile,
        mem: &mut dyn BackingStore,
    ) -> Result<SyscallOutcome, SimError>;
}

/// Minimal handler supporting `exit` and `write` to stdout/stderr.
///
/// Output for both descriptors goes to a single writer, stdout by default.
pub struct BasicSyscalls {
    out: Box<dyn Write + Send>,
}

impl std::fmt::Debug for BasicSyscalls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicSyscalls").finish_non_exhaustive()
    }
}

impl Default for BasicSyscalls {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicSyscalls {
    /// Creates a handler writing program output to stdout.
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Creates a handler writing program output to `out`.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    fn write(
        &mut self,
        regs: &mut RegisterFile,
        mem: &dyn BackingStore,
        pc: u32,
    ) -> Result<(), SimError> {
        let fd = regs.gpr(REG_A0);
        let buf = regs.gpr(REG_A1);
        let len = regs.gpr(REG_A2);

        if fd != 1 && fd != 2 {
            regs.set_gpr(REG_V0, u32::MAX);
            regs.set_gpr(REG_A3, 1);
            return Ok(());
        }

        let mut chunk = [0u8; WRITE_CHUNK];
        let mut done = 0u32;
        while done < len {
            let n = (len - done).min(WRITE_CHUNK as u32) as usize;
            for (i, byte) in chunk[..n].iter_mut().enumerate() {
                let addr = buf.wrapping_add(done + i as u32);
                *byte = mem
                    .read_byte(addr)
                    .map_err(|fault| fault.at(AccessType::Load, addr))?;
            }
            self.out.write_all(&chunk[..n])?;
            done += n as u32;
        }
        self.out.flush()?;

        tracing::debug!(fd, len, pc = format_args!("{pc:#010x}"), "write");
        regs.set_gpr(REG_V0, len);
        regs.set_gpr(REG_A3, 0);
        Ok(())
    }
}

impl SyscallHandler for BasicSyscalls {
    fn handle(
        &mut self,
        _inst: Instruction,
        pc: u32,
        regs: &mut RegisterFile,
        mem: &mut dyn BackingStore,
    ) -> Result<SyscallOutcome, SimError> {
        match regs.gpr(REG_V0) {
            SYS_EXIT => Ok(SyscallOutcome::Exit(regs.gpr(REG_A0) as i32)),
            SYS_WRITE => {
                self.write(regs, mem, pc)?;
                Ok(SyscallOutcome::Continue)
            }
            code => Err(SimError::UnsupportedSyscall { code, pc }),
        }
    }
}
