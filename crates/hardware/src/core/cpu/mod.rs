//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single mutable
//! context threaded through every pipeline stage. It holds:
//! 1. **Architected State:** The register file and the backing store.
//! 2. **Pipeline State:** The current latches and the shared control block.
//! 3. **Memory Path:** The optional write-back cache and the direct-access latency.
//! 4. **Collaborators:** The decode table and the system-call handler.
//! 5. **Observability:** Statistics and the pipeline trace switch.

/// Cycle orchestration: the controller pre-pass and the stage pass.
pub mod execution;

/// Memory path used by fetch and the memory stage (cached or direct).
pub mod memory;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::control::ControlState;
use crate::core::pipeline::latches::Latches;
use crate::core::units::cache::Cache;
use crate::isa::abi;
use crate::isa::{DecodeTable, PisaDecodeTable};
use crate::sim::syscall::{BasicSyscalls, SyscallHandler};
use crate::soc::BackingStore;
use crate::stats::SimStats;

/// Main CPU structure containing all processor and pipeline state.
pub struct Cpu {
    /// Architected registers.
    pub regs: RegisterFile,
    /// Pipeline latches as of the end of the last cycle.
    pub latches: Latches,
    /// Shared hazard and branch control block.
    pub control: ControlState,
    /// Backing memory.
    pub mem: Box<dyn BackingStore>,
    /// Write-back cache; `None` routes every access directly to memory.
    pub cache: Option<Cache>,
    /// Opcode decode table.
    pub decoder: Box<dyn DecodeTable + Send>,
    /// System-call emulation.
    pub syscalls: Box<dyn SyscallHandler>,
    /// Performance counters.
    pub stats: SimStats,
    /// Log the pipeline contents after every cycle.
    pub trace: bool,
    /// Exit code once the program has requested termination.
    pub exit_code: Option<i32>,
    /// Cost in cycles of an uncached access.
    pub direct_latency: u64,
}

impl Cpu {
    /// Creates a CPU over `mem` with the built-in PISA decode table and
    /// system-call handler.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (entry PC, stack, cache, latencies).
    /// * `mem` - Backing memory, usually already holding the program image.
    ///
    /// # Returns
    ///
    /// A CPU with empty latches, fetch primed at `config.general.start_pc`,
    /// and `$sp` set to `config.general.stack_pointer`.
    pub fn new(config: &Config, mem: Box<dyn BackingStore>) -> Self {
        let mut regs = RegisterFile::new();
        regs.set_gpr(abi::REG_SP, config.general.stack_pointer);

        Self {
            regs,
            latches: Latches::reset(config.general.start_pc),
            control: ControlState::default(),
            mem,
            cache: config.cache.enabled.then(|| Cache::new(&config.cache)),
            decoder: Box::new(PisaDecodeTable),
            syscalls: Box::new(BasicSyscalls::new()),
            stats: SimStats::default(),
            trace: config.general.trace_pipeline,
            exit_code: None,
            direct_latency: config.memory.direct_latency,
        }
    }

    /// Replaces the decode table.
    #[must_use]
    pub fn with_decoder(mut self, decoder: Box<dyn DecodeTable + Send>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Replaces the system-call handler.
    #[must_use]
    pub fn with_syscalls(mut self, syscalls: Box<dyn SyscallHandler>) -> Self {
        self.syscalls = syscalls;
        self
    }

    /// Restarts fetch at `pc`, discarding everything in flight.
    pub fn set_entry(&mut self, pc: u32) {
        self.latches = Latches::reset(pc);
        self.control = ControlState::default();
    }

    /// Retrieves the exit code if the program has terminated.
    pub fn take_exit(&mut self) -> Option<i32> {
        self.exit_code.take()
    }

    /// Dumps the latches and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!("{:#?}", self.latches);
        eprintln!("{:?}", self.control);
        self.regs.dump();
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("latches", &self.latches)
            .field("control", &self.control)
            .field("cache", &self.cache.as_ref().map(Cache::stats))
            .field("stats", &self.stats)
            .field("exit_code", &self.exit_code)
            .finish_non_exhaustive()
    }
}
