//! Simulator: drives the CPU until the program exits or a bound is hit.

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::{BackingStore, Memory};

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program exited through a system call.
    Exited(i32),
    /// The configured cycle bound was reached first.
    CycleLimit,
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU and pipeline state.
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator over an already populated backing store.
    pub fn new(config: &Config, mem: Box<dyn BackingStore>) -> Self {
        Self {
            cpu: Cpu::new(config, mem),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Creates a simulator with a fresh [`Memory`] holding `image` at the
    /// configured entry PC.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be placed in memory.
    pub fn from_image(config: &Config, image: &[u8]) -> Result<Self, SimError> {
        let mut mem = config.memory.limit.map_or_else(Memory::new, Memory::with_limit);
        let words = loader::load_image(&mut mem, config.general.start_pc, image)?;
        tracing::debug!(
            words,
            base = format_args!("{:#010x}", config.general.start_pc),
            "image loaded"
        );
        Ok(Self::new(config, Box::new(mem)))
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates a fatal error from the pipeline.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick()
    }

    /// Runs until the program exits or the cycle bound is reached.
    ///
    /// # Errors
    ///
    /// Propagates a fatal error from the pipeline.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        loop {
            if let Some(code) = self.cpu.exit_code {
                return Ok(RunOutcome::Exited(code));
            }
            if self.max_cycles.is_some_and(|max| self.cpu.stats.cycles >= max) {
                tracing::warn!(cycles = self.cpu.stats.cycles, "cycle limit reached");
                return Ok(RunOutcome::CycleLimit);
            }
            self.cpu.tick()?;
        }
    }

    /// Retrieves the exit code if the simulation has finished.
    pub fn take_exit(&mut self) -> Option<i32> {
        self.cpu.take_exit()
    }
}
