//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the PISA pipeline. It provides:
//! 1. **Time:** Pipeline cycles and the latency-weighted clock.
//! 2. **Throughput:** Committed instructions and derived metrics (CPI, IPC).
//! 3. **Hazards:** Data-hazard stalls, squashed instructions, and taken branches.
//! 4. **Cache:** Optional cache counters supplied by the caller.

use std::time::Instant;

use crate::core::units::cache::CacheStats;

/// Simulation statistics structure tracking pipeline performance.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Pipeline cycles elapsed (one per `tick`).
    pub cycles: u64,
    /// Simulated clock: one per cycle plus the latency of every memory access.
    pub clock: u64,
    /// Instructions that reached writeback.
    pub instructions_committed: u64,
    /// Cycles in which decode stalled on a load-use dependency.
    pub stalls_data: u64,
    /// Wrong-path instructions discarded by a taken branch.
    pub squashes: u64,
    /// Conditional branches resolved as taken.
    pub branches_taken: u64,
    /// System calls serviced.
    pub syscalls: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            clock: 0,
            instructions_committed: 0,
            stalls_data: 0,
            squashes: 0,
            branches_taken: 0,
            syscalls: 0,
        }
    }
}

impl SimStats {
    /// Cycles per committed instruction, or 0 before anything commits.
    pub fn cpi(&self) -> f64 {
        if self.instructions_committed == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_committed as f64
        }
    }

    /// Prints the statistics to stdout, followed by the cache counters if given.
    pub fn print(&self, cache: Option<&CacheStats>) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let ipc = self.instructions_committed as f64 / cyc as f64;

        println!("\n==========================================================");
        println!("PISA PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_clock                {}", self.clock);
        println!("sim_insts                {}", self.instructions_committed);
        println!("sim_ipc                  {ipc:.4}");
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        println!("  squashes               {}", self.squashes);
        println!("  branches.taken         {}", self.branches_taken);
        println!("  syscalls               {}", self.syscalls);
        println!("----------------------------------------------------------");
        if let Some(cache) = cache {
            cache.print();
        }
    }
}
