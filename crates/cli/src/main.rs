//! PISA pipeline simulator CLI.
//!
//! This binary runs a flat PISA program image through the five-stage
//! pipeline model. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON
//!    file and then by command-line flags.
//! 2. **Loading:** Copies the image into a fresh sparse memory at the entry PC.
//! 3. **Execution:** Ticks the pipeline until the program exits or the cycle
//!    bound is reached, then prints statistics.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pisa_pipe_core::common::SimError;
use pisa_pipe_core::config::Config;
use pisa_pipe_core::core::units::cache::Cache;
use pisa_pipe_core::sim::loader;
use pisa_pipe_core::{RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pisa-pipe",
    author,
    version,
    about = "Cycle-level PISA five-stage pipeline simulator",
    long_about = "Run a flat PISA program image through a five-stage pipeline with forwarding, load-use stalls, branch squashing, and a write-back cache.\n\nExamples:\n  pisa-pipe run -f prog.bin\n  pisa-pipe run -f prog.bin --trace --max-cycles 500\n  RUST_LOG=debug pisa-pipe run -f prog.bin --config sim.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a flat program image.
    Run {
        /// Program image (raw little-endian words).
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Load address and entry PC (overrides the configuration).
        #[arg(long, value_parser = parse_addr)]
        base: Option<u32>,

        /// Stop after this many pipeline cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Route every access directly to memory.
        #[arg(long)]
        no_cache: bool,

        /// Log the pipeline contents after every cycle.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            config,
            base,
            max_cycles,
            no_cache,
            trace,
        } => {
            let code = match build_config(config, base, max_cycles, no_cache, trace)
                .and_then(|config| cmd_run(&file, &config))
            {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("\n[!] FATAL: {e}");
                    1
                }
            };
            process::exit(code);
        }
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal addresses.
fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).map_or_else(
        || s.parse::<u32>(),
        |hex| u32::from_str_radix(hex, 16),
    );
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

fn build_config(
    path: Option<PathBuf>,
    base: Option<u32>,
    max_cycles: Option<u64>,
    no_cache: bool,
    trace: bool,
) -> Result<Config, SimError> {
    let mut config = match path {
        Some(p) => Config::from_json(&fs::read_to_string(p)?)?,
        None => Config::default(),
    };
    if let Some(base) = base {
        config.general.start_pc = base;
    }
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    if no_cache {
        config.cache.enabled = false;
    }
    config.general.trace_pipeline |= trace;
    Ok(config)
}

/// Loads and runs the image, returning the process exit code.
fn cmd_run(file: &Path, config: &Config) -> Result<i32, SimError> {
    println!("[*] Direct execution: {}", file.display());
    println!(
        "  Entry: {:#010x}  Cache: {}  Trace: {}",
        config.general.start_pc,
        if config.cache.enabled { "on" } else { "off" },
        config.general.trace_pipeline
    );

    let image = loader::load_file(file)?;
    let mut sim = Simulator::from_image(config, &image)?;

    let result = sim.run();
    let cpu = &sim.cpu;
    let code = match result {
        Ok(RunOutcome::Exited(code)) => {
            println!("\n[*] Exit code {code}");
            code
        }
        Ok(RunOutcome::CycleLimit) => {
            println!("\n[*] Cycle limit reached after {} cycles", cpu.stats.cycles);
            1
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            cpu.dump_state();
            1
        }
    };
    cpu.stats.print(cpu.cache.as_ref().map(Cache::stats));
    Ok(code)
}
