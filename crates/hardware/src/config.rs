//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (entry PC, stack top, memory and cache latencies).
//! 2. **Structures:** Hierarchical config for general, memory, and cache settings.
//! 3. **Loading:** JSON deserialization via `Config::from_json`.
//!
//! Every field is optional in JSON; omitted fields take the defaults below.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Base of the PISA text segment, used as the default entry PC.
    pub const TEXT_BASE: u32 = 0x0040_0000;

    /// Initial stack pointer, just below the PISA stack base.
    pub const STACK_POINTER: u32 = 0x7fff_c000;

    /// Cost in cycles of an uncached memory access.
    ///
    /// Charged once per fetch (both instruction words) and once per load or
    /// store when the cache is disabled.
    pub const DIRECT_LATENCY: u64 = 10;

    /// Cache hit latency in cycles.
    pub const HIT_LATENCY: u64 = 1;

    /// Cache miss latency in cycles, covering the full line fill.
    pub const MISS_LATENCY: u64 = 10;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pisa_pipe_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_pipeline": true, "max_cycles": 5000 },
///     "cache": { "enabled": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_pipeline);
/// assert_eq!(config.general.max_cycles, Some(5000));
/// assert!(!config.cache.enabled);
/// assert_eq!(config.memory.direct_latency, 10);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Backing memory configuration
    pub memory: MemoryConfig,
    /// Cache configuration
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the document is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log every latch's instruction and selected registers each cycle.
    pub trace_pipeline: bool,

    /// Entry program counter.
    pub start_pc: u32,

    /// Initial value of `$sp`.
    pub stack_pointer: u32,

    /// Stop after this many cycles if the program has not exited.
    pub max_cycles: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_pipeline: false,
            start_pc: defaults::TEXT_BASE,
            stack_pointer: defaults::STACK_POINTER,
            max_cycles: None,
        }
    }
}

/// Backing memory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Latency of an uncached access in cycles.
    pub direct_latency: u64,

    /// First unmapped address; `None` maps the full 32-bit space.
    pub limit: Option<u32>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            direct_latency: defaults::DIRECT_LATENCY,
            limit: None,
        }
    }
}

/// Cache configuration.
///
/// Geometry (16 sets, 4 ways, 16-byte lines) is fixed; only enablement and
/// latencies are configurable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Route fetches, loads and stores through the cache.
    pub enabled: bool,

    /// Hit latency in cycles.
    pub hit_latency: u64,

    /// Miss latency in cycles.
    pub miss_latency: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hit_latency: defaults::HIT_LATENCY,
            miss_latency: defaults::MISS_LATENCY,
        }
    }
}
