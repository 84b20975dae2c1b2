//! Register Identifiers and Register File.
//!
//! This module provides:
//! 1. **`RegId`:** A typed architectural register identifier as decoded from an
//!    instruction field (GPRs `0..=31`, plus the `HI`/`LO` accumulators).
//! 2. **`RegisterFile`:** The architected storage, with `r0` hardwired to zero.
//!
//! "No register" is expressed as `Option::<RegId>::None` everywhere in the
//! pipeline.

use std::fmt;

use super::constants::{NUM_GPRS, REG_HI, REG_LO};
use crate::isa::abi;

/// Architectural register identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegId(u8);

impl RegId {
    /// Hardwired zero register.
    pub const ZERO: Self = Self(0);
    /// HI multiply accumulator.
    pub const HI: Self = Self(REG_HI);
    /// LO multiply accumulator.
    pub const LO: Self = Self(REG_LO);

    /// Creates an identifier from a raw register number.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw register number.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` for a general-purpose register (`r0`..`r31`).
    pub const fn is_gpr(self) -> bool {
        (self.0 as usize) < NUM_GPRS
    }

    /// Returns `true` for the `HI` or `LO` accumulator.
    pub const fn is_accumulator(self) -> bool {
        self.0 == REG_HI || self.0 == REG_LO
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HI => f.write_str("hi"),
            Self::LO => f.write_str("lo"),
            r if r.is_gpr() => write!(f, "${}", r.0),
            r => write!(f, "$?{}", r.0),
        }
    }
}

/// Architected register state: 32 GPRs plus the multiply accumulators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: [u32; NUM_GPRS],
    hi: u32,
    lo: u32,
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register identifier. `r0` and unknown identifiers read as 0.
    ///
    /// # Returns
    ///
    /// The 32-bit register value.
    pub fn read(&self, reg: RegId) -> u32 {
        match reg {
            RegId::ZERO => 0,
            RegId::HI => self.hi,
            RegId::LO => self.lo,
            r if r.is_gpr() => self.gpr[r.raw() as usize],
            _ => 0,
        }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register identifier. Writes to `r0` and unknown identifiers are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, reg: RegId, val: u32) {
        match reg {
            RegId::ZERO => {}
            RegId::HI => self.hi = val,
            RegId::LO => self.lo = val,
            r if r.is_gpr() => self.gpr[r.raw() as usize] = val,
            _ => {}
        }
    }

    /// Reads a general-purpose register by index.
    pub fn gpr(&self, idx: usize) -> u32 {
        self.gpr.get(idx).copied().unwrap_or(0)
    }

    /// Writes a general-purpose register by index; `r0` stays zero.
    pub fn set_gpr(&mut self, idx: usize, val: u32) {
        if idx == abi::REG_ZERO {
            return;
        }
        if let Some(slot) = self.gpr.get_mut(idx) {
            *slot = val;
        }
    }

    /// Returns the `HI` and `LO` accumulators as a pair.
    pub const fn accumulators(&self) -> (u32, u32) {
        (self.hi, self.lo)
    }

    /// Overwrites both accumulators.
    pub const fn set_accumulators(&mut self, hi: u32, lo: u32) {
        self.hi = hi;
        self.lo = lo;
    }

    /// Dumps every GPR and the accumulators to stderr, four per line.
    pub fn dump(&self) {
        for (i, chunk) in self.gpr.chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(j, v)| format!("{:>4}={v:#010x}", abi::NAMES[i * 4 + j]))
                .collect();
            eprintln!("{}", line.join(" "));
        }
        eprintln!("  hi={:#010x}   lo={:#010x}", self.hi, self.lo);
    }
}
