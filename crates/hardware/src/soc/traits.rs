//! Backing-store trait.
//!
//! All memory accesses leaving the core (instruction fetch, loads, stores,
//! cache fills and write-backs) go through `BackingStore`. Word accesses are
//! the only required operations; byte reads are derived from them.

use crate::common::MemFault;
use crate::common::constants::WORD_SIZE;

/// Word-addressable backing memory.
///
/// Words are little-endian. Implementations must be `Send` so a `Cpu` can be
/// moved to another thread.
pub trait BackingStore: Send {
    /// Reads the 32-bit word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemFault`] if the address is misaligned or unmapped.
    fn read_word(&self, addr: u32) -> Result<u32, MemFault>;

    /// Writes the 32-bit word `value` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemFault`] if the address is misaligned or unmapped.
    fn write_word(&mut self, addr: u32, value: u32) -> Result<(), MemFault>;

    /// Reads a single byte by extracting it from its containing word.
    ///
    /// # Errors
    ///
    /// Propagates any fault from the containing word read.
    fn read_byte(&self, addr: u32) -> Result<u8, MemFault> {
        let word = self.read_word(addr & !(WORD_SIZE - 1))?;
        Ok(word.to_le_bytes()[(addr & (WORD_SIZE - 1)) as usize])
    }
}
