//! Memory path shared by instruction fetch and the memory stage.
//!
//! Every access is either served by the write-back cache, which reports its
//! own hit or miss latency, or sent straight to the backing store at the
//! fixed direct latency. Word alignment is checked here, before either path.

use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, MemFault, SimError};
use crate::core::Cpu;
use crate::isa::Instruction;

impl Cpu {
    /// Reads one word for a load.
    ///
    /// # Returns
    ///
    /// `(value, latency)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] on a misaligned address, a faulting
    /// backing-store read, or a faulting cache fill or write-back.
    pub fn load_word(&mut self, addr: u32) -> Result<(u32, u64), SimError> {
        self.read_word(addr, AccessType::Load)
    }

    /// Writes one word for a store.
    ///
    /// # Returns
    ///
    /// The access latency.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Cpu::load_word`].
    pub fn store_word(&mut self, addr: u32, value: u32) -> Result<u64, SimError> {
        check_aligned(addr, AccessType::Store)?;
        match &mut self.cache {
            Some(cache) => cache.write(self.mem.as_mut(), addr, value),
            None => self
                .mem
                .write_word(addr, value)
                .map(|()| self.direct_latency)
                .map_err(|fault| fault.at(AccessType::Store, addr)),
        }
    }

    /// Fetches the two words of the instruction at `pc`.
    ///
    /// Through the cache the two word latencies are summed; directly, the
    /// direct latency is charged once for the pair.
    ///
    /// # Returns
    ///
    /// `(instruction, latency)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] if either word cannot be read.
    pub fn fetch_instruction(&mut self, pc: u32) -> Result<(Instruction, u64), SimError> {
        let second = pc.wrapping_add(WORD_SIZE);
        if self.cache.is_some() {
            let (a, lat_a) = self.read_word(pc, AccessType::Fetch)?;
            let (b, lat_b) = self.read_word(second, AccessType::Fetch)?;
            return Ok((Instruction::new(a, b), lat_a + lat_b));
        }

        check_aligned(pc, AccessType::Fetch)?;
        let read = |addr: u32| {
            self.mem
                .read_word(addr)
                .map_err(|fault| fault.at(AccessType::Fetch, addr))
        };
        let a = read(pc)?;
        let b = read(second)?;
        Ok((Instruction::new(a, b), self.direct_latency))
    }

    fn read_word(&mut self, addr: u32, access: AccessType) -> Result<(u32, u64), SimError> {
        check_aligned(addr, access)?;
        match &mut self.cache {
            Some(cache) => cache.read(self.mem.as_mut(), addr),
            None => self
                .mem
                .read_word(addr)
                .map(|v| (v, self.direct_latency))
                .map_err(|fault| fault.at(access, addr)),
        }
    }
}

fn check_aligned(addr: u32, access: AccessType) -> Result<(), SimError> {
    if addr % WORD_SIZE == 0 {
        Ok(())
    } else {
        Err(MemFault::Misaligned.at(access, addr))
    }
}
