//! Sparse System Memory.
//!
//! Memory is split into 4KB pages allocated on first write. Reads of pages
//! that were never written return zero, which the pipeline decodes as `NOP`.
//! An optional limit restricts the mapped range to `[0, limit)`.

use std::collections::HashMap;

use crate::common::MemFault;
use crate::common::constants::{PAGE_SHIFT, PAGE_SIZE, WORD_SIZE};
use crate::soc::traits::BackingStore;

const WORDS_PER_PAGE: usize = (PAGE_SIZE / WORD_SIZE) as usize;

type Page = Box<[u32; WORDS_PER_PAGE]>;

/// Demand-paged word memory.
#[derive(Debug, Default)]
pub struct Memory {
    pages: HashMap<u32, Page>,
    limit: Option<u32>,
}

impl Memory {
    /// Creates an empty memory spanning the whole 32-bit address space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty memory mapped only below `limit`.
    ///
    /// # Arguments
    ///
    /// * `limit` - First unmapped address; accesses at or above it fault.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            pages: HashMap::new(),
            limit: Some(limit),
        }
    }

    /// Number of pages that have been allocated.
    pub fn pages_allocated(&self) -> usize {
        self.pages.len()
    }

    fn check(&self, addr: u32) -> Result<(), MemFault> {
        if addr % WORD_SIZE != 0 {
            return Err(MemFault::Misaligned);
        }
        match self.limit {
            Some(limit) if addr >= limit => Err(MemFault::OutOfRange),
            _ => Ok(()),
        }
    }

    const fn split(addr: u32) -> (u32, usize) {
        let page = addr >> PAGE_SHIFT;
        let word = ((addr & (PAGE_SIZE - 1)) / WORD_SIZE) as usize;
        (page, word)
    }
}

impl BackingStore for Memory {
    fn read_word(&self, addr: u32) -> Result<u32, MemFault> {
        self.check(addr)?;
        let (page, word) = Self::split(addr);
        Ok(self.pages.get(&page).map_or(0, |p| p[word]))
    }

    fn write_word(&mut self, addr: u32, value: u32) -> Result<(), MemFault> {
        self.check(addr)?;
        let (page, word) = Self::split(addr);
        let page = self
            .pages
            .entry(page)
            .or_insert_with(|| Box::new([0; WORDS_PER_PAGE]));
        page[word] = value;
        Ok(())
    }
}
