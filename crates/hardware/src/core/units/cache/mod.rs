//! Set-Associative Write-Back Cache.
//!
//! This module implements the cache interposed between the pipeline and the
//! backing store. Geometry is fixed:
//! 1. **Sets:** 16, selected by address bits `[7:4]`.
//! 2. **Ways:** 4 per set, replaced in FIFO (insertion) order.
//! 3. **Lines:** 16 bytes (4 words); the tag is address bits `[31:8]`.
//!
//! Lines hold real data. Stores mark a line dirty and are only written to the
//! backing store when the line is evicted or the cache is flushed. A fault on
//! a line fill or write-back is fatal.

use std::collections::VecDeque;

use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, SimError};
use crate::config::CacheConfig;
use crate::soc::BackingStore;

/// Number of sets.
pub const NUM_SETS: usize = 16;
/// Lines per set.
pub const WAYS: usize = 4;
/// Line size in bytes.
pub const LINE_BYTES: u32 = 16;
/// Line size in words.
pub const LINE_WORDS: usize = (LINE_BYTES / WORD_SIZE) as usize;

const TAG_SHIFT: u32 = 8;
const INDEX_MASK: u32 = 0xF0;
const INDEX_SHIFT: u32 = 4;
const OFFSET_MASK: u32 = 0xF;

/// One cached 16-byte block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Line contents, one entry per word.
    pub data: [u32; LINE_WORDS],
    /// Upper address bits identifying the block.
    pub tag: u32,
    /// Line holds valid data.
    pub valid: bool,
    /// Line was written since it was filled or last flushed.
    pub dirty: bool,
    /// Number of hits served by this line.
    pub ref_count: u32,
}

/// A FIFO ring of at most [`WAYS`] lines; the front is the oldest.
#[derive(Clone, Debug, Default)]
pub struct CacheSet {
    lines: VecDeque<CacheLine>,
}

impl CacheSet {
    /// Resident lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &CacheLine> {
        self.lines.iter()
    }

    /// Tags of the resident lines, oldest first.
    pub fn tags(&self) -> Vec<u32> {
        self.lines().map(|l| l.tag).collect()
    }

    fn position(&self, tag: u32) -> Option<usize> {
        self.lines.iter().position(|l| l.valid && l.tag == tag)
    }
}

/// Monotonic cache event counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Word accesses (reads and writes).
    pub accesses: u64,
    /// Accesses that found their line resident.
    pub hits: u64,
    /// Accesses that required a line fill.
    pub misses: u64,
    /// Lines evicted to make room for a fill.
    pub replacements: u64,
    /// Dirty lines written back on eviction.
    pub writebacks: u64,
}

impl CacheStats {
    /// Fraction of accesses that hit, or 0 with no accesses.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Prints the counters to stdout.
    pub fn print(&self) {
        println!("CACHE");
        println!("  cache.accesses         {}", self.accesses);
        println!(
            "  cache.hits             {} ({:.2}%)",
            self.hits,
            self.hit_rate() * 100.0
        );
        println!("  cache.misses           {}", self.misses);
        println!("  cache.replacements     {}", self.replacements);
        println!("  cache.writebacks       {}", self.writebacks);
        println!("----------------------------------------------------------");
    }
}

/// Requested word operation.
#[derive(Clone, Copy, Debug)]
enum Op {
    Read,
    Write(u32),
}

/// Write-back cache with real line storage.
#[derive(Clone, Debug)]
pub struct Cache {
    sets: Vec<CacheSet>,
    hit_latency: u64,
    miss_latency: u64,
    stats: CacheStats,
}

/// Splits an address into `(tag, set index, byte offset)`.
#[inline]
pub const fn decompose(addr: u32) -> (u32, usize, u32) {
    let tag = addr >> TAG_SHIFT;
    let index = ((addr & INDEX_MASK) >> INDEX_SHIFT) as usize;
    (tag, index, addr & OFFSET_MASK)
}

/// Rebuilds the line-aligned address of a resident line.
#[inline]
const fn line_addr(tag: u32, index: usize) -> u32 {
    (tag << TAG_SHIFT) | ((index as u32) << INDEX_SHIFT)
}

impl Cache {
    /// Creates an empty cache with the latencies from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache configuration (hit and miss latencies).
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            sets: vec![CacheSet::default(); NUM_SETS],
            hit_latency: config.hit_latency,
            miss_latency: config.miss_latency,
            stats: CacheStats::default(),
        }
    }

    /// Reads the word at `addr` through the cache.
    ///
    /// `addr` is expected to be word aligned; the low two bits are ignored.
    ///
    /// # Returns
    ///
    /// `(value, latency)`, where latency is the hit or miss cost in cycles.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] if a line fill or the write-back of
    /// an evicted dirty line faults.
    pub fn read(&mut self, mem: &mut dyn BackingStore, addr: u32) -> Result<(u32, u64), SimError> {
        self.access(mem, addr, Op::Read)
    }

    /// Writes `value` to the word at `addr` through the cache, marking the line dirty.
    ///
    /// # Returns
    ///
    /// The hit or miss cost in cycles.
    ///
    /// # Errors
    ///
    /// Same as [`Cache::read`].
    pub fn write(
        &mut self,
        mem: &mut dyn BackingStore,
        addr: u32,
        value: u32,
    ) -> Result<u64, SimError> {
        self.access(mem, addr, Op::Write(value)).map(|(_, lat)| lat)
    }

    fn access(
        &mut self,
        mem: &mut dyn BackingStore,
        addr: u32,
        op: Op,
    ) -> Result<(u32, u64), SimError> {
        let (tag, index, offset) = decompose(addr);
        let word = (offset / WORD_SIZE) as usize;
        self.stats.accesses += 1;

        let (pos, latency) = if let Some(pos) = self.sets[index].position(tag) {
            self.stats.hits += 1;
            self.sets[index].lines[pos].ref_count += 1;
            (pos, self.hit_latency)
        } else {
            self.stats.misses += 1;
            (self.fill(mem, addr, tag, index)?, self.miss_latency)
        };

        let line = &mut self.sets[index].lines[pos];
        let value = match op {
            Op::Read => line.data[word],
            Op::Write(value) => {
                line.data[word] = value;
                line.dirty = true;
                value
            }
        };
        Ok((value, latency))
    }

    /// Fetches the line holding `addr` and appends it to its set, evicting
    /// the oldest line if the set is full. Returns the new line's position.
    fn fill(
        &mut self,
        mem: &mut dyn BackingStore,
        addr: u32,
        tag: u32,
        index: usize,
    ) -> Result<usize, SimError> {
        let base = addr & !OFFSET_MASK;
        let mut data = [0; LINE_WORDS];
        for (i, slot) in data.iter_mut().enumerate() {
            let a = base + (i as u32) * WORD_SIZE;
            *slot = mem
                .read_word(a)
                .map_err(|fault| fault.at(AccessType::Fill, a))?;
        }

        if self.sets[index].lines.len() >= WAYS {
            if let Some(victim) = self.sets[index].lines.front() {
                if victim.dirty {
                    Self::write_back(mem, victim, index)?;
                    self.stats.writebacks += 1;
                }
            }
            let _ = self.sets[index].lines.pop_front();
            self.stats.replacements += 1;
        }

        let set = &mut self.sets[index].lines;
        set.push_back(CacheLine {
            data,
            tag,
            valid: true,
            dirty: false,
            ref_count: 0,
        });
        Ok(set.len() - 1)
    }

    fn write_back(
        mem: &mut dyn BackingStore,
        line: &CacheLine,
        index: usize,
    ) -> Result<(), SimError> {
        let base = line_addr(line.tag, index);
        for (i, &word) in line.data.iter().enumerate() {
            let a = base + (i as u32) * WORD_SIZE;
            mem.write_word(a, word)
                .map_err(|fault| fault.at(AccessType::Writeback, a))?;
        }
        Ok(())
    }

    /// Writes every dirty line back to `mem` and marks it clean.
    ///
    /// Lines stay resident and the write-back counter is not advanced.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] on the first faulting write-back.
    pub fn flush(&mut self, mem: &mut dyn BackingStore) -> Result<(), SimError> {
        for (index, set) in self.sets.iter_mut().enumerate() {
            for line in set.lines.iter_mut().filter(|l| l.valid && l.dirty) {
                Self::write_back(mem, line, index)?;
                line.dirty = false;
            }
        }
        Ok(())
    }

    /// Returns `true` if the line holding `addr` is resident.
    pub fn contains(&self, addr: u32) -> bool {
        let (tag, index, _) = decompose(addr);
        self.sets[index].position(tag).is_some()
    }

    /// Returns the resident line holding `addr`, if any.
    pub fn line(&self, addr: u32) -> Option<&CacheLine> {
        let (tag, index, _) = decompose(addr);
        self.sets[index]
            .position(tag)
            .map(|pos| &self.sets[index].lines[pos])
    }

    /// Returns the set at `index` (`0..NUM_SETS`).
    pub fn set(&self, index: usize) -> Option<&CacheSet> {
        self.sets.get(index)
    }

    /// Event counters accumulated since construction.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
