//! Memory Access Definitions.
//!
//! Classifies the memory operations issued by the pipeline and the cache so a
//! fault can be attributed to the access that raised it.

use std::fmt;

/// Kind of memory operation being performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch (both words of a PISA instruction).
    Fetch,
    /// Data load issued by the memory stage.
    Load,
    /// Data store issued by the memory stage.
    Store,
    /// Cache line fill from the backing store.
    Fill,
    /// Dirty line write-back on eviction or flush.
    Writeback,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Load => "load",
            Self::Store => "store",
            Self::Fill => "line fill",
            Self::Writeback => "write-back",
        };
        f.write_str(name)
    }
}
