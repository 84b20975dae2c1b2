//! Flat Image Loader.
//!
//! A program image is a raw little-endian dump of memory: consecutive PISA
//! instructions (two words each) followed by any initialised data. It is
//! copied word by word into the backing store starting at a base address.

use std::fs;
use std::path::Path;

use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, SimError};
use crate::soc::BackingStore;

/// Reads an image from disk.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    Ok(fs::read(path)?)
}

/// Copies `image` into `mem` starting at `base`.
///
/// A trailing partial word is zero-padded.
///
/// # Arguments
///
/// * `mem` - Destination store.
/// * `base` - Word-aligned load address.
/// * `image` - Raw image bytes.
///
/// # Returns
///
/// The number of words written.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image would run past the end
/// of the address space, or [`SimError::MemoryFault`] if the store rejects
/// a word.
pub fn load_image(
    mem: &mut dyn BackingStore,
    base: u32,
    image: &[u8],
) -> Result<usize, SimError> {
    let too_large = || SimError::ImageTooLarge {
        base,
        len: image.len(),
    };
    let len = u32::try_from(image.len()).map_err(|_| too_large())?;
    if len > 0 && base.checked_add(len - 1).is_none() {
        return Err(too_large());
    }

    let mut words = 0;
    for (i, chunk) in image.chunks(WORD_SIZE as usize).enumerate() {
        let mut bytes = [0u8; WORD_SIZE as usize];
        bytes[..chunk.len()].copy_from_slice(chunk);
        let addr = base + (i as u32) * WORD_SIZE;
        mem.write_word(addr, u32::from_le_bytes(bytes))
            .map_err(|fault| fault.at(AccessType::Store, addr))?;
        words += 1;
    }
    Ok(words)
}

/// Serialises instructions into a flat image, `a` word first.
///
/// Useful for building test programs and for tools that emit PISA code.
pub fn encode_program(program: &[crate::isa::Instruction]) -> Vec<u8> {
    program
        .iter()
        .flat_map(|inst| {
            let mut bytes = [0u8; 8];
            bytes[..4].copy_from_slice(&inst.a.to_le_bytes());
            bytes[4..].copy_from_slice(&inst.b.to_le_bytes());
            bytes
        })
        .collect()
}
