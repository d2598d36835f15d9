use log::debug;

use crate::constants::{GLYPHS, GLYPH_BASE, MEMORY_SIZE};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes addressed by a 12-bit address.
///
/// - `0x000..0x200` is reserved for the interpreter; the glyph table lives here
/// - `0x200..` is where programs are conventionally loaded
///
/// Nothing outside `0..MEMORY_SIZE` can be read or written.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: Box::new([0; MEMORY_SIZE]),
        };
        memory.reset();
        memory
    }

    /// Zeroes every byte and reinstalls the glyph table.
    pub fn reset(&mut self) {
        self.bytes.iter_mut().for_each(|b| *b = 0);
        let base = GLYPH_BASE as usize;
        self.bytes[base..base + GLYPHS.len()].copy_from_slice(&GLYPHS);
    }

    /// Copies `bytes` into memory starting at `offset`.
    /// Nothing is written unless the whole image fits.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<()> {
        self.slice_mut(offset as usize, bytes.len())?
            .copy_from_slice(bytes);
        debug!("loaded {} bytes at {:#05X}", bytes.len(), offset);
        Ok(())
    }

    pub fn read_byte(&self, addr: u16) -> Result<u8> {
        Ok(self.slice(addr as usize, 1)?[0])
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<()> {
        self.slice_mut(addr as usize, 1)?[0] = value;
        Ok(())
    }

    /// Reads the big-endian word at `addr`.
    pub fn read_word(&self, addr: u16) -> Result<u16> {
        let word = self.slice(addr as usize, 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    /// Borrows `len` bytes starting at `addr`.
    pub fn slice(&self, addr: usize, len: usize) -> Result<&[u8]> {
        let end = Self::end(addr, len)?;
        Ok(&self.bytes[addr..end])
    }

    /// Mutably borrows `len` bytes starting at `addr`.
    pub fn slice_mut(&mut self, addr: usize, len: usize) -> Result<&mut [u8]> {
        let end = Self::end(addr, len)?;
        Ok(&mut self.bytes[addr..end])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    fn end(addr: usize, len: usize) -> Result<usize> {
        match addr.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(end),
            _ => Err(Error::OutOfRange { address: addr, len }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROGRAM_START;

    #[test]
    fn test_memory_zeroed_past_glyphs() {
        let memory = Memory::new();
        assert!(memory.as_bytes()[0x200..].iter().all(|&b| b == 0));
        assert!(memory.as_bytes()[..GLYPH_BASE as usize].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_glyphs_installed() {
        let memory = Memory::new();
        // the glyph for 0xA starts 10 glyphs in
        assert_eq!(
            memory.slice(GLYPH_BASE as usize + 50, 5).unwrap(),
            &[0xF0, 0x90, 0xF0, 0x90, 0x90]
        );
    }

    #[test]
    fn test_load_ok() {
        let mut memory = Memory::new();
        memory.load(PROGRAM_START, &[0x00, 0xE0]).unwrap();
        assert_eq!(memory.slice(0x200, 2).unwrap(), &[0x00, 0xE0]);
    }

    #[test]
    fn test_load_fills_to_the_last_byte() {
        let mut memory = Memory::new();
        memory.load(0xFFC, &[1, 2, 3, 4]).unwrap();
        assert_eq!(memory.read_byte(0xFFF), Ok(4));
    }

    #[test]
    fn test_load_too_large_leaves_memory_untouched() {
        let mut memory = Memory::new();
        let before = memory.as_bytes().to_vec();
        assert_eq!(
            memory.load(0xFFC, &[1, 2, 3, 4, 5]),
            Err(Error::OutOfRange {
                address: 0xFFC,
                len: 5
            })
        );
        assert_eq!(memory.as_bytes(), &before[..]);
    }

    #[test]
    fn test_load_may_overwrite_glyphs() {
        let mut memory = Memory::new();
        memory.load(GLYPH_BASE, &[0xAA]).unwrap();
        assert_eq!(memory.read_byte(GLYPH_BASE), Ok(0xAA));
    }

    #[test]
    fn test_read_word() {
        let mut memory = Memory::new();
        memory.load(0x300, &[0x12, 0x34]).unwrap();
        assert_eq!(memory.read_word(0x300), Ok(0x1234));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut memory = Memory::new();
        assert!(memory.read_byte(0x1000).is_err());
        assert!(memory.write_byte(0x1000, 1).is_err());
        assert!(memory.read_word(0xFFF).is_err());
    }

    #[test]
    fn test_reset_restores_glyphs() {
        let mut memory = Memory::new();
        memory.load(0, &[0xFF; 0x300]).unwrap();
        memory.reset();
        assert_eq!(memory.read_byte(0x250), Ok(0));
        assert_eq!(memory.read_byte(GLYPH_BASE), Ok(GLYPHS[0]));
    }
}
