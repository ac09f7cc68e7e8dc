use crate::constants::{FONT_GLYPH_SIZE, FONT_START, MEMORY_SIZE, SPRITE_SHEET};
use crate::error::Fault;

/// # Memory
/// The Chip-8's flat 4096 byte address space.
///
/// Every access goes through `read`/`write` so that an address computed
/// from register contents faults uniformly instead of panicking or
/// silently wrapping. The font sprite sheet is copied into the reserved
/// low region on construction, before any program bytes are loaded.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Read the byte at `addr`.
    pub fn read(&self, addr: u16) -> Result<u8, Fault> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(Fault::OutOfBoundsMemory(addr))
    }

    /// Write `value` at `addr`.
    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), Fault> {
        *self
            .bytes
            .get_mut(addr as usize)
            .ok_or(Fault::OutOfBoundsMemory(addr))? = value;
        Ok(())
    }

    /// Copy `data` verbatim into memory starting at `addr`.
    ///
    /// Fails without writing anything if the block would run past the
    /// end of memory.
    pub fn load(&mut self, addr: u16, data: &[u8]) -> Result<(), Fault> {
        let start = addr as usize;
        let end = start + data.len();
        if end > MEMORY_SIZE {
            return Err(Fault::OutOfBoundsMemory((end - 1).min(0xFFFF) as u16));
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// The address of the builtin glyph for hex digit `digit`.
    ///
    /// Values above 0xF address past the sprite sheet; the resulting
    /// address still lands in reserved memory, matching what the
    /// original interpreters did.
    pub fn glyph_addr(digit: u8) -> u16 {
        FONT_START + u16::from(digit) * FONT_GLYPH_SIZE
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

    #[test]
    fn test_write_then_read_roundtrips() {
        let mut memory = Memory::new();
        for addr in [0x000u16, 0x200, 0xFFF] {
            memory.write(addr, 0xAB).unwrap();
            assert_eq!(memory.read(addr), Ok(0xAB));
        }
    }

    #[test]
    fn test_out_of_bounds_read_faults() {
        let memory = Memory::new();
        assert_eq!(memory.read(0x1000), Err(Fault::OutOfBoundsMemory(0x1000)));
        assert_eq!(memory.read(0xFFFF), Err(Fault::OutOfBoundsMemory(0xFFFF)));
    }

    #[test]
    fn test_out_of_bounds_write_faults() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.write(0x1000, 0x1),
            Err(Fault::OutOfBoundsMemory(0x1000))
        );
    }

    #[test]
    fn test_font_is_seeded_on_construction() {
        let memory = Memory::new();
        // First row of the 0 glyph
        assert_eq!(memory.read(FONT_START), Ok(0xF0));
        // Last row of the F glyph
        assert_eq!(memory.read(FONT_START + 79), Ok(0x80));
    }

    #[test]
    fn test_glyph_addr() {
        assert_eq!(Memory::glyph_addr(0x0), FONT_START);
        assert_eq!(Memory::glyph_addr(0x2), FONT_START + 0xA);
        assert_eq!(Memory::glyph_addr(0xF), FONT_START + 75);
    }

    #[test]
    fn test_load_copies_bytes() {
        let mut memory = Memory::new();
        memory.load(0x200, &[0x1, 0x2, 0x3]).unwrap();
        assert_eq!(memory.read(0x200), Ok(0x1));
        assert_eq!(memory.read(0x202), Ok(0x3));
    }

    #[test]
    fn test_load_past_end_faults() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.load(0xFFF, &[0x1, 0x2]),
            Err(Fault::OutOfBoundsMemory(0x1000))
        );
        // and nothing was written
        assert_eq!(memory.read(0xFFF), Ok(0x0));
    }
}
