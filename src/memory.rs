use crate::constants::{ADDRESS_MASK, FONT_START, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};

/// # Memory
/// 4096 bytes of addressable memory.
///
/// - `0x000..0x200` is reserved for the interpreter; the sprite sheet lives at `0x050..0x0A0`
/// - `0x200..0x1000` holds the loaded program
///
/// Addresses wrap modulo 4096, so no access is ever out of bounds.
#[derive(Copy, Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Read the byte at `addr` (mod 4096)
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDRESS_MASK) as usize]
    }

    /// Write `byte` at `addr` (mod 4096)
    pub fn write(&mut self, addr: u16, byte: u8) {
        self.bytes[(addr & ADDRESS_MASK) as usize] = byte;
    }

    /// Copy the sprite sheet into its reserved region
    pub fn load_font(&mut self) {
        let start = FONT_START as usize;
        self.bytes[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
    }

    /// Write `program` starting at `PROGRAM_START`, wrapping past the end of memory.
    /// Returns the number of bytes written.
    pub fn load_program(&mut self, program: &[u8]) -> usize {
        let capacity = MEMORY_SIZE - PROGRAM_START as usize;
        if program.len() > capacity {
            log::warn!(
                "program is {} bytes but only {} fit after {:#05X}; the rest wraps to 0x000",
                program.len(),
                capacity,
                PROGRAM_START
            );
        }
        for (offset, byte) in program.iter().enumerate() {
            self.write(PROGRAM_START.wrapping_add(offset as u16), *byte);
        }
        program.len()
    }

    /// The raw contents of memory
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_memory {
    use super::*;

    #[test]
    fn test_read_write_wraps() {
        let mut memory = Memory::new();
        memory.write(0x1005, 0xAB);
        assert_eq!(memory.read(0x005), 0xAB);
        assert_eq!(memory.read(0xF005), 0xAB);
    }

    #[test]
    fn test_load_font() {
        let mut memory = Memory::new();
        memory.load_font();
        assert_eq!(memory.as_slice()[0x050..0x055], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(memory.as_slice()[0x09B..0x0A0], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
        assert_eq!(memory.read(0x0A0), 0x0);
    }

    #[test]
    fn test_load_program() {
        let mut memory = Memory::new();
        let written = memory.load_program(&[0x00, 0xE0, 0x12, 0x00]);
        assert_eq!(written, 4);
        assert_eq!(memory.as_slice()[0x200..0x204], [0x00, 0xE0, 0x12, 0x00]);
    }

    #[test]
    fn test_load_oversized_program_wraps() {
        let mut memory = Memory::new();
        let mut program = vec![0x11; MEMORY_SIZE - PROGRAM_START as usize];
        program.extend_from_slice(&[0x22, 0x33]);
        memory.load_program(&program);
        assert_eq!(memory.read(0xFFF), 0x11);
        assert_eq!(memory.read(0x000), 0x22);
        assert_eq!(memory.read(0x001), 0x33);
    }
}
