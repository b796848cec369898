/// Total addressable memory; every access is reduced modulo this size
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to an address to keep it inside memory
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// ROMs are loaded, and execution begins, at this address
pub const PROGRAM_START: u16 = 0x200;

/// The font sprite sheet occupies 0x050..0x0A0
pub const FONT_START: u16 = 0x050;

/// Number of bytes per glyph in the sprite sheet
pub const FONT_GLYPH_BYTES: u16 = 5;

/// Maximum depth of nested subroutine calls
pub const STACK_DEPTH: usize = 12;

/// V0..VF
pub const REGISTER_COUNT: usize = 16;

/// VF doubles as the carry, borrow and collision flag
pub const FLAG: usize = 0xF;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Timers count down at 60Hz
pub const TIMER_HZ: u32 = 60;

/// Nanoseconds in a single 60Hz frame
pub const FRAME_NANOS: u64 = 1_000_000_000 / TIMER_HZ as u64;

/// Default number of instructions executed between timer ticks
pub const CYCLES_PER_FRAME: u32 = 10;

/// Number of past states kept around for rewinding
pub const MAX_SAVED_STATES: usize = 600;

/// # Sprite Sheet
/// Sprites for the hexadecimal digits 0..F, 5 bytes per glyph.
///
/// Each byte is one row of a 4x5 sprite; only the high nibble is drawn.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
