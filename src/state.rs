use crate::constants::{PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};
use crate::framebuffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::quirks::Quirks;

/// Whether the interpreter is free to execute the next instruction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecStatus {
    Running,
    /// Fx0A is waiting for a key press to be written into register Vx
    AwaitingKey(u8),
}

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag; only operations that define a flag
///       output may write it
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=12
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented externally at 60Hz
///
/// ## Memory
/// - a 12 entry stack of return addresses
/// - 4096 bytes of addressable memory
/// - a 64x32 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F
/// - emulation halts while a key's value is owed to some register
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keypad: Keypad,
    pub status: ExecStatus,
    pub quirks: Quirks,
}

impl State {
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        let mut memory = Memory::new();
        memory.load_font();

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            keypad: Keypad::new(),
            status: ExecStatus::Running,
            quirks,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
