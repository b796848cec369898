//! A CHIP-8 interpreter core: memory, registers, the instruction set and the frame buffer.
//!
//! Windowing, input polling, audio and timekeeping belong to the caller, which drives
//! [`Chip8`] one cycle at a time.

pub use chip8::{Chip8, Cycle};
pub use error::{Error, Result};
pub use framebuffer::FrameBuffer;
pub use keypad::Keypad;
pub use memory::Memory;
pub use quirks::{Quirks, ShiftSource, SubnFlag};
pub use state::{ExecStatus, State};

mod chip8;
pub mod constants;
mod error;
mod framebuffer;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod quirks;
mod state;
