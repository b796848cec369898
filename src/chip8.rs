use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::MAX_SAVED_STATES;
use crate::error::{Error, Result};
use crate::framebuffer::FrameBuffer;
use crate::instruction::from_op;
use crate::opcode::{self, Opcode};
use crate::quirks::Quirks;
use crate::state::{ExecStatus, State};

/// What a single call to `Chip8::cycle` did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// The opcode was executed
    Executed(u16),
    /// The opcode isn't a known instruction; it was skipped
    Unknown(u16),
    /// Nothing ran because an Fx0A is still waiting for a key press
    AwaitingKey,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing and reversing the CPU
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// Nothing here keeps time. Whoever drives the machine decides how many cycles to run per
/// frame, calls `tick_timers` at 60Hz and stops cycling while `awaiting_key` is true.
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        Chip8 {
            state: State::with_quirks(quirks),
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
        }
    }

    /// Load a rom from a source
    ///
    /// The rom's bytes are the program verbatim; they're written from 0x200 on.
    /// Returns the number of bytes loaded.
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        let loaded = self.state.memory.load_program(&program);
        log::info!("loaded {} byte ROM", loaded);
        Ok(loaded)
    }

    /// Load a rom from a file on disk
    ///
    /// # Arguments
    /// * `path` the location of the ROM
    pub fn load_rom_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        self.load_rom(&mut reader)
    }

    /// The frame buffer as it currently stands
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn and clears the draw flag
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Set the pressed status of key
    ///
    /// If an Fx0A is waiting, the key is written to its register and execution resumes.
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad.press(key);
        if let ExecStatus::AwaitingKey(register) = self.state.status {
            log::debug!("key {:X} resumes execution into V{:X}", key & 0xF, register);
            self.state.v[register as usize] = key & 0xF;
            self.state.status = ExecStatus::Running;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad.release(key);
    }

    /// Whether the CPU is suspended until a key is pressed
    pub fn awaiting_key(&self) -> bool {
        self.state.status != ExecStatus::Running
    }

    /// Advances the CPU by a single cycle
    /// - breaks if awaiting a keypress
    /// - gets the next opcode and moves the pc past it
    /// - executes the opcode, or reports it if it's unknown
    ///
    /// A stack overflow or underflow is fatal and is returned as an error.
    pub fn cycle(&mut self) -> Result<Cycle> {
        if self.awaiting_key() {
            return Ok(Cycle::AwaitingKey);
        }

        let op: u16 = self.get_op();
        log::trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let operation = match from_op(&op) {
            Some(operation) => operation,
            None => {
                log::warn!("unknown opcode {:04X} at {:04X}", op, self.state.pc);
                self.state.pc = self.state.pc.wrapping_add(0x2);
                return Ok(Cycle::Unknown(op));
            }
        };

        self.save_state();
        self.state.pc = self.state.pc.wrapping_add(0x2);
        operation(&op.fields(), &mut self.state)?;
        Ok(Cycle::Executed(op))
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    pub fn reverse_cycle(&mut self) {
        if let Some(state) = self.previous_states.pop_front() {
            // Keys reflect the physical keypad, not the point in time being restored
            let keypad = self.state.keypad;
            self.state = state;
            self.state.keypad = keypad;
            self.state.draw_flag = true;
        }
    }

    /// Puts the current state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(self.state);
    }

    /// Decrements both timers by one, stopping at zero.
    /// Meant to be called at 60Hz regardless of how many cycles run in between.
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Read-only view of the machine's state
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let high = self.state.memory.read(self.state.pc);
        let low = self.state.memory.read(self.state.pc.wrapping_add(1));
        opcode::fetch(high, low)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
