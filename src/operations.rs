//! One function per instruction.
//!
//! The program counter has already been moved past the instruction by the time an operation
//! runs, so only operations that change control flow touch it.

use crate::constants::{FLAG, FONT_GLYPH_BYTES, FONT_START, STACK_DEPTH};
use crate::error::{Error, Result};
use crate::opcode::Fields;
use crate::quirks::{ShiftSource, SubnFlag};
use crate::state::{ExecStatus, State};

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// clear
pub fn clr(_op: &Fields, state: &mut State) -> Result<()> {
    state.frame_buffer.clear();
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &Fields, state: &mut State) -> Result<()> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow {
            pc: state.pc.wrapping_sub(0x2),
        });
    }
    state.sp -= 0x1;
    state.pc = state.stack[state.sp as usize];
    Ok(())
}

/// PC = addr
pub fn jump(op: &Fields, state: &mut State) -> Result<()> {
    state.pc = op.nnn;
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: &Fields, state: &mut State) -> Result<()> {
    if state.sp as usize >= STACK_DEPTH {
        return Err(Error::StackOverflow {
            pc: state.pc.wrapping_sub(0x2),
        });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 0x1;
    state.pc = op.nnn;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: &Fields, state: &mut State) -> Result<()> {
    let condition = state.v[op.x as usize] == op.kk;
    skip_if(state, condition);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: &Fields, state: &mut State) -> Result<()> {
    let condition = state.v[op.x as usize] != op.kk;
    skip_if(state, condition);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &Fields, state: &mut State) -> Result<()> {
    let condition = state.v[op.x as usize] == state.v[op.y as usize];
    skip_if(state, condition);
    Ok(())
}

/// Vx = kk
pub fn load(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] = op.kk;
    Ok(())
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] = state.v[op.x as usize].wrapping_add(op.kk);
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] = state.v[op.y as usize];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] |= state.v[op.y as usize];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] &= state.v[op.y as usize];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] ^= state.v[op.y as usize];
    Ok(())
}

/// Vx += Vy; VF = overflow
pub fn addr(op: &Fields, state: &mut State) -> Result<()> {
    let (res, over) = state.v[op.x as usize].overflowing_add(state.v[op.y as usize]);
    state.v[op.x as usize] = res;
    state.v[FLAG] = over as u8;
    Ok(())
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: &Fields, state: &mut State) -> Result<()> {
    let (vx, vy) = (state.v[op.x as usize], state.v[op.y as usize]);
    state.v[op.x as usize] = vx.wrapping_sub(vy);
    state.v[FLAG] = (vx > vy) as u8;
    Ok(())
}

fn shift_operand(op: &Fields, state: &State) -> u8 {
    match state.quirks.shift_source {
        ShiftSource::Vy => state.v[op.y as usize],
        ShiftSource::Vx => state.v[op.x as usize],
    }
}

/// Vx = Vy >> 1; VF = the bit shifted out
pub fn shr(op: &Fields, state: &mut State) -> Result<()> {
    let operand = shift_operand(op, state);
    state.v[op.x as usize] = operand >> 1;
    state.v[FLAG] = operand & 0x1;
    Ok(())
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: &Fields, state: &mut State) -> Result<()> {
    let (vx, vy) = (state.v[op.x as usize], state.v[op.y as usize]);
    state.v[op.x as usize] = vy.wrapping_sub(vx);
    state.v[FLAG] = match state.quirks.subn_flag {
        SubnFlag::PreSubtraction => (vy > vx) as u8,
        SubnFlag::AfterWrite => (vy > state.v[op.x as usize]) as u8,
    };
    Ok(())
}

/// Vx = Vy << 1; VF = the bit shifted out
pub fn shl(op: &Fields, state: &mut State) -> Result<()> {
    let operand = shift_operand(op, state);
    state.v[op.x as usize] = operand << 1;
    state.v[FLAG] = (operand & 0x80) >> 7;
    Ok(())
}

/// if Vx != Vy then pc +=2
pub fn skrne(op: &Fields, state: &mut State) -> Result<()> {
    let condition = state.v[op.x as usize] != state.v[op.y as usize];
    skip_if(state, condition);
    Ok(())
}

/// I = addr
pub fn loadi(op: &Fields, state: &mut State) -> Result<()> {
    state.i = op.nnn;
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: &Fields, state: &mut State) -> Result<()> {
    state.pc = op.nnn + u16::from(state.v[0x0]);
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(op: &Fields, state: &mut State) -> Result<()> {
    let rand_byte: u8 = rand::random();
    state.v[op.x as usize] = rand_byte & op.kk;
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer.
/// Sets VF if any pixels were erased
pub fn draw(op: &Fields, state: &mut State) -> Result<()> {
    let (x, y) = (state.v[op.x as usize], state.v[op.y as usize]);
    let mut sprite = [0u8; 0xF];
    for (row, byte) in sprite.iter_mut().enumerate().take(op.n as usize) {
        *byte = state.memory.read(state.i.wrapping_add(row as u16));
    }

    let collision = state.frame_buffer.draw_sprite(x, y, &sprite[..op.n as usize]);
    state.v[FLAG] = collision as u8;
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &Fields, state: &mut State) -> Result<()> {
    let condition = state.keypad.is_pressed(state.v[op.x as usize]);
    skip_if(state, condition);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &Fields, state: &mut State) -> Result<()> {
    let condition = !state.keypad.is_pressed(state.v[op.x as usize]);
    skip_if(state, condition);
    Ok(())
}

/// Vx = DT
pub fn moved(op: &Fields, state: &mut State) -> Result<()> {
    state.v[op.x as usize] = state.delay_timer;
    Ok(())
}

/// await keypress for Vx
pub fn keyd(op: &Fields, state: &mut State) -> Result<()> {
    log::debug!("awaiting a key press for V{:X}", op.x);
    state.status = ExecStatus::AwaitingKey(op.x);
    Ok(())
}

/// DT = Vx
pub fn loads(op: &Fields, state: &mut State) -> Result<()> {
    state.delay_timer = state.v[op.x as usize];
    Ok(())
}

/// ST = Vx
pub fn ld(op: &Fields, state: &mut State) -> Result<()> {
    state.sound_timer = state.v[op.x as usize];
    Ok(())
}

/// I += Vx; VF = 12-bit overflow
pub fn addi(op: &Fields, state: &mut State) -> Result<()> {
    state.i = (state.i & 0x0FFF) + u16::from(state.v[op.x as usize]);
    if state.quirks.index_overflow_flag {
        state.v[FLAG] = ((state.i & 0x1000) >> 12) as u8;
    }
    Ok(())
}

/// I = 0x050 + Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &Fields, state: &mut State) -> Result<()> {
    state.i = FONT_START + u16::from(state.v[op.x as usize]) * FONT_GLYPH_BYTES;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &Fields, state: &mut State) -> Result<()> {
    let value = state.v[op.x as usize];
    let digits = [value / 100 % 10, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.memory.write(state.i.wrapping_add(offset as u16), *digit);
    }
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
/// Fill memory starting at address i with V0..=Vx
pub fn stor(op: &Fields, state: &mut State) -> Result<()> {
    for register in 0..=op.x as usize {
        state.memory.write(state.i, state.v[register]);
        state.i = state.i.wrapping_add(0x1);
    }
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
/// Fill V0..=Vx with memory starting at address i
pub fn read(op: &Fields, state: &mut State) -> Result<()> {
    for register in 0..=op.x as usize {
        state.v[register] = state.memory.read(state.i);
        state.i = state.i.wrapping_add(0x1);
    }
    Ok(())
}
