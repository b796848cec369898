use crate::constants::{DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH};

/// # FrameBuffer
/// The Chip-8 display is 64x32 monochrome pixels.
/// Each pixel is stored as a byte holding 0 (off) or 1 (on), in rows, so the pixel at
/// (x, y) lives at `x + 64 * y`. Indices wrap modulo the size of the buffer.
#[derive(Copy, Clone)]
pub struct FrameBuffer {
    pixels: [u8; DISPLAY_SIZE],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [0; DISPLAY_SIZE],
        }
    }

    pub fn width(&self) -> usize {
        DISPLAY_WIDTH
    }

    pub fn height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    fn index(x: usize, y: usize) -> usize {
        (x + DISPLAY_WIDTH * y) % DISPLAY_SIZE
    }

    /// The value (0 or 1) of the pixel at (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[Self::index(x, y)]
    }

    /// Turn the pixel at (x, y) on or off
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.pixels[Self::index(x, y)] = on as u8;
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels = [0; DISPLAY_SIZE];
    }

    /// The rows of the display, top to bottom
    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.pixels.chunks(DISPLAY_WIDTH)
    }

    /// All pixels in row-major order
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// XORs `sprite` onto the display with its top left corner at (x, y).
    ///
    /// Each byte of `sprite` is one row, drawn most significant bit first.
    /// The origin wraps onto the display, but the sprite itself is clipped at the right and
    /// bottom edges: a row stops at the last column and rows below the last line are dropped.
    ///
    /// Returns true if any pixel that was on got turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let origin_x = x as usize % DISPLAY_WIDTH;
        let origin_y = y as usize % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, byte) in sprite.iter().enumerate() {
            let y = origin_y + row;
            if y >= DISPLAY_HEIGHT {
                break;
            }
            for bit in 0..8 {
                let x = origin_x + bit;
                if x >= DISPLAY_WIDTH {
                    break;
                }
                let pixel = (byte >> (7 - bit)) & 0x1;
                let index = Self::index(x, y);
                collision |= (pixel & self.pixels[index]) == 0x1;
                self.pixels[index] ^= pixel;
            }
        }

        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_framebuffer {
    use super::*;

    #[test]
    fn test_index_wraps() {
        let mut frame = FrameBuffer::new();
        frame.set(DISPLAY_WIDTH, DISPLAY_HEIGHT - 1, true);
        // One past the last column of the last row is the first pixel
        assert_eq!(frame.get(0, 0), 1);
    }

    #[test]
    fn test_draws_rows_msb_first() {
        let mut frame = FrameBuffer::new();
        let collision = frame.draw_sprite(1, 1, &[0b1100_0001, 0b0001_0000]);
        assert!(!collision);
        assert_eq!(frame.rows().nth(1).unwrap()[1..9], [1, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(frame.rows().nth(2).unwrap()[1..9], [0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_xors_and_reports_collision() {
        let mut frame = FrameBuffer::new();
        frame.set(2, 0, true);
        frame.set(4, 0, true);
        // 0 1 0 1 already set, 1 1 0 0 drawn
        let collision = frame.draw_sprite(1, 0, &[0b1100_0000]);
        assert!(collision);
        assert_eq!(frame.as_slice()[1..5], [1, 0, 0, 1]);
    }

    #[test]
    fn test_no_collision_when_only_turning_pixels_on() {
        let mut frame = FrameBuffer::new();
        frame.set(0, 0, true);
        let collision = frame.draw_sprite(1, 0, &[0xFF]);
        assert!(!collision);
    }

    #[test]
    fn test_double_draw_restores_frame() {
        let mut frame = FrameBuffer::new();
        frame.set(10, 10, true);
        frame.set(33, 7, true);
        let before = frame.as_slice().to_vec();
        frame.draw_sprite(30, 6, &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert!(frame.draw_sprite(30, 6, &[0xF0, 0x90, 0x90, 0x90, 0xF0]));
        assert_eq!(frame.as_slice(), &before[..]);
    }

    #[test]
    fn test_clips_at_right_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(60, 0, &[0xFF]);
        assert_eq!(frame.rows().next().unwrap()[60..64], [1, 1, 1, 1]);
        // Nothing wraps around onto the start of the next row or the same row
        assert_eq!(frame.rows().next().unwrap()[0..4], [0, 0, 0, 0]);
        assert_eq!(frame.rows().nth(1).unwrap()[0..4], [0, 0, 0, 0]);
    }

    #[test]
    fn test_clips_at_bottom_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 30, &[0x80, 0x80, 0x80, 0x80]);
        assert_eq!(frame.get(0, 30), 1);
        assert_eq!(frame.get(0, 31), 1);
        assert_eq!(frame.get(0, 0), 0);
        assert_eq!(frame.get(0, 1), 0);
    }

    #[test]
    fn test_origin_wraps() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(64 + 3, 32 + 2, &[0x80]);
        assert_eq!(frame.get(3, 2), 1);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0xFF, 0xFF]);
        frame.clear();
        assert!(frame.as_slice().iter().all(|&p| p == 0));
    }
}
