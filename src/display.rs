use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The pixel grid, indexed as [y][x] with 1 for on and 0 for off.
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display
/// The 64x32 monochrome bitmap display.
///
/// Sprites are composited by XOR: drawing a pixel over an on pixel
/// turns it off, which is how programs erase. Sprite coordinates wrap
/// modulo the display size, so drawing at an off-grid origin is legal
/// and comes back around the other side.
pub struct Display {
    pixels: FrameBuffer,
}

impl Display {
    pub fn new() -> Self {
        Display {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XOR a sprite onto the display at (`x`, `y`), wrapping at the edges.
    ///
    /// Each byte of `rows` is one row of up to 8 pixels, MSB leftmost.
    /// Returns true if any pixel was turned off by the draw (a
    /// collision), which the executor reports through VF.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let mut collision = false;
        for (row, &byte) in rows.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                let px = (x as usize + bit) % DISPLAY_WIDTH;
                let pixel = (byte >> (7 - bit)) & 1;
                collision |= pixel & self.pixels[py][px] == 1;
                self.pixels[py][px] ^= pixel;
            }
        }
        collision
    }

    /// Read-only view of the pixel grid for rendering.
    pub fn pixels(&self) -> &FrameBuffer {
        &self.pixels
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_sets_pixels() {
        let mut display = Display::new();
        display.draw_sprite(2, 0, &[0b1100_0000]);
        assert_eq!(display.pixels()[0][2..6], [1, 1, 0, 0]);
    }

    #[test]
    fn test_draw_xors_existing_pixels() {
        let mut display = Display::new();
        display.draw_sprite(0, 0, &[0b0101_0000]);
        display.draw_sprite(0, 0, &[0b1100_0000]);
        assert_eq!(display.pixels()[0][0..4], [1, 0, 0, 1]);
    }

    #[test]
    fn test_redraw_erases_and_collides() {
        let mut display = Display::new();
        let sprite = [0xF0, 0x90, 0xF0];
        assert!(!display.draw_sprite(4, 4, &sprite));
        // XOR is self-inverse so the second draw clears every pixel
        assert!(display.draw_sprite(4, 4, &sprite));
        assert!(display
            .pixels()
            .iter()
            .all(|row| row.iter().all(|&p| p == 0)));
    }

    #[test]
    fn test_draw_wraps_both_axes() {
        let mut display = Display::new();
        display.draw_sprite(62, 31, &[0b1111_0000, 0b1111_0000]);
        // right edge wraps to the left
        assert_eq!(display.pixels()[31][62..64], [1, 1]);
        assert_eq!(display.pixels()[31][0..2], [1, 1]);
        // bottom edge wraps to the top
        assert_eq!(display.pixels()[0][62..64], [1, 1]);
        assert_eq!(display.pixels()[0][0..2], [1, 1]);
    }

    #[test]
    fn test_clear_turns_everything_off() {
        let mut display = Display::new();
        display.draw_sprite(0, 0, &[0xFF, 0xFF]);
        display.clear();
        assert!(display
            .pixels()
            .iter()
            .all(|row| row.iter().all(|&p| p == 0)));
    }
}
