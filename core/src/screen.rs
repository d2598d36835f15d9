use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel.
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Screen
/// The 64x32 monochrome surface sprites are drawn onto.
///
/// Sprites are XORed onto the frame buffer and wrap around both edges.
/// `dirty` is raised whenever the frame buffer changes so the machine knows
/// to hand a new frame to the display sink.
#[derive(Clone)]
pub struct Screen {
    frame_buffer: FrameBuffer,
    dirty: bool,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// XORs `sprite` onto the frame buffer with its top left corner at (x, y).
    ///
    /// Each byte of `sprite` is one row of 8 pixels, most significant bit leftmost.
    /// Coordinates wrap, so a sprite drawn off an edge reappears on the opposite one.
    ///
    /// Returns whether any lit sprite pixel landed on an already lit pixel.
    pub fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collided = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for col in 0..8 {
                if byte >> (7 - col) & 1 == 0 {
                    continue;
                }
                let px = (x as usize + col) % DISPLAY_WIDTH;
                let pixel = &mut self.frame_buffer[py][px];
                collided |= *pixel;
                *pixel = !*pixel;
            }
        }
        self.dirty = true;
        collided
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Returns the frame buffer if it changed since the last call.
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.dirty {
            self.dirty = false;
            Some(&self.frame_buffer)
        } else {
            None
        }
    }

    pub fn lit(&self) -> usize {
        self.frame_buffer
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&p| p)
            .count()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GLYPHS;
    use proptest::prelude::*;

    #[test]
    fn test_draw_glyph() {
        let mut screen = Screen::new();
        // Draw the 0x0 glyph with a 1x 1y offset
        assert!(!screen.draw(1, 1, &GLYPHS[0..5]));
        let mut expected = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        expected[1][1..5].copy_from_slice(&[true, true, true, true]);
        expected[2][1..5].copy_from_slice(&[true, false, false, true]);
        expected[3][1..5].copy_from_slice(&[true, false, false, true]);
        expected[4][1..5].copy_from_slice(&[true, false, false, true]);
        expected[5][1..5].copy_from_slice(&[true, true, true, true]);
        assert!(screen
            .frame_buffer()
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| a[..] == b[..]));
    }

    #[test]
    fn test_draw_xors() {
        let mut screen = Screen::new();
        // 0 1 0 1 -> Set
        screen.draw(2, 0, &[0b0101_0000]);
        // 1 1 0 0 -> Draw xor
        let collided = screen.draw(2, 0, &[0b1100_0000]);
        assert_eq!(screen.frame_buffer()[0][2..6], [true, false, false, true]);
        assert!(collided);
    }

    #[test]
    fn test_draw_no_collision_on_unlit() {
        let mut screen = Screen::new();
        screen.draw(0, 0, &[0b1010_1010]);
        assert!(!screen.draw(0, 0, &[0b0101_0101]));
        assert_eq!(screen.lit(), 8);
    }

    #[test]
    fn test_draw_wraps_both_edges() {
        let mut screen = Screen::new();
        screen.draw(62, 31, &[0xFF, 0xFF]);
        assert!(screen.pixel(63, 31));
        assert!(screen.pixel(0, 31));
        assert!(screen.pixel(5, 0));
        assert!(!screen.pixel(6, 0));
        assert_eq!(screen.lit(), 16);
    }

    #[test]
    fn test_large_coordinates_wrap() {
        let mut screen = Screen::new();
        screen.draw(200, 100, &[0x80]);
        assert!(screen.pixel(200 % 64, 100 % 32));
    }

    #[test]
    fn test_clear() {
        let mut screen = Screen::new();
        screen.draw(0, 0, &[0xFF; 15]);
        screen.clear();
        assert_eq!(screen.lit(), 0);
    }

    #[test]
    fn test_take_frame_only_when_dirty() {
        let mut screen = Screen::new();
        assert!(screen.take_frame().is_none());
        screen.draw(0, 0, &[0x80]);
        assert!(screen.take_frame().is_some());
        assert!(screen.take_frame().is_none());
        screen.clear();
        assert!(screen.take_frame().is_some());
    }

    proptest! {
        #[test]
        fn full_row_toggles_eight_cells(x in 0u8..64, y in 0u8..32) {
            let mut screen = Screen::new();
            screen.draw(x, y, &[0xFF]);
            prop_assert_eq!(screen.lit(), 8);
            for col in 0..8 {
                prop_assert!(screen.pixel((x as usize + col) % DISPLAY_WIDTH, y as usize));
            }
        }

        #[test]
        fn drawing_twice_restores_the_frame(
            x in any::<u8>(),
            y in any::<u8>(),
            sprite in proptest::collection::vec(any::<u8>(), 0..16),
            background in proptest::collection::vec(any::<u8>(), 0..16),
        ) {
            let mut screen = Screen::new();
            screen.draw(0, 0, &background);
            let before = *screen.frame_buffer();
            screen.draw(x, y, &sprite);
            let mut lit_after_first = false;
            for (row, byte) in sprite.iter().enumerate() {
                for col in 0..8 {
                    if byte >> (7 - col) & 1 == 1 {
                        lit_after_first |= screen.pixel(x as usize + col, y as usize + row);
                    }
                }
            }
            let collided = screen.draw(x, y, &sprite);
            prop_assert_eq!(collided, lit_after_first);
            prop_assert!(screen.frame_buffer() == &before);
        }
    }
}
