use crate::chip::chip8::constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH};

/// The monochrome display buffer. Pixels are XOR-composited, coordinates
/// wrap modulo the display dimensions, and the redraw flag records whether
/// any pixel changed since the consuming renderer last cleared it.
pub struct Framebuffer {
    pixels: [bool; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
    redraw: bool,
}

impl Framebuffer {
    pub fn new() -> Self {
        Framebuffer {
            pixels: [false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
            redraw: false,
        }
    }

    /// XORs the pixel at (x, y), wrapping both coordinates. Returns true
    /// if a lit pixel was turned off, i.e. a sprite collision.
    pub fn flip(&mut self, x: u16, y: u16) -> bool {
        let index = (x as usize % CHIP8_DISPLAY_WIDTH)
            + (y as usize % CHIP8_DISPLAY_HEIGHT) * CHIP8_DISPLAY_WIDTH;
        let collision = self.pixels[index];
        self.pixels[index] ^= true;
        self.redraw = true;
        collision
    }

    /// Turns every pixel off and raises the redraw flag.
    pub fn clear(&mut self) {
        self.pixels = [false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT];
        self.redraw = true;
    }

    /// The pixel grid in row-major order.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn redraw(&self) -> bool {
        self.redraw
    }

    /// Cleared by the renderer after it consumed the buffer.
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_sets_and_collides() {
        let mut framebuffer = Framebuffer::new();
        assert!(!framebuffer.flip(3, 4));
        assert!(framebuffer.pixels()[3 + 4 * CHIP8_DISPLAY_WIDTH]);
        assert!(framebuffer.flip(3, 4));
        assert!(!framebuffer.pixels()[3 + 4 * CHIP8_DISPLAY_WIDTH]);
    }

    #[test]
    fn test_coordinates_wrap() {
        let mut framebuffer = Framebuffer::new();
        framebuffer.flip(64, 32);
        assert!(framebuffer.pixels()[0]);
    }

    #[test]
    fn test_clear_raises_redraw() {
        let mut framebuffer = Framebuffer::new();
        framebuffer.flip(0, 0);
        framebuffer.clear_redraw();
        framebuffer.clear();
        assert!(framebuffer.redraw());
        assert!(framebuffer.pixels().iter().all(|pixel| !pixel));
    }
}
