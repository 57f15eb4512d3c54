use crate::chip::{chip8::Chip8, Chip, ChipWithCursiveDisplay};

use cursive::{
    direction::Direction,
    event::{Event, EventResult},
    view::CannotFocus,
    theme::{BaseColor, Color, ColorStyle},
    view::View,
    CbSink, Printer, Vec2,
};

use crate::chip::chip8::constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH};

/// Represents the display of the Chip 8
pub struct Display {
    pixels: [bool; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
}

impl Display {
    /// Creates a new display from a slice.
    pub fn new(pixels: &[bool]) -> Self {
        assert_eq!(pixels.len(), CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT);
        let mut tmp = [false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT];
        tmp.copy_from_slice(pixels);
        Display { pixels: tmp }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(&[false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT])
    }
}

/// Implements cursive::view::View for Display to enable drawing it
/// as a View out of the box.
impl View for Display {
    fn draw(&self, printer: &Printer) {
        printer.with_color(
            ColorStyle::new(Color::Dark(BaseColor::Black), Color::RgbLowRes(0, 0, 0)),
            |printer| {
                for x in 0..CHIP8_DISPLAY_WIDTH {
                    for y in 0..CHIP8_DISPLAY_HEIGHT {
                        if self.pixels[x + CHIP8_DISPLAY_WIDTH * y] {
                            printer.print((x, y), " ");
                        }
                    }
                }
            },
        );
    }

    fn take_focus(&mut self, _: Direction) -> Result<EventResult, CannotFocus> {
        Ok(EventResult::Consumed(None))
    }

    fn on_event(&mut self, _event: Event) -> EventResult {
        EventResult::Ignored
    }

    fn required_size(&mut self, _: Vec2) -> Vec2 {
        Vec2 {
            x: CHIP8_DISPLAY_WIDTH,
            y: CHIP8_DISPLAY_HEIGHT,
        }
    }
}

impl ChipWithCursiveDisplay for Chip8 {
    fn update_ui(&mut self, gfx_sink: &CbSink) {
        if !self.framebuffer.redraw() {
            return;
        }
        let display = Display::new(self.read_output_pins());
        gfx_sink
            .send(Box::new(move |s: &mut cursive::Cursive| {
                s.pop_layer();
                s.add_layer(display);
            }))
            .expect("Sending updated display failed");
        self.framebuffer.clear_redraw();
    }
}
