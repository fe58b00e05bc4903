//! SSD1306 OLED presented as a 16×2 character surface.
//!
//! The menu core only knows the abstract [`TextSurface`]; this module
//! binds it to a 128×64 OLED, one 8-pixel glyph per character cell,
//! two text rows. `set_power` maps to the controller's display-on bit,
//! which is what the screen saver toggles.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;
use crate::menu::display::TextSurface;
use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Text baselines of the two character rows (16 glyphs of 8×13 px).
const ROW_BASELINES: [i32; DISPLAY_HEIGHT] = [24, 48];

/// 16×2 character surface backed by an SSD1306.
///
/// Keeps a shadow of the character grid so the partial value-field
/// rewrites coming from the menu driver can be merged into a full
/// frame before flushing.
pub struct OledSurface<I2C> {
    display: Oled<I2C>,
    grid: [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl<I2C: embedded_hal::i2c::I2c> OledSurface<I2C> {
    /// Initialise the OLED and clear the screen.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::Display)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::Display)?;
        Ok(Self {
            display,
            grid: [[b' '; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        })
    }

    fn redraw(&mut self) {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_8X13)
            .text_color(BinaryColor::On)
            .build();

        self.display.clear_buffer();
        for (row, cells) in self.grid.iter().enumerate() {
            // The grid only ever holds ASCII written by the menu core.
            if let Ok(line) = core::str::from_utf8(cells) {
                let _ = Text::new(line, Point::new(0, ROW_BASELINES[row]), style)
                    .draw(&mut self.display);
            }
        }
        let _ = self.display.flush();
    }
}

impl<I2C: embedded_hal::i2c::I2c> TextSurface for OledSurface<I2C> {
    fn write_text(&mut self, row: u8, col: u8, text: &str) {
        let Some(cells) = self.grid.get_mut(row as usize) else {
            return;
        };
        let mut col = col as usize;
        for b in text.bytes() {
            if col >= DISPLAY_WIDTH {
                break;
            }
            cells[col] = b;
            col += 1;
        }
        self.redraw();
    }

    fn set_power(&mut self, on: bool) {
        let _ = self.display.set_display_on(on);
    }
}
