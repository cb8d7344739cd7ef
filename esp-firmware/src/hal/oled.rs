// SSD1306 OLED - Implementierung des FrameSink Traits
//
// 128x64 Panel an fester Bus-Adresse 0x3C, Buffered-Graphics-Mode:
// gezeichnet wird in den RAM-Buffer, flush() schiebt ihn aufs Panel.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use esp_core::{DisplayError, FrameSink};
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*,
    size::DisplaySize128x64};

use super::I2cBusDevice;

type Panel = Ssd1306<
    I2CInterface<I2cBusDevice>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Real Hardware Frame-Senke
pub struct OledDisplay {
    display: Panel,
}

impl OledDisplay {
    /// Panel-Bring-up
    ///
    /// Das ist der einzige explizit behandelte Fehlerfall des Systems:
    /// schlägt die Initialisierung fehl, läuft die Station mit einer
    /// inerten Senke (NullFrameSink) weiter.
    pub fn new(bus: I2cBusDevice) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(bus);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| DisplayError::InitFailed)?;
        Ok(Self { display })
    }

    fn text_style() -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(&FONT_6X10, BinaryColor::On)
    }
}

impl FrameSink for OledDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        Text::with_baseline(text, Point::new(x, y), Self::text_style(), Baseline::Top)
            .draw(&mut self.display)
            .map(|_| ())
            .map_err(|_| DisplayError::WriteFailed)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.display.flush().map_err(|_| DisplayError::WriteFailed)
    }
}
