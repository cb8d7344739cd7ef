// GPIO LED Writer - Implementierung des IndicatorWriter Traits
//
// Ein Writer pro Kanal; die Kanäle sind elektrisch und logisch
// voneinander unabhängig (active-HIGH, Katode gemeinsam).

use esp_core::{IndicatorWriter, LedError};
use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};

/// Real Hardware LED Writer
///
/// Kapselt einen esp-hal Output-Pin. Der Pin startet LOW (LED aus),
/// wie es die Startup-Sequenz verlangt.
pub struct GpioLed<'a> {
    pin: Output<'a>,
}

impl<'a> GpioLed<'a> {
    pub fn new(pin: impl Into<AnyPin<'a>>) -> Self {
        Self {
            pin: Output::new(pin.into(), Level::Low, OutputConfig::default()),
        }
    }
}

impl IndicatorWriter for GpioLed<'_> {
    fn set_level(&mut self, on: bool) -> Result<(), LedError> {
        // GPIO-Writes auf esp-hal sind infallibel; der Result-Typ bleibt
        // wegen der Mock-Implementierungen in den Host-Tests erhalten
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }
}
