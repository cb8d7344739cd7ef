//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt::Write;

use heapless::String;

use crate::traits::{DisplayError, FrameSink, IndicatorWriter, LedError};
use crate::types::{LedChannel, SensorReading};

/// Maximale Länge einer Display-Zeile
pub const LINE_CAPACITY: usize = 20;

/// Y-Positionen der drei Display-Zeilen (Pixel, Baseline oben)
pub const LINE_POSITIONS: [i32; 3] = [0, 20, 40];

/// 500ms-Drossel für das Display-Refresh
///
/// Hält den Zeitpunkt des letzten Redraws und entscheidet pro
/// Loop-Iteration, ob ein neuer Frame fällig ist. Die Zeit kommt als
/// Parameter herein, damit die Logik mit einer simulierten Uhr
/// testbar bleibt.
///
/// # Beispiele
///
/// ```
/// # use esp_core::DisplayRefresh;
/// let mut refresh = DisplayRefresh::new(500);
/// assert!(!refresh.poll(499));
/// assert!(refresh.poll(500));
/// assert!(!refresh.poll(999)); // erst 499 ms seit letztem Redraw
/// assert!(refresh.poll(1000));
/// ```
pub struct DisplayRefresh {
    interval_ms: u64,
    last_ms: u64,
}

impl DisplayRefresh {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// Gibt `true` zurück wenn seit dem letzten Redraw mindestens das
    /// Intervall vergangen ist, und merkt sich dann `now_ms` als neuen
    /// Redraw-Zeitpunkt.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Die drei unabhängigen LED-Ausgänge der Station
///
/// Jeder Kanal hat seinen eigenen Writer; das Setzen eines Kanals
/// berührt die anderen nicht. Zustand ist write-only: es gibt keine
/// Read-back-Route in der API.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: IndicatorWriter` ermöglicht:
/// - Real Hardware (GpioLed) im Production-Code
/// - Mock Implementation (MockLedWriter) in Unit Tests
pub struct Indicator<W: IndicatorWriter> {
    red: W,
    green: W,
    blue: W,
}

impl<W: IndicatorWriter> Indicator<W> {
    pub fn new(red: W, green: W, blue: W) -> Self {
        Self { red, green, blue }
    }

    /// Schaltet genau einen Kanal, sofort und bedingungslos
    pub fn set(&mut self, channel: LedChannel, on: bool) -> Result<(), LedError> {
        match channel {
            LedChannel::Red => self.red.set_level(on),
            LedChannel::Green => self.green.set_level(on),
            LedChannel::Blue => self.blue.set_level(on),
        }
    }

    /// Startzustand: alle Kanäle aus
    pub fn all_off(&mut self) -> Result<(), LedError> {
        self.red.set_level(false)?;
        self.green.set_level(false)?;
        self.blue.set_level(false)
    }
}

/// Formatiert die Gas-Zeile, z.B. "Co2: 812"
pub fn format_gas_line(gas_raw: u16) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "Co2: {}", gas_raw);
    line
}

/// Formatiert die Temperatur-Zeile, z.B. "T: 23.51 C"
pub fn format_temperature_line(temperature_c: f32) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "T: {:.2} C", temperature_c);
    line
}

/// Formatiert die Feuchte-Zeile, z.B. "U: 40.20 %"
pub fn format_humidity_line(humidity_pct: f32) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "U: {:.2} %", humidity_pct);
    line
}

/// Baut einen kompletten Display-Frame aus der aktuellen Messung auf
///
/// Reihenfolge ist fix: clear, drei Zeilen an festen Positionen, flush.
/// Kein Partial-Update, jeder Tick ist ein voller Redraw.
pub fn render_frame<D: FrameSink>(
    sink: &mut D,
    reading: &SensorReading,
) -> Result<(), DisplayError> {
    sink.clear()?;
    sink.draw_text(&format_gas_line(reading.gas_raw), 0, LINE_POSITIONS[0])?;
    sink.draw_text(
        &format_temperature_line(reading.temperature_c),
        0,
        LINE_POSITIONS[1],
    )?;
    sink.draw_text(
        &format_humidity_line(reading.humidity_pct),
        0,
        LINE_POSITIONS[2],
    )?;
    sink.flush()
}

/// Inerte Frame-Senke für den Betrieb ohne Display
///
/// Wird benutzt wenn die Panel-Initialisierung fehlschlägt: das System
/// läuft weiter, alle Display-Aufrufe sind No-Ops.
pub struct NullFrameSink;

impl FrameSink for NullFrameSink {
    fn clear(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32) -> Result<(), DisplayError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_first_tick_after_interval() {
        let mut refresh = DisplayRefresh::new(500);
        assert!(!refresh.poll(0));
        assert!(!refresh.poll(250));
        assert!(refresh.poll(500));
    }

    #[test]
    fn test_refresh_spacing_at_least_interval() {
        let mut refresh = DisplayRefresh::new(500);
        assert!(refresh.poll(700));
        assert!(!refresh.poll(1100));
        assert!(refresh.poll(1200));
        assert!(!refresh.poll(1699));
        assert!(refresh.poll(1700));
    }

    #[test]
    fn test_refresh_clock_jump_does_not_underflow() {
        let mut refresh = DisplayRefresh::new(500);
        assert!(refresh.poll(10_000));
        // Uhr springt zurück: kein Panic, einfach nicht fällig
        assert!(!refresh.poll(9_000));
    }

    #[test]
    fn test_format_gas_line() {
        assert_eq!(format_gas_line(812).as_str(), "Co2: 812");
        assert_eq!(format_gas_line(0).as_str(), "Co2: 0");
    }

    #[test]
    fn test_format_temperature_line_two_decimals() {
        assert_eq!(format_temperature_line(23.512).as_str(), "T: 23.51 C");
        assert_eq!(format_temperature_line(-3.5).as_str(), "T: -3.50 C");
    }

    #[test]
    fn test_format_humidity_line_two_decimals() {
        assert_eq!(format_humidity_line(40.2).as_str(), "U: 40.20 %");
    }
}
