//! Core Types für die Luftqualitäts-Station
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Eine frische Sensor-Messung
///
/// Wird bei jedem Sampling-Tick und bei jedem Sensor-Request neu erzeugt,
/// nie gecacht oder persistiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Roh-Wert des MQ135 (ADC-Counts, unkalibriert)
    pub gas_raw: u16,
    /// Temperatur in Grad Celsius (AHT10)
    pub temperature_c: f32,
    /// Relative Luftfeuchtigkeit in Prozent (AHT10)
    pub humidity_pct: f32,
}

/// Die drei unabhängigen Indikator-Kanäle
///
/// Kein echtes RGB-Mixing: jeder Kanal wird einzeln geschaltet und
/// einzeln über die HTTP-API angesprochen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedChannel {
    Red,
    Green,
    Blue,
}

impl LedChannel {
    /// Routen- und JSON-Key des Kanals
    pub fn as_str(self) -> &'static str {
        match self {
            LedChannel::Red => "red",
            LedChannel::Green => "green",
            LedChannel::Blue => "blue",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SensorReading {{ gas: {}, temp: {} C, hum: {} % }}",
            self.gas_raw,
            self.temperature_c,
            self.humidity_pct
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedChannel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}
