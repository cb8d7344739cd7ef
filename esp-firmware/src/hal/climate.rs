// AHT10 Temperatur/Feuchte-Sensor auf dem geteilten I2C-Bus
//
// Der AHT10 spricht dasselbe Protokoll wie der AHT20 auf derselben
// Adresse (0x38), daher kommt der aht20-driver zum Einsatz.

use aht20_driver::{AHT20, AHT20Initialized};
use defmt::{Debug2Format, error};
use esp_hal::delay::Delay;

use super::I2cBusDevice;

/// Zugriff auf den Klima-Sensor
///
/// Schlägt die Initialisierung beim Start fehl, bleibt `device` leer:
/// spätere Reads liefern dann die letzten bekannten Werte (anfangs 0.0).
/// Bewusste Lücke, es gibt keinen Re-Probe und keinen Retry.
pub struct ClimateSensor {
    device: Option<AHT20Initialized<'static, I2cBusDevice>>,
    delay: Delay,
    last: (f32, f32),
}

impl ClimateSensor {
    /// Einmaliger Probe-Versuch beim Start
    ///
    /// Der Treiber muss 'static sein, weil der initialisierte Handle den
    /// uninitialisierten mutabel borrowed (daher StaticCell in main).
    pub fn probe(driver: &'static mut AHT20<I2cBusDevice>) -> Self {
        let mut delay = Delay::new();
        let device = match driver.init(&mut delay) {
            Ok(device) => Some(device),
            Err(e) => {
                error!("AHT10: Sensor not found: {}", Debug2Format(&e));
                None
            }
        };

        Self {
            device,
            delay,
            last: (0.0, 0.0),
        }
    }

    /// Eine Bus-Transaktion; liefert (Temperatur in C, rel. Feuchte in %)
    ///
    /// Fehlgeschlagene Messungen werden nicht validiert oder gemeldet,
    /// der Aufrufer bekommt die zuletzt bekannten Werte.
    pub fn read(&mut self) -> (f32, f32) {
        if let Some(device) = self.device.as_mut() {
            if let Ok(measurement) = device.measure(&mut self.delay) {
                self.last = (measurement.temperature, measurement.humidity);
            }
        }
        self.last
    }
}
