// MQ135 Gas-Sensor - eine oneshot ADC-Konvertierung pro Aufruf
//
// Der Sensor liefert Roh-Counts des Wandlers; es findet keine
// Kalibrierung oder Skalierung auf ppm statt.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcCalBasic, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO2};

type GasCal = AdcCalBasic<ADC1<'static>>;

/// Analog-Zugriff auf den MQ135
pub struct AdcGasSensor {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: AdcPin<GPIO2<'static>, ADC1<'static>, GasCal>,
}

impl AdcGasSensor {
    /// Konfiguriert den ADC-Kanal mit 11dB Dämpfung (voller 0-3.3V Bereich)
    pub fn new(adc_periph: ADC1<'static>, gas_pin: GPIO2<'static>) -> Self {
        let mut adc_config = AdcConfig::new();
        let pin = adc_config.enable_pin_with_cal::<_, GasCal>(gas_pin, Attenuation::_11dB);
        let adc = Adc::new(adc_periph, adc_config);
        Self { adc, pin }
    }

    /// Eine Analog-Digital-Konvertierung, 12-bit Roh-Counts
    ///
    /// Kein Fehlerpfad: ein abgeklemmter Sensor liefert schlicht einen
    /// beliebigen Wert, eine fehlgeschlagene Konvertierung 0.
    pub fn read_raw(&mut self) -> u16 {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).unwrap_or(0)
    }
}
