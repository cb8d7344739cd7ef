// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;

pub mod climate;
pub mod gas_adc;
pub mod indicator;
pub mod oled;

pub use climate::ClimateSensor;
pub use gas_adc::AdcGasSensor;
pub use indicator::GpioLed;
pub use oled::OledDisplay;

/// Der geteilte Zwei-Draht-Bus: OLED (0x3C) und AHT10 (0x38) hängen am
/// selben I2C-Peripheral. NoopRawMutex reicht, weil alle Zugriffe vom
/// selben kooperativen Executor kommen.
pub type SharedI2cBus = Mutex<NoopRawMutex, core::cell::RefCell<I2c<'static, Blocking>>>;

/// Ein Teilnehmer auf dem geteilten Bus
pub type I2cBusDevice = I2cDevice<'static, NoopRawMutex, I2c<'static, Blocking>>;
