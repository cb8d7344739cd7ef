// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    DisplayError, DisplayRefresh, FrameSink, Indicator, IndicatorWriter, LedChannel, LedError,
    NullFrameSink, SensorReading, render_frame,
};

// Embassy Mutex-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;

use crate::hal::{AdcGasSensor, ClimateSensor, GpioLed};

// ============================================================================
// Applikations-Kontext
// ============================================================================

/// Der Indikator der Station: drei unabhängige GPIO-Ausgänge
pub type StationIndicator = Indicator<GpioLed<'static>>;

/// Explizit besessener Applikations-Kontext
///
/// Ersetzt ambiente Globals: der Kontext wird einmal in main() gebaut und
/// als `&'static` an die Hauptschleife und die Route-Handler gereicht.
/// Jeder Handler greift nur auf den Teil-Zustand zu, den er braucht.
///
/// Die Mutexe (NoopRawMutex: ein kooperativer Executor, keine Preemption)
/// machen sichtbar, dass Sampling-Loop und HTTP-Handler sich die
/// Sensor-Handles teilen; der Indikator wird nur von Handlern berührt.
pub struct AppContext {
    pub indicator: Mutex<NoopRawMutex, StationIndicator>,
    pub gas: Mutex<NoopRawMutex, AdcGasSensor>,
    pub climate: Mutex<NoopRawMutex, ClimateSensor>,
}
