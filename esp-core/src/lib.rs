//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und das JSON-Protokoll
//! der Luftqualitäts-Station.

#![no_std]

pub mod logic;
#[cfg(feature = "serde")]
pub mod protocol;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{
    DisplayRefresh, Indicator, NullFrameSink, format_gas_line, format_humidity_line,
    format_temperature_line, render_frame,
};
pub use traits::{DisplayError, FrameSink, IndicatorWriter, LedError};
pub use types::{LedChannel, SensorReading};
