//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    InitFailed,
    WriteFailed,
}

/// Trait für einen einzelnen digitalen LED-Ausgang (active-HIGH)
///
/// # Implementierungen
/// - **Production:** GpioLed (esp-hal Output-Pin)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait IndicatorWriter: Send {
    /// Schaltet den Ausgang HIGH (`true`) oder LOW (`false`)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_level(&mut self, on: bool) -> Result<(), LedError>;
}

/// Trait für das Display als Frame-Senke
///
/// Ein Frame wird immer komplett neu aufgebaut: clear, drei Textzeilen,
/// flush. Es gibt kein Diffing gegen den vorherigen Frame.
///
/// # Implementierungen
/// - **Production:** OledDisplay (SSD1306 über I2C)
/// - **Fallback:** NullFrameSink (Display-Init fehlgeschlagen)
/// - **Testing:** Recording-Mock in esp-tests
pub trait FrameSink {
    /// Löscht den Frame-Buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Zeichnet Text an einer festen Pixel-Position (Baseline oben)
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;

    /// Überträgt den Frame-Buffer auf das Panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
