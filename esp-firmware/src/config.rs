// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Pin-Zuordnung
// ============================================================================
//
// Die Pin-Konstanten dokumentieren die Verdrahtung; die eigentliche
// Pin-Auswahl passiert typsicher in main.rs über die Peripherals.

/// Analog-Eingang des MQ135 Gas-Sensors (ADC1-Kanal)
pub const MQ135_PIN: u8 = 2;

/// Digitale Ausgänge der Indikator-LEDs (active-HIGH)
pub const RED_PIN: u8 = 18;
pub const GREEN_PIN: u8 = 19;
pub const BLUE_PIN: u8 = 20;

/// I2C-Bus für OLED und AHT10 (geteilter Zwei-Draht-Bus)
pub const I2C_SDA_PIN: u8 = 6;
pub const I2C_SCL_PIN: u8 = 7;

/// I2C-Taktfrequenz in kHz
pub const I2C_FREQ_KHZ: u32 = 400;

/// I2C-Adresse des SSD1306 OLED-Panels
pub const OLED_ADDRESS: u8 = 0x3C;

// ============================================================================
// Sampling & Display
// ============================================================================

/// Intervall zwischen zwei Display-Redraws in Millisekunden
pub const DISPLAY_REFRESH_INTERVAL_MS: u64 = 500;

/// Idle-Delay pro Loop-Iteration (gibt die CPU an andere Tasks ab)
pub const LOOP_IDLE_DELAY_MS: u64 = 1;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Maximale Anzahl Assoziations-Versuche beim Start
/// 20 Versuche x 500 ms Wartezeit = ~10 s Timeout; danach startet der
/// HTTP-Server nie und die Station läuft ohne Netzwerk weiter
pub const WIFI_CONNECT_ATTEMPTS: usize = 20;

/// Wartezeit zwischen zwei Assoziations-Versuchen in Millisekunden
pub const WIFI_CONNECT_RETRY_MS: u64 = 500;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP-Port der API (kein TLS, keine Versionierung)
pub const HTTP_PORT: u16 = 80;

/// Anzahl der HTTP-Server-Task-Instanzen (concurrent connections)
pub const WEB_TASK_POOL_SIZE: usize = 4;

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers und Body
/// Die JSON-Bodies sind < 64 Bytes, 1024 reicht locker
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 1024;
