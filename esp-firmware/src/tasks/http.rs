// HTTP Server Task - Serviert die 8 JSON-Routen der Station
use defmt::{info, warn};
use embassy_net::Stack;
use embassy_time::Duration;
use esp_core::LedChannel;
use esp_core::protocol::{self, Body};
use picoserve::{io::embedded_io_async, response::IntoResponse, routing::get};

use crate::AppContext;
use crate::config::{HTTP_BUFFER_SIZE, HTTP_PORT, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE};

/// Fertig serialisierter JSON-Response
///
/// Alle Routen antworten mit HTTP 200 und Content-Type application/json;
/// einen Fehler-Status gibt es in dieser API nicht.
struct JsonBody(Body);

impl IntoResponse for JsonBody {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        picoserve::response::Response::new(picoserve::response::StatusCode::OK, self.0.as_str())
            .with_header("Content-Type", "application/json")
            .write_to(connection, response_writer)
            .await
    }
}

/// GET /mq135 - eine frische ADC-Konvertierung, Roh-Counts
async fn gas_level(ctx: &'static AppContext) -> JsonBody {
    let gas_raw = ctx.gas.lock().await.read_raw();
    JsonBody(protocol::gas_body(gas_raw))
}

/// GET /aht10 - eine frische Bus-Transaktion gegen den Klima-Sensor
async fn climate(ctx: &'static AppContext) -> JsonBody {
    let (temperature_c, humidity_pct) = ctx.climate.lock().await.read();
    JsonBody(protocol::climate_body(temperature_c, humidity_pct))
}

/// GET /<kanal>/<on|off> - schaltet genau einen LED-Ausgang
///
/// Sofort und bedingungslos; die anderen Kanäle bleiben unberührt.
async fn indicator_set(ctx: &'static AppContext, channel: LedChannel, on: bool) -> JsonBody {
    if ctx.indicator.lock().await.set(channel, on).is_err() {
        // GPIO-Writes sind praktisch infallibel; der Caller sieht trotzdem 200
        warn!("LED: write to channel {} failed", channel);
    }
    JsonBody(protocol::led_body(channel, on))
}

/// HTTP Server Task - läuft parallel zu Sampling und Netzwerk
///
/// **Task Pool:** Diese Task wird 4x gespawnt für concurrent connections.
/// Die Handler sind benannte Funktionen mit explizitem Kontext-Parameter;
/// die Closures bei der Registrierung binden nur `ctx` (Capture-Set
/// sichtbar, Handler ohne Netzwerk-Schicht testbar).
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz (0..3)
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `ctx`: Applikations-Kontext (Sensoren + Indikator)
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    ctx: &'static AppContext,
) {
    info!("HTTP: Server task {} starting on port {}...", task_id, HTTP_PORT);

    // Router-Konfiguration: 8 feste Routen, alle parameterlose GETs.
    // Nicht registrierte Pfade beantwortet picoserve mit seinem Default-404.
    let app = picoserve::Router::new()
        .route("/mq135", get(move || gas_level(ctx)))
        .route("/aht10", get(move || climate(ctx)))
        .route("/red/on", get(move || indicator_set(ctx, LedChannel::Red, true)))
        .route("/red/off", get(move || indicator_set(ctx, LedChannel::Red, false)))
        .route("/green/on", get(move || indicator_set(ctx, LedChannel::Green, true)))
        .route("/green/off", get(move || indicator_set(ctx, LedChannel::Green, false)))
        .route("/blue/on", get(move || indicator_set(ctx, LedChannel::Blue, true)))
        .route("/blue/off", get(move || indicator_set(ctx, LedChannel::Blue, false)));

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    // Server erstellen und auf Port 80 lauschen
    let server = picoserve::Server::new(&app, &config, &mut http_buffer);
    let _ = server
        .listen_and_serve(task_id, *stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task {} ended", task_id);
}
