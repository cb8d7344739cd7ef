// Sampling Loop - Sensor-Abtastung und Display-Refresh
use defmt::warn;
use embassy_time::{Duration, Instant, Timer};
use esp_core::{DisplayRefresh, FrameSink, SensorReading, render_frame};

use crate::AppContext;
use crate::config::{DISPLAY_REFRESH_INTERVAL_MS, LOOP_IDLE_DELAY_MS};

/// Eine frische Messung beider Sensoren
///
/// Wird pro Display-Tick und (über die Route-Handler) pro Request neu
/// ausgeführt; zwischen den Aufrufen wird nichts gecacht.
pub async fn sample_sensors(ctx: &'static AppContext) -> SensorReading {
    let gas_raw = ctx.gas.lock().await.read_raw();
    let (temperature_c, humidity_pct) = ctx.climate.lock().await.read();

    SensorReading {
        gas_raw,
        temperature_c,
        humidity_pct,
    }
}

/// Kooperative Hauptschleife der Station
///
/// Pro Iteration: Refresh-Drossel prüfen (mindestens 500 ms seit dem
/// letzten Redraw, dann Sensoren abtasten und den Frame komplett neu
/// zeichnen), danach ~1 ms yielden damit HTTP- und Netzwerk-Tasks
/// drankommen. Kein Terminal-Zustand: läuft bis Power-Loss oder Reset.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `D: FrameSink` ermöglicht:
/// - Real Hardware (OledDisplay) im Normalbetrieb
/// - NullFrameSink wenn die Panel-Initialisierung fehlschlug
/// - Recording-Mock in den Host-Tests (über render_frame)
pub async fn sampling_loop<D: FrameSink>(ctx: &'static AppContext, mut sink: D) -> ! {
    let mut refresh = DisplayRefresh::new(DISPLAY_REFRESH_INTERVAL_MS);

    loop {
        if refresh.poll(Instant::now().as_millis()) {
            let reading = sample_sensors(ctx).await;
            if render_frame(&mut sink, &reading).is_err() {
                warn!("OLED: frame update failed");
            }
        }

        // Async Delay: gibt die CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(LOOP_IDLE_DELAY_MS)).await;
    }
}
