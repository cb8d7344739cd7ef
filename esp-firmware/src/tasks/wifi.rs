// WiFi Task - Begrenzte Assoziation beim Start, kein Reconnect
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{WIFI_CONNECT_ATTEMPTS, WIFI_CONNECT_RETRY_MS, WIFI_PASSWORD, WIFI_SSID};

/// WiFi Connection Task
///
/// Versucht genau einmal beim Start die Assoziation mit dem Access Point,
/// begrenzt auf WIFI_CONNECT_ATTEMPTS Versuche. Gelingt sie nicht, endet
/// der Task - der HTTP-Server wird dann nie gestartet und es gibt keinen
/// periodischen Retry. Fällt der Link später weg, wird ebenfalls nicht
/// neu verbunden; Sampling und Display laufen davon unberührt weiter.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting association with '{}'", WIFI_SSID);

    // Configure WiFi station mode
    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(WIFI_SSID.into())
            .with_password(WIFI_PASSWORD.into()),
    );

    if let Err(e) = controller.set_config(&client_config) {
        error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
        return;
    }

    if let Err(e) = controller.start_async().await {
        error!("WiFi: Failed to start: {}", Debug2Format(&e));
        return;
    }

    let mut connected = false;
    for attempt in 1..=WIFI_CONNECT_ATTEMPTS {
        match controller.connect_async().await {
            Ok(()) => {
                info!("WiFi: Connected (attempt {})", attempt);
                connected = true;
                break;
            }
            Err(e) => {
                warn!(
                    "WiFi: Attempt {}/{} failed: {}",
                    attempt,
                    WIFI_CONNECT_ATTEMPTS,
                    Debug2Format(&e)
                );
                Timer::after(Duration::from_millis(WIFI_CONNECT_RETRY_MS)).await;
            }
        }
    }

    if !connected {
        error!(
            "WiFi: Association failed after {} attempts, giving up",
            WIFI_CONNECT_ATTEMPTS
        );
        return;
    }

    // Auf Disconnect warten, dann nichts weiter tun (kein Reconnect)
    controller
        .wait_for_event(WifiEvent::StaDisconnected)
        .await;
    warn!("WiFi: Link lost, no automatic reconnect");
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete und managed den TCP/IP Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// Wartet begrenzt auf Link und DHCP-Adresse (~20 x 500 ms = ~10 s)
///
/// Gibt `false` zurück wenn die Assoziation im Zeitfenster nicht gelingt;
/// der Aufrufer startet den HTTP-Server dann nicht.
pub async fn wait_for_network(stack: &'static Stack<'static>) -> bool {
    for _ in 0..WIFI_CONNECT_ATTEMPTS {
        if stack.is_link_up() {
            if let Some(config) = stack.config_v4() {
                info!("WiFi: Got IP address!");
                info!("  IP:      {}", Debug2Format(&config.address.address()));
                info!("  Gateway: {}", Debug2Format(&config.gateway));
                return true;
            }
        }
        Timer::after(Duration::from_millis(WIFI_CONNECT_RETRY_MS)).await;
    }
    false
}
