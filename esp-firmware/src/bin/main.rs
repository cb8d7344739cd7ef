// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

use core::cell::RefCell;

use aht20_driver::{AHT20, SENSOR_ADDRESS};
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::mutex::Mutex;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::rng::Rng;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use esp_core::{Indicator, NullFrameSink};
use esp_luftstation::config::{
    EXTRA_HEAP_SIZE, HTTP_PORT, I2C_FREQ_KHZ, OLED_ADDRESS, WEB_TASK_POOL_SIZE, WIFI_HEAP_SIZE,
};
use esp_luftstation::hal::{AdcGasSensor, ClimateSensor, GpioLed, I2cBusDevice, OledDisplay,
    SharedI2cBus};
use esp_luftstation::tasks::{
    connection_task, http_server_task, net_task, sampling_loop, wait_for_network,
};
use esp_luftstation::{AppContext, StationIndicator};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Startup ist eine strikte Sequenz: Display hochfahren, Klima-Sensor
/// proben, Indikator-Pins auf LOW, WiFi-Assoziation (begrenzt auf ~10 s),
/// HTTP-Server nur bei Erfolg. Danach läuft main() selbst als
/// Hauptschleife (Sampling + Display-Refresh) endlos weiter.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("=== esp-luftstation ===");

    // Geteilter I2C-Bus: OLED (0x3C) und AHT10 (0x38) am selben Peripheral
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQ_KHZ)),
    )
    .unwrap()
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);

    static I2C_BUS: static_cell::StaticCell<SharedI2cBus> = static_cell::StaticCell::new();
    let i2c_bus = &*I2C_BUS.init(BlockingMutex::new(RefCell::new(i2c)));

    // 1. Display hochfahren - der einzige explizit behandelte Fehlerfall:
    //    schlägt das Bring-up fehl, läuft die Station ohne Anzeige weiter
    let display = match OledDisplay::new(I2cDevice::new(i2c_bus)) {
        Ok(display) => {
            info!("OLED: Panel initialized at address 0x{:x}", OLED_ADDRESS);
            Some(display)
        }
        Err(_) => {
            error!("OLED: Init failed, continuing without visual output");
            None
        }
    };

    // 2. Klima-Sensor proben (einmalig; kein Re-Probe bei Fehlschlag)
    //    Der initialisierte Handle borrowed den Treiber, daher StaticCell
    static AHT10: static_cell::StaticCell<AHT20<I2cBusDevice>> = static_cell::StaticCell::new();
    let aht10 = AHT10.init(AHT20::new(I2cDevice::new(i2c_bus), SENSOR_ADDRESS));
    let climate = ClimateSensor::probe(aht10);

    // 3. Gas-Sensor (MQ135 am ADC1)
    let gas = AdcGasSensor::new(peripherals.ADC1, peripherals.GPIO2);

    // 4. Indikator-Pins als Ausgang konfigurieren, alle LEDs aus
    let mut indicator: StationIndicator = Indicator::new(
        GpioLed::new(peripherals.GPIO18),
        GpioLed::new(peripherals.GPIO19),
        GpioLed::new(peripherals.GPIO20),
    );
    if indicator.all_off().is_err() {
        warn!("LED: failed to clear outputs");
    }

    // Applikations-Kontext: einmal gebaut, als &'static an Loop und Handler
    static CONTEXT: static_cell::StaticCell<AppContext> = static_cell::StaticCell::new();
    let ctx = &*CONTEXT.init(AppContext {
        indicator: Mutex::new(indicator),
        gas: Mutex::new(gas),
        climate: Mutex::new(climate),
    });

    // 5. WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net
    // 6 Sockets: 4x HTTP-Listener + DHCP + Reserve
    static RESOURCES: static_cell::StaticCell<StackResources<6>> = static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // Spawn WiFi Tasks
    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();

    // 6. Begrenzte Assoziation (~20 x 500 ms): nur bei Erfolg wird der
    //    HTTP-Server überhaupt gestartet, danach gibt es keinen Retry
    if wait_for_network(stack).await {
        for task_id in 0..WEB_TASK_POOL_SIZE {
            spawner
                .spawn(http_server_task(task_id, stack, ctx))
                .unwrap();
        }
        info!("HTTP: API listening on port {}", HTTP_PORT);
    } else {
        warn!("WiFi: No connection, HTTP API stays offline for this run");
    }

    // 7. Hauptschleife: Sampling + Display-Refresh (läuft endlos)
    match display {
        Some(sink) => sampling_loop(ctx, sink).await,
        None => sampling_loop(ctx, NullFrameSink).await,
    }
}
