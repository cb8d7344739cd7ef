//! Integration Tests für die JSON-Antworten der HTTP-API
//!
//! Diese Tests laufen auf dem Host (x86_64) und prüfen die exakte
//! Byte-Gestalt der Bodies

use esp_core::LedChannel;
use esp_core::protocol::{climate_body, gas_body, led_body};

// ============================================================================
// Tests: GET /mq135
// ============================================================================

#[test]
fn test_gas_body_shape() {
    assert_eq!(gas_body(812).as_str(), r#"{"mq135":812}"#);
}

#[test]
fn test_gas_body_bounds() {
    assert_eq!(gas_body(0).as_str(), r#"{"mq135":0}"#);
    assert_eq!(gas_body(4095).as_str(), r#"{"mq135":4095}"#);
}

// ============================================================================
// Tests: GET /aht10
// ============================================================================

#[test]
fn test_climate_body_shape() {
    assert_eq!(
        climate_body(23.5, 40.25).as_str(),
        r#"{"temperature":23.5,"humidity":40.25}"#
    );
}

#[test]
fn test_climate_body_negative_temperature() {
    assert_eq!(
        climate_body(-3.5, 80.0).as_str(),
        r#"{"temperature":-3.5,"humidity":80.0}"#
    );
}

// ============================================================================
// Tests: GET /{red,green,blue}/{on,off}
// ============================================================================

#[test]
fn test_led_body_all_channels() {
    assert_eq!(
        led_body(LedChannel::Red, true).as_str(),
        r#"{"red":"on"}"#
    );
    assert_eq!(
        led_body(LedChannel::Green, false).as_str(),
        r#"{"green":"off"}"#
    );
    assert_eq!(
        led_body(LedChannel::Blue, true).as_str(),
        r#"{"blue":"on"}"#
    );
}

#[test]
fn test_led_body_is_stateless() {
    // Der Body spiegelt den Request, nicht einen gelesenen Pin-Zustand
    assert_eq!(led_body(LedChannel::Red, true).as_str(), r#"{"red":"on"}"#);
    assert_eq!(led_body(LedChannel::Red, true).as_str(), r#"{"red":"on"}"#);
    assert_eq!(
        led_body(LedChannel::Red, false).as_str(),
        r#"{"red":"off"}"#
    );
}
