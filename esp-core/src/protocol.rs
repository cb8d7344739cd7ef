//! JSON-Protokoll der HTTP-API
//!
//! Definiert die Response-Bodies der 8 Routen. Alle Antworten sind
//! HTTP 200 mit kleinem JSON-Body; Fehler-Status gibt es nicht.

use core::fmt::Write;

use heapless::String;
use serde::Serialize;

use crate::types::LedChannel;

/// Maximale Body-Größe (größter Body: /aht10 mit zwei f32-Feldern)
pub const BODY_CAPACITY: usize = 64;

/// Fertig serialisierter Response-Body
pub type Body = String<BODY_CAPACITY>;

/// Body für GET /mq135: genau ein Integer-Feld
#[derive(Serialize)]
struct GasResponse {
    mq135: u16,
}

/// Body für GET /aht10: genau zwei numerische Felder
#[derive(Serialize)]
struct ClimateResponse {
    temperature: f32,
    humidity: f32,
}

fn serialize<T: Serialize>(value: &T) -> Body {
    let mut buf = [0u8; BODY_CAPACITY];
    let mut body = Body::new();
    if let Ok(n) = serde_json_core::to_slice(value, &mut buf) {
        if let Ok(s) = core::str::from_utf8(&buf[..n]) {
            let _ = body.push_str(s);
        }
    }
    body
}

/// `{"mq135":<int>}`
pub fn gas_body(gas_raw: u16) -> Body {
    serialize(&GasResponse { mq135: gas_raw })
}

/// `{"temperature":<float>,"humidity":<float>}`
pub fn climate_body(temperature_c: f32, humidity_pct: f32) -> Body {
    serialize(&ClimateResponse {
        temperature: temperature_c,
        humidity: humidity_pct,
    })
}

/// `{"<kanal>":"on"}` bzw. `{"<kanal>":"off"}`
///
/// Der JSON-Key ist der Kanalname, daher hier per `write!` statt serde
/// (serde kann keine dynamischen Keys ohne Map-Allokation).
pub fn led_body(channel: LedChannel, on: bool) -> Body {
    let mut body = Body::new();
    let state = if on { "on" } else { "off" };
    let _ = write!(body, "{{\"{}\":\"{}\"}}", channel.as_str(), state);
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_body_single_int_field() {
        assert_eq!(gas_body(812).as_str(), "{\"mq135\":812}");
        assert_eq!(gas_body(0).as_str(), "{\"mq135\":0}");
    }

    #[test]
    fn test_climate_body_two_numeric_fields() {
        assert_eq!(
            climate_body(23.5, 40.25).as_str(),
            "{\"temperature\":23.5,\"humidity\":40.25}"
        );
    }

    #[test]
    fn test_led_body_all_channels() {
        assert_eq!(led_body(LedChannel::Red, true).as_str(), "{\"red\":\"on\"}");
        assert_eq!(
            led_body(LedChannel::Green, false).as_str(),
            "{\"green\":\"off\"}"
        );
        assert_eq!(
            led_body(LedChannel::Blue, true).as_str(),
            "{\"blue\":\"on\"}"
        );
    }
}
