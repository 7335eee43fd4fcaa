//! Temperature in three scales

use serde::{Deserialize, Serialize};

/// Offset added to Celsius to obtain Kelvin.
///
/// 273 rather than 273.15: clients already depend on this value.
// TODO: move to 273.15 together with a versioned response once clients can opt in
pub const KELVIN_OFFSET: f64 = 273.0;

/// Current temperature, each scale rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    #[serde(rename = "temp_C")]
    pub celsius: f64,
    #[serde(rename = "temp_F")]
    pub fahrenheit: f64,
    #[serde(rename = "temp_K")]
    pub kelvin: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        let fahrenheit = celsius * 1.8 + 32.0;
        let kelvin = celsius + KELVIN_OFFSET;

        Self {
            celsius: round(celsius, 2),
            fahrenheit: round(fahrenheit, 2),
            kelvin: round(kelvin, 2),
        }
    }
}

/// Round `value` to `places` decimals, half away from zero.
///
/// Works on the shortest decimal representation of `value`, so `1.005`
/// rounds to `1.01` even though its binary value is slightly below it.
pub fn round(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Shift the decimal point textually: "1.005e2" parses to exactly 100.5.
    let shifted: f64 = match format!("{value}e{places}").parse() {
        Ok(v) => v,
        Err(_) => return value,
    };
    let rounded = shifted.round();

    format!("{rounded}e-{places}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.001,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn round_to_two_decimal_places() {
        assert_close(round(3.14159, 2), 3.14);
    }

    #[test]
    fn round_to_zero_decimal_places() {
        assert_close(round(3.6, 0), 4.0);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -3.0);
        assert_eq!(round(0.125, 2), 0.13);
        assert_eq!(round(1.005, 2), 1.01);
    }

    #[test]
    fn round_passes_through_non_finite() {
        assert!(round(f64::NAN, 2).is_nan());
        assert_eq!(round(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn conversion_from_25_celsius() {
        let t = Temperature::from_celsius(25.0);
        assert_eq!(t.celsius, 25.0);
        assert_eq!(t.fahrenheit, 77.0);
        assert_eq!(t.kelvin, 298.0);
    }

    #[test]
    fn conversion_uses_273_offset() {
        let t = Temperature::from_celsius(0.0);
        assert_eq!(t.kelvin, 273.0);
        assert_eq!(t.fahrenheit, 32.0);
    }

    #[test]
    fn conversion_rounds_every_scale() {
        let t = Temperature::from_celsius(21.456);
        assert_eq!(t.celsius, 21.46);
        assert_eq!(t.fahrenheit, 70.62);
        assert_eq!(t.kelvin, 294.46);
    }

    #[test]
    fn serialize_temperature() {
        let json = serde_json::to_value(Temperature::from_celsius(25.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"temp_C": 25.0, "temp_F": 77.0, "temp_K": 298.0})
        );
    }
}
