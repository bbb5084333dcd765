//! Reading - Sanitized evaluation request
//!
//! One reading per request. Every numeric field falls back to 0.0 when
//! missing or unparsable; `month` falls back to 1. Sanitization is total:
//! no input shape can make it fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sanitized sensor/forecast reading.
///
/// `month` is coerced to an integer but intentionally not range-checked;
/// out-of-range values flow into the cyclic encodings unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub lat: f32,
    pub lon: f32,
    pub month: i32,
    pub rainfall_mm: f32,
    pub seismic_richter: f32,
    pub river_level_m: f32,
    pub soil_moisture_pct: f32,
    pub sat_cloud_pct: f32,
    pub wind_speed_kmh: f32,
    pub temperature_c: f32,
    pub slope_deg: f32,
    pub vegetation_dryness: f32,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            lat: 0.0,
            lon: 0.0,
            month: 1,
            rainfall_mm: 0.0,
            seismic_richter: 0.0,
            river_level_m: 0.0,
            soil_moisture_pct: 0.0,
            sat_cloud_pct: 0.0,
            wind_speed_kmh: 0.0,
            temperature_c: 0.0,
            slope_deg: 0.0,
            vegetation_dryness: 0.0,
        }
    }
}

impl Reading {
    /// Build a reading from an arbitrary JSON payload.
    ///
    /// All keys are optional. Numbers pass through, numeric strings parse,
    /// booleans coerce to 1.0/0.0, everything else becomes the default.
    /// Idempotent: sanitizing a serialized `Reading` reproduces it.
    pub fn from_json(raw: &Value) -> Self {
        Self {
            lat: coerce_f32(raw.get("lat")),
            lon: coerce_f32(raw.get("lon")),
            month: coerce_month(raw.get("month")),
            rainfall_mm: coerce_f32(raw.get("rainfall_mm")),
            seismic_richter: coerce_f32(raw.get("seismic_richter")),
            river_level_m: coerce_f32(raw.get("river_level_m")),
            soil_moisture_pct: coerce_f32(raw.get("soil_moisture_pct")),
            sat_cloud_pct: coerce_f32(raw.get("sat_cloud_pct")),
            wind_speed_kmh: coerce_f32(raw.get("wind_speed_kmh")),
            temperature_c: coerce_f32(raw.get("temperature_c")),
            slope_deg: coerce_f32(raw.get("slope_deg")),
            vegetation_dryness: coerce_f32(raw.get("vegetation_dryness")),
        }
    }
}

/// Lenient float coercion: missing, null, empty or junk input becomes 0.0.
fn coerce_f32(value: Option<&Value>) -> f32 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0) as f32,
        Some(Value::String(s)) => s.trim().parse::<f32>().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Month coercion: integers pass through, fractional numbers truncate,
/// integer strings parse, anything else becomes 1.
fn coerce_month(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(|v| v as i32)
            .unwrap_or(1),
        Some(Value::String(s)) => s.trim().parse::<i32>().unwrap_or(1),
        Some(Value::Bool(b)) => i32::from(*b),
        _ => 1,
    }
}

// ============================================================================
// TESTS
// ============================================================================
