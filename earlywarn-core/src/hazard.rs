//! Hazard Discriminator
//!
//! Deterministic rule chain over raw sanitized readings. Runs beside the
//! statistical score, never on top of it: the two signals can disagree and
//! that is intentional. The chain is evaluated top to bottom and the first
//! matching rule wins; order encodes priority, not severity.

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// Hazard categories a reading can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hazard {
    Flood,
    Earthquake,
    Landslide,
    Cyclone,
    Wildfire,
    Drought,
    Normal,
}

impl Hazard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hazard::Flood => "Flood",
            Hazard::Earthquake => "Earthquake",
            Hazard::Landslide => "Landslide",
            Hazard::Cyclone => "Cyclone",
            Hazard::Wildfire => "Wildfire",
            Hazard::Drought => "Drought",
            Hazard::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for Hazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Assign the most-likely hazard category. First match wins.
pub fn classify(reading: &Reading) -> Hazard {
    if reading.rainfall_mm > 120.0 || reading.river_level_m > 3.5 {
        Hazard::Flood
    } else if reading.seismic_richter >= 4.5 {
        Hazard::Earthquake
    } else if reading.soil_moisture_pct > 50.0 && reading.slope_deg > 30.0 {
        Hazard::Landslide
    } else if reading.wind_speed_kmh > 120.0 {
        Hazard::Cyclone
    } else if reading.temperature_c > 42.0 && reading.vegetation_dryness > 80.0 {
        Hazard::Wildfire
    } else if reading.soil_moisture_pct < 10.0 && reading.rainfall_mm < 10.0 {
        Hazard::Drought
    } else {
        Hazard::Normal
    }
}

// ============================================================================
// TESTS
// ============================================================================
