//! Feature Engineer - `Reading` -> classifier input
//!
//! Pure and total: sanitization already happened upstream, so nothing here
//! can fail.

use std::f32::consts::PI;

use crate::reading::Reading;

use super::layout::FEATURE_COUNT;
use super::vector::FeatureVector;

/// Engineered record: the classifier input plus auxiliary encodings.
///
/// `sin_month` / `cos_month` are computed for every reading but are NOT part
/// of the vector fed to the classifier. The input schema is frozen to what
/// the model was trained with; the cyclic encodings wait for a retrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineeredReading {
    pub vector: FeatureVector,
    pub sin_month: f32,
    pub cos_month: f32,
}

/// Derive the ordered feature vector and cyclic month encodings.
pub fn engineer(reading: &Reading) -> EngineeredReading {
    let values: [f32; FEATURE_COUNT] = [
        reading.rainfall_mm,
        reading.seismic_richter,
        reading.river_level_m,
        reading.soil_moisture_pct,
        reading.sat_cloud_pct,
        reading.wind_speed_kmh,
        reading.temperature_c,
        reading.slope_deg,
        reading.vegetation_dryness,
        reading.month as f32,
    ];

    let phase = 2.0 * PI * reading.month as f32 / 12.0;

    EngineeredReading {
        vector: FeatureVector::from_values(values),
        sin_month: phase.sin(),
        cos_month: phase.cos(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::FEATURE_COLUMNS;

    #[test]
    fn test_vector_follows_layout_order() {
        let reading = Reading {
            rainfall_mm: 1.0,
            seismic_richter: 2.0,
            river_level_m: 3.0,
            soil_moisture_pct: 4.0,
            sat_cloud_pct: 5.0,
            wind_speed_kmh: 6.0,
            temperature_c: 7.0,
            slope_deg: 8.0,
            vegetation_dryness: 9.0,
            month: 10,
            ..Default::default()
        };

        let engineered = engineer(&reading);
        assert_eq!(
            engineered.vector.as_slice(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(FEATURE_COLUMNS[0], "rainfall_mm");
        assert_eq!(FEATURE_COLUMNS[9], "month");
    }

    #[test]
    fn test_cyclic_encodings_excluded_from_vector() {
        let engineered = engineer(&Reading::default());
        // The vector carries exactly the ten schema columns; the cyclic
        // encodings live alongside, never inside.
        assert_eq!(engineered.vector.as_slice().len(), FEATURE_COUNT);
        assert_eq!(engineered.vector.get_by_name("month"), Some(1.0));
        assert_eq!(engineered.vector.get_by_name("sin_month"), None);
    }

    #[test]
    fn test_cyclic_encoding_values() {
        // month = 3 -> phase = pi/2
        let engineered = engineer(&Reading {
            month: 3,
            ..Default::default()
        });
        assert!((engineered.sin_month - 1.0).abs() < 1e-6);
        assert!(engineered.cos_month.abs() < 1e-6);

        // month = 12 -> full cycle
        let engineered = engineer(&Reading {
            month: 12,
            ..Default::default()
        });
        assert!(engineered.sin_month.abs() < 1e-5);
        assert!((engineered.cos_month - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_month_passes_through() {
        // month 13 is not validated; it lands in the vector and goes out of
        // phase in the encodings, matching the trained behavior.
        let engineered = engineer(&Reading {
            month: 13,
            ..Default::default()
        });
        assert_eq!(engineered.vector.get_by_name("month"), Some(13.0));
    }
}
