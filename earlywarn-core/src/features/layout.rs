//! Feature Layout - Centralized column definition
//!
//! **CRITICAL: this file controls the classifier input schema.**
//!
//! The column order below is part of the trained model's contract.
//! Reordering, adding, or removing a column silently corrupts predictions
//! unless the model is retrained against the new layout.

/// Column names in the exact order the classifier expects.
/// This is the SINGLE SOURCE OF TRUTH for the input schema.
pub const FEATURE_COLUMNS: &[&str] = &[
    "rainfall_mm",        // 0: Monthly rainfall total
    "seismic_richter",    // 1: Strongest recent seismic magnitude
    "river_level_m",      // 2: River gauge level
    "soil_moisture_pct",  // 3: Soil moisture percent
    "sat_cloud_pct",      // 4: Satellite cloud cover percent
    "wind_speed_kmh",     // 5: Sustained wind speed
    "temperature_c",      // 6: Air temperature
    "slope_deg",          // 7: Terrain slope
    "vegetation_dryness", // 8: Vegetation dryness index
    "month",              // 9: Calendar month (raw, not cyclic)
];

/// Total number of classifier input columns.
/// IMPORTANT: must match FEATURE_COLUMNS.len()!
pub const FEATURE_COUNT: usize = 10;

/// Get column index by name (O(n) but columns are few).
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|&n| n == name)
}

/// Get column name by index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_COLUMNS.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 10);
        assert_eq!(FEATURE_COLUMNS.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("rainfall_mm"), Some(0));
        assert_eq!(feature_index("temperature_c"), Some(6));
        assert_eq!(feature_index("month"), Some(9));
        assert_eq!(feature_index("sin_month"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("rainfall_mm"));
        assert_eq!(feature_name(9), Some("month"));
        assert_eq!(feature_name(10), None);
    }
}
