//! Feature Vector - Core data structure for classifier input

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::layout::{feature_index, FEATURE_COUNT};

/// Ordered classifier input, one value per `FEATURE_COLUMNS` entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Values in the order defined by FEATURE_COLUMNS
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values in layout order.
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Get values as slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get a value by column name.
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).map(|i| self.values[i])
    }

    /// Single-row 2-D matrix in the shape classifiers consume.
    pub fn to_matrix(&self) -> Array2<f32> {
        ndarray::arr2(&[self.values])
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
