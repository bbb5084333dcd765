//! Model Artifact - Classifier with optional feature scaler
//!
//! The persisted artifact comes in exactly two shapes, handled
//! exhaustively: a bare classifier, or a classifier paired with the
//! standardization parameters it was trained behind.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// PROBABILITY MODEL TRAIT
// ============================================================================

/// Contract every classifier backend satisfies.
///
/// Rows of `features` carry exactly the columns of `FEATURE_COLUMNS`, in
/// that order. Returns the positive-class ("elevated risk") probability
/// per row.
pub trait ProbabilityModel: Send + Sync {
    fn predict_proba(&self, features: &Array2<f32>) -> Result<Vec<f32>, InferenceError>;
}

// ============================================================================
// STANDARD SCALER
// ============================================================================

/// Fitted standardization parameters, one mean/scale pair per column.
///
/// Deserialized from the JSON sidecar exported at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
    /// Column names captured at fit time, checked against FEATURE_COLUMNS.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl StandardScaler {
    /// Check the sidecar against the frozen input schema.
    pub fn validate(&self) -> Result<(), String> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(format!(
                "Scaler shape mismatch: expected {} columns, got mean={} scale={}",
                FEATURE_COUNT,
                self.mean.len(),
                self.scale.len()
            ));
        }
        if let Some(columns) = &self.columns {
            let matches = columns.len() == FEATURE_COLUMNS.len()
                && columns
                    .iter()
                    .zip(FEATURE_COLUMNS)
                    .all(|(a, b)| a.as_str() == *b);
            if !matches {
                return Err(format!(
                    "Scaler column order mismatch: sidecar has {:?}",
                    columns
                ));
            }
        }
        Ok(())
    }

    /// Standardize: (x - mean) / scale per column, scale guarded against zero.
    pub fn transform(&self, features: &Array2<f32>) -> Array2<f32> {
        let mut scaled = features.clone();
        for (j, mut column) in scaled.columns_mut().into_iter().enumerate() {
            let mean = self.mean.get(j).copied().unwrap_or(0.0);
            let scale = self.scale.get(j).copied().unwrap_or(1.0).max(1e-8);
            column.mapv_inplace(|v| (v - mean) / scale);
        }
        scaled
    }
}

// ============================================================================
// MODEL ARTIFACT
// ============================================================================

/// The two persisted artifact shapes.
pub enum ModelArtifact {
    ClassifierOnly(Box<dyn ProbabilityModel>),
    ClassifierWithScaler(Box<dyn ProbabilityModel>, StandardScaler),
}

impl std::fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelArtifact::ClassifierOnly(_) => f.write_str("ClassifierOnly"),
            ModelArtifact::ClassifierWithScaler(..) => f.write_str("ClassifierWithScaler"),
        }
    }
}

impl ModelArtifact {
    /// Score one engineered vector.
    ///
    /// Scaling happens if and only if the artifact carries a scaler; the
    /// classifier then returns the positive-class probability of the row.
    pub fn score(&self, vector: &FeatureVector) -> Result<f32, InferenceError> {
        let features = vector.to_matrix();
        let probabilities = match self {
            ModelArtifact::ClassifierOnly(model) => model.predict_proba(&features)?,
            ModelArtifact::ClassifierWithScaler(model, scaler) => {
                model.predict_proba(&scaler.transform(&features))?
            }
        };
        probabilities
            .first()
            .copied()
            .ok_or_else(|| InferenceError("Classifier returned no probabilities".to_string()))
    }

    pub fn has_scaler(&self) -> bool {
        matches!(self, ModelArtifact::ClassifierWithScaler(..))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Fixed-probability stub.
    struct FixedModel(f32);

    impl ProbabilityModel for FixedModel {
        fn predict_proba(&self, features: &Array2<f32>) -> Result<Vec<f32>, InferenceError> {
            Ok(vec![self.0; features.nrows()])
        }
    }

    /// Records the matrix it was handed, so scaling can be asserted on.
    #[derive(Clone)]
    struct CapturingModel(Arc<Mutex<Option<Array2<f32>>>>);

    impl CapturingModel {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(None)))
        }
    }

    impl ProbabilityModel for CapturingModel {
        fn predict_proba(&self, features: &Array2<f32>) -> Result<Vec<f32>, InferenceError> {
            *self.0.lock() = Some(features.clone());
            Ok(vec![0.5; features.nrows()])
        }
    }

    struct FailingModel;

    impl ProbabilityModel for FailingModel {
        fn predict_proba(&self, _features: &Array2<f32>) -> Result<Vec<f32>, InferenceError> {
            Err(InferenceError("backend exploded".to_string()))
        }
    }

    fn unit_scaler() -> StandardScaler {
        StandardScaler {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
            columns: None,
        }
    }

    #[test]
    fn test_transform_standardizes_columns() {
        let mut scaler = unit_scaler();
        scaler.mean[0] = 10.0;
        scaler.scale[0] = 2.0;

        let input = FeatureVector::from_values([14.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .to_matrix();
        let scaled = scaler.transform(&input);

        assert_eq!(scaled[[0, 0]], 2.0); // (14 - 10) / 2
        assert_eq!(scaled[[0, 1]], 1.0); // untouched column
    }

    #[test]
    fn test_transform_guards_zero_scale() {
        let mut scaler = unit_scaler();
        scaler.scale[3] = 0.0;

        let input = FeatureVector::default().to_matrix();
        let scaled = scaler.transform(&input);
        assert!(scaled[[0, 3]].is_finite());
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
            columns: None,
        };
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_validate_column_names() {
        let mut scaler = unit_scaler();
        scaler.columns = Some(FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect());
        assert!(scaler.validate().is_ok());

        scaler.columns = Some(vec!["wrong".to_string(); FEATURE_COUNT]);
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_score_without_scaler_passes_raw_values() {
        let model = CapturingModel::new();
        let seen = model.clone();
        let artifact = ModelArtifact::ClassifierOnly(Box::new(model));

        let vector =
            FeatureVector::from_values([5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 6.0]);
        let probability = artifact.score(&vector).unwrap();

        assert_eq!(probability, 0.5);
        let captured = seen.0.lock().clone().unwrap();
        assert_eq!(captured[[0, 0]], 5.0);
        assert_eq!(captured[[0, 9]], 6.0);
    }

    #[test]
    fn test_score_with_scaler_standardizes_first() {
        let mut scaler = unit_scaler();
        scaler.mean[0] = 5.0;
        scaler.scale[0] = 5.0;

        let model = CapturingModel::new();
        let seen = model.clone();
        let artifact = ModelArtifact::ClassifierWithScaler(Box::new(model), scaler);

        let vector =
            FeatureVector::from_values([15.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        artifact.score(&vector).unwrap();

        let captured = seen.0.lock().clone().unwrap();
        assert_eq!(captured[[0, 0]], 2.0); // (15 - 5) / 5
    }

    #[test]
    fn test_score_returns_positive_class_probability() {
        let artifact = ModelArtifact::ClassifierOnly(Box::new(FixedModel(0.83)));
        let probability = artifact.score(&FeatureVector::default()).unwrap();
        assert_eq!(probability, 0.83);
    }

    #[test]
    fn test_score_propagates_inference_error() {
        let artifact = ModelArtifact::ClassifierOnly(Box::new(FailingModel));
        let err = artifact.score(&FeatureVector::default()).unwrap_err();
        assert!(err.to_string().contains("backend exploded"));
    }

    #[test]
    fn test_has_scaler() {
        assert!(!ModelArtifact::ClassifierOnly(Box::new(FixedModel(0.1))).has_scaler());
        assert!(
            ModelArtifact::ClassifierWithScaler(Box::new(FixedModel(0.1)), unit_scaler())
                .has_scaler()
        );
    }
}
