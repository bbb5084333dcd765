//! Risk Engine - Scoring orchestrator
//!
//! The only entry point external callers use. Composes sanitization,
//! feature engineering, classifier inference, severity bucketing, hazard
//! discrimination, and advisory generation into one response. Every
//! failure is caught at this boundary and answered as a structured
//! `ok:false` result; nothing here takes the process down.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::advisory::advise;
use crate::features::engineer;
use crate::hazard::{classify, Hazard};
use crate::model::{InferenceError, ModelLoadError, ModelProvider};
use crate::reading::Reading;
use crate::severity::Severity;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Failures the scoring pipeline can surface. Input problems are not among
/// them: sanitization absorbs those into defaults before scoring starts.
#[derive(Debug)]
pub enum ScoreError {
    Load(ModelLoadError),
    Inference(InferenceError),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::Load(e) => write!(f, "{}", e),
            ScoreError::Inference(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Load(e) => Some(e),
            ScoreError::Inference(e) => Some(e),
        }
    }
}

impl From<ModelLoadError> for ScoreError {
    fn from(e: ModelLoadError) -> Self {
        ScoreError::Load(e)
    }
}

impl From<InferenceError> for ScoreError {
    fn from(e: InferenceError) -> Self {
        ScoreError::Inference(e)
    }
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Assembled risk assessment for one reading.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub probability: f32,
    pub severity: Severity,
    pub color: String,
    pub hazard: Hazard,
    pub advice: String,
}

/// The wire-shaped response envelope: success carries the assessment,
/// failure carries `ok:false` and a message. Exactly one of the two shapes
/// ever serializes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Success {
        ok: bool,
        probability: f32,
        severity: Severity,
        color: String,
        predicted_disaster: Hazard,
        advice: String,
    },
    Failure {
        ok: bool,
        error: String,
    },
}

impl PredictResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        PredictResponse::Failure {
            ok: false,
            error: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, PredictResponse::Success { .. })
    }
}

impl From<ScoreResult> for PredictResponse {
    fn from(result: ScoreResult) -> Self {
        PredictResponse::Success {
            ok: true,
            probability: result.probability,
            severity: result.severity,
            color: result.color,
            predicted_disaster: result.hazard,
            advice: result.advice,
        }
    }
}

// ============================================================================
// RISK ENGINE
// ============================================================================

/// Scoring orchestrator with an injected model provider.
pub struct RiskEngine {
    provider: Arc<dyn ModelProvider>,
}

impl RiskEngine {
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self { provider }
    }

    /// Score one sanitized reading.
    ///
    /// The hazard label comes from the raw reading, not the feature vector;
    /// it is an independent signal and may disagree with the probability.
    pub fn score(&self, reading: &Reading) -> Result<ScoreResult, ScoreError> {
        let engineered = engineer(reading);

        let artifact = self.provider.artifact()?;
        let probability = artifact.score(&engineered.vector)?;

        let severity = Severity::bucket(probability);
        let hazard = classify(reading);
        let advice = advise(hazard, severity);

        Ok(ScoreResult {
            probability,
            severity,
            color: severity.color().to_string(),
            hazard,
            advice,
        })
    }

    /// Evaluate an arbitrary JSON payload: sanitize, score, and fold any
    /// failure into the response envelope.
    pub fn evaluate(&self, raw: &Value) -> PredictResponse {
        let reading = Reading::from_json(raw);
        match self.score(&reading) {
            Ok(result) => PredictResponse::from(result),
            Err(e) => {
                log::warn!("Prediction failed: {}", e);
                PredictResponse::failure(e.to_string())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
