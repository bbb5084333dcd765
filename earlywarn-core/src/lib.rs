//! Early Warning Core - Risk Scoring Pipeline
//!
//! Turns one raw sensor/forecast reading into a risk assessment:
//! probability, severity bucket, most-likely hazard, and advice.
//!
//! ## Structure
//! - `reading`: Input sanitization (raw JSON -> `Reading`)
//! - `features`: Feature engineering (`Reading` -> classifier input)
//! - `model`: Classifier artifact, scaler, and the load-once provider
//! - `severity`: Probability -> severity bucket + display color
//! - `hazard`: Rule-based hazard discriminator
//! - `advisory`: (hazard, severity) -> recommendation string
//! - `engine`: Orchestrator composing all of the above
//!
//! ## Usage
//! ```ignore
//! use earlywarn_core::{LazyModelProvider, RiskEngine};
//!
//! let provider = LazyModelProvider::from_files("models/risk_classifier.onnx", "models/scaler.json");
//! let engine = RiskEngine::new(std::sync::Arc::new(provider));
//! let response = engine.evaluate(&payload); // always answers, ok:true or ok:false
//! ```

pub mod advisory;
pub mod engine;
pub mod features;
pub mod hazard;
pub mod model;
pub mod reading;
pub mod severity;

// Re-export main types for convenience
pub use advisory::advise;
pub use engine::{PredictResponse, RiskEngine, ScoreError, ScoreResult};
pub use features::{engineer, EngineeredReading, FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};
pub use hazard::{classify, Hazard};
pub use model::{
    InferenceError, LazyModelProvider, ModelArtifact, ModelLoadError, ModelProvider,
    ProbabilityModel, StandardScaler,
};
pub use reading::Reading;
pub use severity::Severity;
