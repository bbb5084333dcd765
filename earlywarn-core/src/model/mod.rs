//! Model Module - Pretrained classifier artifact
//!
//! Wraps the already-fitted binary risk classifier (plus optional feature
//! scaler) behind a `score(vector) -> probability` contract. The artifact
//! is loaded from disk at most once per process and cached for its
//! lifetime; a failed load is retried by the next request.
//!
//! ## Structure
//! - `artifact`: `ModelArtifact` sum type, `StandardScaler`, `ProbabilityModel` trait
//! - `onnx`: ort-backed `ProbabilityModel` implementation
//! - `provider`: `ModelProvider` trait + guarded lazy singleton

pub mod artifact;
pub mod onnx;
pub mod provider;

// Re-export main types for convenience
pub use artifact::{InferenceError, ModelArtifact, ProbabilityModel, StandardScaler};
pub use onnx::OnnxClassifier;
pub use provider::{load_artifact, LazyModelProvider, ModelLoadError, ModelProvider};
