//! ONNX Classifier - ort-backed `ProbabilityModel`
//!
//! Loads the exported model once and serves inference from an in-process
//! session. The session sits behind a mutex: ort inference needs exclusive
//! access, and the surrounding artifact is shared across requests.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::artifact::{InferenceError, ProbabilityModel};
use super::provider::ModelLoadError;

pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_names: Vec<String>,
}

impl OnnxClassifier {
    /// Load an ONNX model from file.
    ///
    /// The model must be exported with a plain probability tensor output
    /// (two-class `[n, 2]` or positive-class `[n]`), not a map output.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        log::info!("Loading ONNX model from: {}", path.display());

        if !path.exists() {
            return Err(ModelLoadError(format!(
                "Model not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| ModelLoadError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelLoadError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelLoadError(format!("Failed to load model: {}", e)))?;

        let output_names = session.outputs.iter().map(|o| o.name.clone()).collect();

        log::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            output_names,
        })
    }
}

impl ProbabilityModel for OnnxClassifier {
    fn predict_proba(&self, features: &Array2<f32>) -> Result<Vec<f32>, InferenceError> {
        let rows = features.nrows();

        let input_tensor = Value::from_array(features.clone())
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        // Scan the declared outputs for the probability tensor. Exported
        // binary classifiers emit either a [n, 2] class-probability tensor
        // (positive class in column 1) or a bare [n] positive-class tensor;
        // label outputs are integer tensors and fail the f32 extraction.
        for name in &self.output_names {
            let Some(output) = outputs.get(name) else {
                continue;
            };
            let Ok(tensor) = output.try_extract_tensor::<f32>() else {
                continue;
            };
            let data = tensor.1;
            if data.len() == rows * 2 {
                return Ok((0..rows).map(|i| data[i * 2 + 1]).collect());
            }
            if data.len() == rows {
                return Ok(data.to_vec());
            }
        }

        Err(InferenceError(
            "No probability tensor among model outputs".to_string(),
        ))
    }
}
