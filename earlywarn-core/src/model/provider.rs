//! Model Provider - Guarded load-once artifact cache
//!
//! Process-wide singleton semantics without ambient globals: the provider
//! owns the cache and is injected into the orchestrator, so tests swap in
//! a fake. Concurrent first calls perform exactly one disk load; a failed
//! load leaves the cache empty and the next caller retries.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::artifact::{ModelArtifact, StandardScaler};
use super::onnx::OnnxClassifier;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct ModelLoadError(pub String);

impl std::fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelLoadError: {}", self.0)
    }
}

impl std::error::Error for ModelLoadError {}

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Source of the cached model artifact.
pub trait ModelProvider: Send + Sync {
    fn artifact(&self) -> Result<Arc<ModelArtifact>, ModelLoadError>;
}

// ============================================================================
// LAZY PROVIDER
// ============================================================================

type Loader = dyn Fn() -> Result<ModelArtifact, ModelLoadError> + Send + Sync;

/// Lazy guarded singleton over an arbitrary loader.
///
/// The cell admits at most one initializer at a time; racing callers block
/// until it settles, then read the cache. Errors are not cached.
pub struct LazyModelProvider {
    loader: Box<Loader>,
    cell: OnceCell<Arc<ModelArtifact>>,
    load_attempts: AtomicU64,
}

impl LazyModelProvider {
    pub fn new(
        loader: impl Fn() -> Result<ModelArtifact, ModelLoadError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            loader: Box::new(loader),
            cell: OnceCell::new(),
            load_attempts: AtomicU64::new(0),
        }
    }

    /// Provider over the on-disk artifact pair: ONNX model plus optional
    /// scaler sidecar.
    pub fn from_files(model_path: impl Into<PathBuf>, scaler_path: impl Into<PathBuf>) -> Self {
        let model_path = model_path.into();
        let scaler_path = scaler_path.into();
        Self::new(move || load_artifact(&model_path, &scaler_path))
    }

    /// Disk loads attempted so far; cache hits do not count.
    pub fn load_attempts(&self) -> u64 {
        self.load_attempts.load(Ordering::Relaxed)
    }
}

impl ModelProvider for LazyModelProvider {
    fn artifact(&self) -> Result<Arc<ModelArtifact>, ModelLoadError> {
        self.cell
            .get_or_try_init(|| {
                self.load_attempts.fetch_add(1, Ordering::Relaxed);
                (self.loader)().map(Arc::new)
            })
            .map(Arc::clone)
    }
}

// ============================================================================
// DISK LOADING
// ============================================================================

/// Load the persisted artifact pair. A scaler sidecar next to the model
/// selects the scaler-equipped shape; its absence means the classifier was
/// trained on raw columns.
pub fn load_artifact(
    model_path: &Path,
    scaler_path: &Path,
) -> Result<ModelArtifact, ModelLoadError> {
    let classifier = OnnxClassifier::load(model_path)?;

    if !scaler_path.exists() {
        log::info!(
            "No scaler sidecar at {}; classifier input stays raw",
            scaler_path.display()
        );
        return Ok(ModelArtifact::ClassifierOnly(Box::new(classifier)));
    }

    let text = std::fs::read_to_string(scaler_path).map_err(|e| {
        ModelLoadError(format!(
            "Failed to read scaler {}: {}",
            scaler_path.display(),
            e
        ))
    })?;
    let scaler: StandardScaler = serde_json::from_str(&text).map_err(|e| {
        ModelLoadError(format!(
            "Malformed scaler {}: {}",
            scaler_path.display(),
            e
        ))
    })?;
    scaler.validate().map_err(ModelLoadError)?;

    log::info!("Scaler sidecar loaded from {}", scaler_path.display());

    Ok(ModelArtifact::ClassifierWithScaler(
        Box::new(classifier),
        scaler,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
