//! Prediction handler

use axum::extract::State;
use axum::Json;
use earlywarn_core::PredictResponse;
use serde_json::Value;

use crate::AppState;

/// POST /api/predict
///
/// Body is an arbitrary JSON payload; the engine sanitizes every field
/// itself. Always answers 200: failures ride the ok:false envelope, the
/// transport never turns them into 5xx.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<PredictResponse> {
    Json(state.engine.evaluate(&payload))
}
