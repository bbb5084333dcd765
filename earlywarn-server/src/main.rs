//! Early Warning Backend Server
//!
//! Thin HTTP shell over the risk scoring pipeline in `earlywarn-core`.
//! Routes:
//! - `GET  /api/health`: liveness
//! - `POST /api/predict`: score one raw sensor reading
//! - `GET  /api/weather`: Open-Meteo current-conditions proxy
//! - everything else: static frontend assets

mod config;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use earlywarn_core::{LazyModelProvider, RiskEngine};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "earlywarn_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Disaster early warning backend starting...");
    tracing::info!("Model artifact: {}", config.model_path.display());

    // The model itself loads lazily on the first prediction; a missing
    // artifact fails requests, not startup.
    let provider = LazyModelProvider::from_files(
        config.model_path.clone(),
        config.scaler_path.clone(),
    );
    let engine = Arc::new(RiskEngine::new(Arc::new(provider)));

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let state = AppState {
        engine,
        http,
        config: config.clone(),
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RiskEngine>,
    pub http: reqwest::Client,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/health", get(handlers::health::check))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/weather", get(handlers::weather::lookup))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    /// State whose model artifact does not exist on disk.
    fn test_state() -> AppState {
        let missing = std::env::temp_dir().join("earlywarn-test-missing");
        let config = config::Config {
            port: 0,
            model_path: missing.join("model.onnx"),
            scaler_path: missing.join("scaler.json"),
            static_dir: missing.join("static"),
        };
        let provider = LazyModelProvider::from_files(
            config.model_path.clone(),
            config.scaler_path.clone(),
        );
        AppState {
            engine: Arc::new(RiskEngine::new(Arc::new(provider))),
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_answers_ok() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["ok"], json!(true));
    }

    #[tokio::test]
    async fn test_predict_missing_model_stays_200_with_envelope() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/predict")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"rainfall_mm": 150, "river_level_m": 1, "month": 6}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        // A broken artifact is a request-level failure, never a 5xx.
        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["ok"], json!(false));
        assert!(value["error"].as_str().unwrap().contains("Model not found"));
    }

    #[tokio::test]
    async fn test_predict_accepts_loose_payloads() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/predict")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"rainfall_mm": "", "month": "junk"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Junk fields sanitize to defaults; only the absent model fails it.
        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["ok"], json!(false));
    }
}
