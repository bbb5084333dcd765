//! Weather lookup proxy
//!
//! Fetches current conditions from Open-Meteo so the front end never talks
//! to the upstream API directly.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::AppState;

const OPEN_METEO: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
}

/// GET /api/weather?lat=..&lon=..
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<Value> {
    match fetch_current(&state.http, &query).await {
        Ok(data) => Json(json!({ "ok": true, "data": data })),
        Err(e) => {
            tracing::warn!("Weather lookup failed: {}", e);
            Json(json!({ "ok": false, "error": e.to_string() }))
        }
    }
}

async fn fetch_current(
    client: &reqwest::Client,
    query: &WeatherQuery,
) -> Result<Value, reqwest::Error> {
    let response = client
        .get(OPEN_METEO)
        .query(&[
            ("latitude", query.lat.as_str()),
            ("longitude", query.lon.as_str()),
            (
                "current",
                "temperature_2m,precipitation,wind_speed_10m,cloud_cover",
            ),
            ("timezone", "auto"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: Value = response.json().await?;
    Ok(body.get("current").cloned().unwrap_or_else(|| json!({})))
}
