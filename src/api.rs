// src/api.rs
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tower_http::cors::CorsLayer;

use crate::alert::Alert;
use crate::briefing;
use crate::forecast::ForecastResponse;
use crate::history::RunHistory;
use crate::metrics;
use crate::scales::{wind_direction, AirQualityBand, UvBand};
use crate::synthesizer::Synthesizer;

#[derive(Clone)]
pub struct AppState {
    synthesizer: Arc<Synthesizer>,
    history: Arc<RunHistory>,
}

impl AppState {
    pub fn new(synthesizer: Synthesizer) -> Self {
        Self {
            synthesizer: Arc::new(synthesizer),
            history: Arc::new(RunHistory::with_capacity(2000)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/alerts", post(alerts))
        .route("/briefing", post(briefing_run))
        .route("/debug/history", get(debug_history))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// POST /alerts: provider forecast JSON in, advisory records out.
async fn alerts(
    State(state): State<AppState>,
    Json(body): Json<ForecastResponse>,
) -> Json<Vec<Alert>> {
    let samples = body.into_samples();
    let alerts = state.synthesizer.synthesize(&samples);

    metrics::record_run(samples.len(), alerts.len());
    state.history.record(samples.len(), &alerts);
    tracing::info!(
        samples = samples.len(),
        alerts = alerts.len(),
        "synthesis run"
    );

    Json(alerts)
}

#[derive(serde::Deserialize)]
struct BriefingReq {
    forecast: ForecastResponse,
    #[serde(default)]
    uv_index: Option<f64>,
    #[serde(default)]
    air_quality_index: Option<f64>,
}

#[derive(serde::Serialize)]
struct BriefingResp {
    alerts: Vec<Alert>,
    daily: Vec<DailyOut>,
    hourly: Vec<HourlyOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uv: Option<IndexOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    air_quality: Option<IndexOut>,
}

#[derive(serde::Serialize)]
struct DailyOut {
    dt: u64,
    temp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
}

#[derive(serde::Serialize)]
struct HourlyOut {
    dt: u64,
    temp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wind_direction: Option<&'static str>,
}

#[derive(serde::Serialize)]
struct IndexOut {
    value: f64,
    level: &'static str,
}

/// POST /briefing: alerts plus the daily outlook, the 24h strip, and index
/// levels for the optional raw UV / air-quality values.
async fn briefing_run(
    State(state): State<AppState>,
    Json(body): Json<BriefingReq>,
) -> Json<BriefingResp> {
    let samples = body.forecast.into_samples();
    let alerts = state.synthesizer.synthesize(&samples);

    metrics::record_run(samples.len(), alerts.len());
    state.history.record(samples.len(), &alerts);

    let daily = briefing::daily_digest(&samples)
        .into_iter()
        .map(|s| DailyOut {
            dt: s.timestamp,
            temp: s.temperature_c,
            condition: s.condition.clone(),
        })
        .collect();

    let hourly = briefing::next_24h(&samples, Utc::now())
        .iter()
        .map(|s| HourlyOut {
            dt: s.timestamp,
            temp: s.temperature_c,
            condition: s.condition.clone(),
            pop: s.precipitation_chance,
            wind_speed: s.wind_speed,
            wind_direction: s.wind_deg.map(wind_direction),
        })
        .collect();

    let uv = body.uv_index.map(|v| IndexOut {
        value: v,
        level: UvBand::from_index(v).label(),
    });
    let air_quality = body.air_quality_index.map(|v| IndexOut {
        value: v,
        level: AirQualityBand::from_index(v).label(),
    });

    tracing::info!(
        samples = samples.len(),
        alerts = alerts.len(),
        "briefing run"
    );

    Json(BriefingResp {
        alerts,
        daily,
        hourly,
        uv,
        air_quality,
    })
}

#[derive(serde::Serialize)]
struct HistoryOut {
    ts_unix: u64,
    samples_in: usize,
    alerts_out: usize,
    events: Vec<String>,
}

/// GET /debug/history?n=: the last n synthesis runs (default 10).
async fn debug_history(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Vec<HistoryOut>> {
    let n = q
        .get("n")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let rows = state.history.snapshot_last_n(n);
    let out = rows
        .into_iter()
        .map(|h| HistoryOut {
            ts_unix: h.ts_unix,
            samples_in: h.samples_in,
            alerts_out: h.alerts_out,
            events: h.events,
        })
        .collect::<Vec<_>>();
    Json(out)
}
