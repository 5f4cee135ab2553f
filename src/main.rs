//! Weather Alert Synthesizer binary entrypoint.
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.
//!
//! See `README.md` for quickstart.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use weather_alert_synthesizer::api::{self, AppState};
use weather_alert_synthesizer::metrics::Metrics;
use weather_alert_synthesizer::policy::AlertPolicy;
use weather_alert_synthesizer::synthesizer::Synthesizer;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    // This enables ALERT_POLICY_PATH / threshold overrides from .env
    // so policy.rs can pick them up.
    let _ = dotenvy::dotenv();
    init_tracing();

    let policy = AlertPolicy::load_default().context("loading alert policy")?;
    tracing::info!(
        heat_c = policy.heat_threshold_c,
        freeze_c = policy.freeze_threshold_c,
        "alert policy loaded"
    );

    let metrics = Metrics::init(&policy);
    let state = AppState::new(Synthesizer::with_policy(&policy));
    let router = api::create_router(state).merge(metrics.router());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router).await.context("serving")?;
    Ok(())
}
