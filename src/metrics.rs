// src/metrics.rs
use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::policy::AlertPolicy;

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("synthesis_runs_total", "Synthesis passes executed.");
        describe_counter!("synthesis_samples_total", "Forecast samples scanned.");
        describe_counter!("synthesis_alerts_total", "Alerts emitted across runs.");
        describe_gauge!(
            "synthesis_heat_threshold_c",
            "Active extreme-heat threshold in Celsius."
        );
        describe_gauge!(
            "synthesis_freeze_threshold_c",
            "Active freezing threshold in Celsius."
        );
    });
}

/// Telemetry for one synthesis pass.
pub fn record_run(samples_in: usize, alerts_out: usize) {
    ensure_metrics_described();
    counter!("synthesis_runs_total").increment(1);
    counter!("synthesis_samples_total").increment(samples_in as u64);
    counter!("synthesis_alerts_total").increment(alerts_out as u64);
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder and expose the active thresholds
    /// as static gauges.
    pub fn init(policy: &AlertPolicy) -> Self {
        // Use default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        ensure_metrics_described();
        gauge!("synthesis_heat_threshold_c").set(policy.heat_threshold_c);
        gauge!("synthesis_freeze_threshold_c").set(policy.freeze_threshold_c);

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
