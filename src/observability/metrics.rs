//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tagging_demo_runs_total` (counter): finished runs by `outcome`
//!   (`unfunded`, `submitted`, `submission_failed`, `error`)
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - The Prometheus exporter only runs in serve mode

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("tagging_demo_runs_total", "Demo runs by outcome");

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one finished run.
pub fn record_run(outcome: &'static str) {
    counter!("tagging_demo_runs_total", "outcome" => outcome).increment(1);
}
