//! Metrics collection for the demo.
//!
//! Uses the `metrics` crate for instrumentation and renders the
//! Prometheus text format at the end of a run.

use anyhow::{Context, Result};
use dockwire_core::RouterStats;
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Metric names.
pub mod names {
    pub const CLICKS_TOTAL: &str = "dockwire_clicks_total";
    pub const DELIVERIES_TOTAL: &str = "dockwire_deliveries_total";
    pub const CONNECTIONS: &str = "dockwire_connections";
    pub const ENTITIES: &str = "dockwire_entities";
}

/// Describe the demo metrics.
pub fn init_metrics() {
    metrics::describe_counter!(names::CLICKS_TOTAL, "Total number of simulated clicks");
    metrics::describe_counter!(
        names::DELIVERIES_TOTAL,
        "Total number of inbound handler invocations"
    );
    metrics::describe_gauge!(names::CONNECTIONS, "Connections created by the router");
    metrics::describe_gauge!(names::ENTITIES, "Entities registered with the router");

    info!("Metrics initialized");
}

/// Install a Prometheus recorder without an HTTP listener.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// Record a simulated click.
pub fn record_click(widget: &str) {
    counter!(names::CLICKS_TOTAL, "widget" => widget.to_string()).increment(1);
}

/// Record a delivery into a widget's inbound handler.
pub fn record_delivery(widget: &str) {
    counter!(names::DELIVERIES_TOTAL, "widget" => widget.to_string()).increment(1);
}

/// Publish router statistics.
pub fn record_router(stats: &RouterStats) {
    gauge!(names::CONNECTIONS).set(stats.connection_count as f64);
    gauge!(names::ENTITIES).set(stats.entity_count as f64);
}
