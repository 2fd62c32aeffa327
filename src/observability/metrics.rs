//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by view and match kind
//! - `router_view_loads_total` (counter): loader invocations by view and outcome
//! - `router_view_cache_size` (gauge): number of loaded views
//! - `router_navigations_superseded_total` (counter): stale results discarded

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics recorder"),
    }
}

pub fn record_resolution(view: &str, matched_by: &'static str) {
    metrics::counter!(
        "router_resolutions_total",
        "view" => view.to_string(),
        "matched_by" => matched_by
    )
    .increment(1);
}

pub fn record_view_load(view: &str, outcome: &'static str) {
    metrics::counter!(
        "router_view_loads_total",
        "view" => view.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_cache_size(size: usize) {
    metrics::gauge!("router_view_cache_size").set(size as f64);
}

pub fn record_superseded() {
    metrics::counter!("router_navigations_superseded_total").increment(1);
}
