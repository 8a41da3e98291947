//! Prometheus metrics for request tracking and monitoring.
//!
//! This module provides:
//! - Per-route request counters and latency histograms
//! - Per-route JSON decode failure counters
//! - Interaction counters by action

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::ads::Action;
use crate::error::Result;

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Decode failures counter metric name.
pub const METRIC_DECODE_FAILURES: &str = "http_decode_failures_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Interactions received counter metric name.
pub const METRIC_INTERACTIONS_RECEIVED: &str = "interactions_received_total";

/// Initialize all metric descriptions.
/// Call this once at startup, after a recorder is installed.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests by route");
    describe_counter!(
        METRIC_DECODE_FAILURES,
        "Total number of request bodies that failed JSON decoding"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP handler latency in milliseconds"
    );
    describe_counter!(
        METRIC_INTERACTIONS_RECEIVED,
        "Total number of interactions received by action"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Increment the request counter for a route.
pub fn inc_requests(route: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "route" => route).increment(1);
}

/// Increment the decode failure counter for a route.
pub fn inc_decode_failures(route: &'static str) {
    counter!(METRIC_DECODE_FAILURES, "route" => route).increment(1);
}

/// Increment the interaction counter. Unknown actions share one label.
pub fn inc_interactions(action: &Action) {
    let label = if action.is_known() { action.as_str() } else { "other" };
    counter!(METRIC_INTERACTIONS_RECEIVED, "action" => label.to_string()).increment(1);
}

/// RAII guard for timing a handler.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    route: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given route.
    pub fn new(route: &'static str) -> Self {
        Self {
            start: Instant::now(),
            route,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => self.route).record(self.elapsed_ms());
    }
}

/// Count a request on `route` and start timing it.
pub fn track_request(route: &'static str) -> LatencyTimer {
    inc_requests(route);
    LatencyTimer::new(route)
}
