//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_headers_requests_total` (counter): requests by method and status
//! - `proxy_headers_request_duration_seconds` (histogram): latency
//! - `proxy_headers_translations_total` (counter): translation outcomes
//!   (`ok`, `missing_host`, `missing_for`, `missing_proto`,
//!   `invalid_client_cert`)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and start the scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics exporter"),
    }
}

/// Record one dispatched request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    counter!(
        "proxy_headers_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!("proxy_headers_request_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}

/// Record a translation outcome by kind.
pub fn record_translation(outcome: &'static str) {
    counter!("proxy_headers_translations_total", "outcome" => outcome).increment(1);
}
