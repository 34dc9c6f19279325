//! Metrics collection and exposition.
//!
//! # Metrics
//! - `simulator_events_total` (counter): events by encoding and result
//! - `simulator_send_duration_seconds` (histogram): request latency by encoding

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::payload::Encoding;
use crate::transport::Outcome;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_event(encoding: Encoding, outcome: &Outcome, start: Instant) {
    metrics::counter!(
        "simulator_events_total",
        "encoding" => encoding.as_str(),
        "result" => outcome.label()
    )
    .increment(1);
    metrics::histogram!(
        "simulator_send_duration_seconds",
        "encoding" => encoding.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}
