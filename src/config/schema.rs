//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::payload::{DEFAULT_TEMPLATES, DEFAULT_TENANTS};

/// Endpoint exercised when nothing else is configured.
pub const DEFAULT_INGEST_URL: &str =
    "https://7d3oyl9wbe.execute-api.us-east-1.amazonaws.com/prod/ingest";

/// Root configuration for a simulator run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Target endpoint and request settings.
    pub ingest: IngestConfig,

    /// What to send and how often.
    pub traffic: TrafficConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Ingest endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IngestConfig {
    /// URL every event is POSTed to.
    pub url: String,

    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl IngestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INGEST_URL.to_string(),
            timeout_ms: 5_000,
        }
    }
}

/// Traffic shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Number of events to send.
    pub count: u64,

    /// Pause between consecutive sends, in seconds.
    pub delay_secs: f64,

    /// Probability that an event uses the JSON encoding.
    pub json_ratio: f64,

    /// Tenant identifiers to draw from.
    pub tenants: Vec<String>,

    /// Message templates, each with a `{phone}` placeholder.
    pub templates: Vec<String>,

    /// Seed for reproducible runs. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl TrafficConfig {
    /// Delay as a `Duration`. Callers must validate first; invalid values
    /// map to zero.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_secs).unwrap_or(Duration::ZERO)
    }
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            count: 10,
            delay_secs: 0.5,
            json_ratio: 0.5,
            tenants: DEFAULT_TENANTS.iter().map(|t| t.to_string()).collect(),
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            seed: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Expose a Prometheus scrape endpoint while running.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
