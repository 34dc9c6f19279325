//! Synthetic log traffic for exercising an HTTP ingest endpoint.
//!
//! Each event picks a tenant, a message template and an encoding (JSON or
//! plaintext), POSTs it once, and is tallied as a success (2xx) or failure.

pub mod cli;
pub mod config;
pub mod observability;
pub mod payload;
pub mod simulator;
pub mod transport;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

pub use config::SimulatorConfig;
pub use simulator::{Simulator, Tally};
pub use transport::HttpTransport;

/// Fatal errors: anything that stops a run before or outside the event loop.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Random source for a run: seeded when requested, entropy otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Build an HTTP-backed simulator from a validated configuration.
pub fn build_simulator(
    config: &SimulatorConfig,
) -> Result<Simulator<HttpTransport, StdRng>, SimulatorError> {
    let transport = HttpTransport::from_config(&config.ingest)?;
    let generator = payload::EventGenerator::new(&config.traffic, rng_for(config.traffic.seed));
    Ok(Simulator::new(transport, generator))
}
