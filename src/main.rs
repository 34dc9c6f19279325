//! log-simulator: send mixed JSON and plaintext logs to an ingest endpoint.
//!
//! ```text
//! log-simulator [COUNT] [--delay SECS] [--url URL] [--config FILE] [--seed N]
//! ```

use std::io::Write;

use clap::Parser;

use log_simulator::cli::Cli;
use log_simulator::config::{read_config, validate_config, ConfigError, SimulatorConfig};
use log_simulator::observability::{logging, metrics};
use log_simulator::{build_simulator, SimulatorError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path).map_err(SimulatorError::from)?,
        None => SimulatorConfig::default(),
    };
    cli.apply_overrides(&mut config);
    validate_config(&config)
        .map_err(|errors| SimulatorError::from(ConfigError::Validation(errors)))?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        url = %config.ingest.url,
        count = config.traffic.count,
        delay_secs = config.traffic.delay_secs,
        timeout_ms = config.ingest.timeout_ms,
        seed = config.traffic.seed,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation guarantees the address parses.
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr).map_err(SimulatorError::from)?;
    }

    let mut simulator = build_simulator(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Sending {} logs to {}\n", config.traffic.count, config.ingest.url)?;

    let tally = simulator
        .simulate(config.traffic.count, config.traffic.delay(), &mut out)
        .await?;

    writeln!(out, "\n{}", tally)?;
    out.flush()?;
    Ok(())
}
