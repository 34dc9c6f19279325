//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::SimulatorConfig;

#[derive(Debug, Parser)]
#[command(name = "log-simulator")]
#[command(version, about = "Send synthetic JSON and plaintext logs to an ingest endpoint", long_about = None)]
pub struct Cli {
    /// Number of log events to send [default: 10]
    pub count: Option<u64>,

    /// Seconds to wait between consecutive sends [default: 0.5]
    #[arg(short, long)]
    pub delay: Option<f64>,

    /// Ingest endpoint URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible tenant/template/encoding choices
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Per-request timeout in milliseconds [default: 5000]
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    /// Apply explicitly given flags on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut SimulatorConfig) {
        if let Some(count) = self.count {
            config.traffic.count = count;
        }
        if let Some(delay) = self.delay {
            config.traffic.delay_secs = delay;
        }
        if let Some(url) = &self.url {
            config.ingest.url = url.clone();
        }
        if let Some(seed) = self.seed {
            config.traffic.seed = Some(seed);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.ingest.timeout_ms = timeout_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("log-simulator").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_keeps_defaults() {
        let cli = parse(&[]).unwrap();
        let mut config = SimulatorConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.traffic.count, 10);
        assert_eq!(config.traffic.delay_secs, 0.5);
        assert_eq!(config.traffic.seed, None);
    }

    #[test]
    fn test_positional_count() {
        let cli = parse(&["25"]).unwrap();
        assert_eq!(cli.count, Some(25));
    }

    #[test]
    fn test_malformed_count_is_rejected() {
        assert!(parse(&["ten"]).is_err());
        assert!(parse(&["-3"]).is_err());
        assert!(parse(&["2.5"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "3",
            "--delay",
            "0",
            "--url",
            "http://localhost:9000/ingest",
            "--seed",
            "17",
            "--timeout-ms",
            "100",
        ])
        .unwrap();

        let mut config = SimulatorConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.traffic.count, 3);
        assert_eq!(config.traffic.delay_secs, 0.0);
        assert_eq!(config.ingest.url, "http://localhost:9000/ingest");
        assert_eq!(config.traffic.seed, Some(17));
        assert_eq!(config.ingest.timeout_ms, 100);
    }
}
