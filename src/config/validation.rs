//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, delay >= 0, ratio in [0, 1])
//! - Check that tenants fit in a header and templates carry a placeholder
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SimulatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before the first event is sent

use std::net::SocketAddr;

use reqwest::header::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::SimulatorConfig;
use crate::payload::PHONE_PLACEHOLDER;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("ingest.url '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("ingest.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("traffic.delay_secs must be a finite, non-negative number (got {0})")]
    InvalidDelay(f64),

    #[error("traffic.json_ratio must be within [0, 1] (got {0})")]
    InvalidJsonRatio(f64),

    #[error("traffic.tenants must not be empty")]
    NoTenants,

    #[error("tenant '{0}' is not a valid header value")]
    InvalidTenant(String),

    #[error("traffic.templates must not be empty")]
    NoTemplates,

    #[error("template '{0}' has no {{phone}} placeholder")]
    MissingPlaceholder(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SimulatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.ingest.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidUrl {
            url: config.ingest.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.ingest.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.ingest.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let traffic = &config.traffic;
    if !traffic.delay_secs.is_finite() || traffic.delay_secs < 0.0 {
        errors.push(ValidationError::InvalidDelay(traffic.delay_secs));
    }

    if !(0.0..=1.0).contains(&traffic.json_ratio) {
        errors.push(ValidationError::InvalidJsonRatio(traffic.json_ratio));
    }

    if traffic.tenants.is_empty() {
        errors.push(ValidationError::NoTenants);
    }
    for tenant in &traffic.tenants {
        if tenant.is_empty() || HeaderValue::from_str(tenant).is_err() {
            errors.push(ValidationError::InvalidTenant(tenant.clone()));
        }
    }

    if traffic.templates.is_empty() {
        errors.push(ValidationError::NoTemplates);
    }
    for template in &traffic.templates {
        if !template.contains(PHONE_PLACEHOLDER) {
            errors.push(ValidationError::MissingPlaceholder(template.clone()));
        }
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
