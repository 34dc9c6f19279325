//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! simulator produces:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → terminal / log aggregation
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for the per-event report; logs go to stderr
//! - Metrics are cheap no-ops unless the exporter is installed

pub mod logging;
pub mod metrics;
