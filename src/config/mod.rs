//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults (compiled-in endpoint, tenant set, templates)
//!     → loader.rs (optional TOML file, parse & deserialize)
//!     → CLI overrides (count, delay, url, seed, timeout)
//!     → validation.rs (semantic checks)
//!     → SimulatorConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so running with no file matches the
//!   hardcoded behaviour
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::IngestConfig;
pub use schema::ObservabilityConfig;
pub use schema::SimulatorConfig;
pub use schema::TrafficConfig;
pub use validation::{validate_config, ValidationError};
