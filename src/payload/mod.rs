//! Synthetic log payloads.
//!
//! # Data Flow
//! ```text
//! EventGenerator (rng, tenants, templates)
//!     → message.rs (pick template, draw phone token, render)
//!     → types.rs (LogEvent tagged with an Encoding)
//!     → transport (JsonLog body or plaintext body + tenant header)
//! ```
//!
//! # Design Decisions
//! - Every event gets a fresh `log-<uuid>` identifier, even plaintext ones
//! - Randomness is injected so runs can be seeded

pub mod generator;
pub mod message;
pub mod types;

pub use generator::EventGenerator;
pub use message::{random_phone, render, DEFAULT_TEMPLATES, DEFAULT_TENANTS, PHONE_PLACEHOLDER};
pub use types::{Encoding, JsonLog, LogEvent};
