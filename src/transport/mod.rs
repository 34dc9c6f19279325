//! Delivery of events to the ingest endpoint.
//!
//! # Data Flow
//! ```text
//! LogEvent
//!     → Transport::send (http.rs: one POST, bounded by a timeout)
//!     → Result<IngestResponse, TransportError>
//!     → Outcome (Delivered / NotDelivered / ClientError / ServerError / Transport)
//! ```
//!
//! # Design Decisions
//! - No retries: every event is attempted exactly once
//! - HTTP error statuses are outcomes, not errors
//! - `Transport` is the seam tests stub out

pub mod http;

use std::future::Future;

use thiserror::Error;

use crate::payload::LogEvent;

pub use http::HttpTransport;

/// Something that can deliver one event and report what came back.
pub trait Transport {
    fn send(&self, event: &LogEvent) -> impl Future<Output = Result<IngestResponse, TransportError>>;
}

/// Response received from the ingest endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestResponse {
    pub status: u16,
    /// Response text. Only read for error statuses (>= 400).
    pub body: String,
}

impl IngestResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Classified result of one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx.
    Delivered { status: u16 },
    /// 1xx or 3xx: reported as OK but not counted as delivered.
    NotDelivered { status: u16 },
    /// 4xx.
    ClientError { status: u16, body: String },
    /// 5xx and anything above.
    ServerError { status: u16, body: String },
    Transport(TransportError),
}

impl Outcome {
    pub fn from_response(response: IngestResponse) -> Self {
        let IngestResponse { status, body } = response;
        match status {
            200..=299 => Outcome::Delivered { status },
            400..=499 => Outcome::ClientError { status, body },
            500.. => Outcome::ServerError { status, body },
            _ => Outcome::NotDelivered { status },
        }
    }

    /// Counted as a success iff the status is in [200, 300).
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Delivered { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Delivered { status }
            | Outcome::NotDelivered { status }
            | Outcome::ClientError { status, .. }
            | Outcome::ServerError { status, .. } => Some(*status),
            Outcome::Transport(_) => None,
        }
    }

    /// Metrics label.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Delivered { .. } => "delivered",
            Outcome::NotDelivered { .. } => "not_delivered",
            Outcome::ClientError { .. } => "client_error",
            Outcome::ServerError { .. } => "server_error",
            Outcome::Transport(_) => "transport_error",
        }
    }
}

impl From<Result<IngestResponse, TransportError>> for Outcome {
    fn from(result: Result<IngestResponse, TransportError>) -> Self {
        match result {
            Ok(response) => Outcome::from_response(response),
            Err(e) => Outcome::Transport(e),
        }
    }
}
