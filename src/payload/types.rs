//! Event and body types.

use serde::Serialize;
use uuid::Uuid;

/// Wire encoding used for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `application/json` body carrying the tenant inline.
    Json,
    /// `text/plain` body, tenant in the `X-Tenant-ID` header.
    Plain,
}

impl Encoding {
    /// Tag printed in console report lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Encoding::Json => "JSON",
            Encoding::Plain => "PLAIN",
        }
    }

    /// Label used for metrics and structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Plain => "plain",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Encoding::Json => "application/json",
            Encoding::Plain => "text/plain",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One simulated log line, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub tenant_id: String,
    pub log_id: String,
    pub text: String,
    pub encoding: Encoding,
}

impl LogEvent {
    pub fn new(tenant_id: impl Into<String>, text: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            log_id: new_log_id(),
            text: text.into(),
            encoding,
        }
    }

    /// Body serialized for the JSON encoding.
    pub fn json_body(&self) -> JsonLog<'_> {
        JsonLog {
            tenant_id: &self.tenant_id,
            log_id: &self.log_id,
            text: &self.text,
        }
    }
}

/// JSON request body: `{tenant_id, log_id, text}`.
#[derive(Debug, Serialize)]
pub struct JsonLog<'a> {
    pub tenant_id: &'a str,
    pub log_id: &'a str,
    pub text: &'a str,
}

/// Generate a unique log identifier (`log-<uuid v4>`).
pub fn new_log_id() -> String {
    format!("log-{}", Uuid::new_v4())
}
