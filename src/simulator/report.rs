//! Console report lines, one per event.

use std::fmt;

use crate::payload::LogEvent;
use crate::transport::Outcome;

/// `[JSON] tenant-1 -> 200 | OK`, `[PLAIN] tenant-2 -> 500 | <body>` or
/// `[JSON] tenant-3 -> ERROR: <reason>`.
pub struct EventReport<'a> {
    pub event: &'a LogEvent,
    pub outcome: &'a Outcome,
}

impl fmt::Display for EventReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} -> ", self.event.encoding.tag(), self.event.tenant_id)?;
        match self.outcome {
            Outcome::Delivered { status } | Outcome::NotDelivered { status } => {
                write!(f, "{} | OK", status)
            }
            Outcome::ClientError { status, body } | Outcome::ServerError { status, body } => {
                write!(f, "{} | {}", status, body)
            }
            Outcome::Transport(e) => write!(f, "ERROR: {}", e),
        }
    }
}
