//! Running success/failure counters.

use crate::transport::Outcome;

/// Success and failure counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub success: u64,
    pub failed: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.success + self.failed
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Success: {} | Failed: {}", self.success, self.failed)
    }
}
