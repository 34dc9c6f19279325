//! The send/record/repeat loop.
//!
//! # Data Flow
//! ```text
//! for each of `count` events:
//!     EventGenerator::next_event
//!     → Transport::send (single attempt)
//!     → Outcome → report line + Tally + metrics
//!     → sleep(delay) unless this was the last event
//! ```
//!
//! # Design Decisions
//! - Strictly sequential; at most one request in flight
//! - Failures never stop the loop
//! - Report lines go to a caller-supplied writer so they can be captured

pub mod report;
pub mod tally;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::Rng;

use crate::observability::metrics;
use crate::payload::{EventGenerator, LogEvent};
use crate::transport::{Outcome, Transport};

pub use report::EventReport;
pub use tally::Tally;

/// Drives one run of synthetic traffic against a [`Transport`].
pub struct Simulator<T, R> {
    transport: T,
    generator: EventGenerator<R>,
}

impl<T: Transport, R: Rng> Simulator<T, R> {
    pub fn new(transport: T, generator: EventGenerator<R>) -> Self {
        Self {
            transport,
            generator,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generate and send a single event.
    pub async fn send_one(&mut self) -> (LogEvent, Outcome) {
        let event = self.generator.next_event();
        let start = Instant::now();
        let outcome = Outcome::from(self.transport.send(&event).await);
        metrics::record_event(event.encoding, &outcome, start);

        match &outcome {
            Outcome::Transport(e) => tracing::warn!(
                tenant = %event.tenant_id,
                encoding = event.encoding.as_str(),
                log_id = %event.log_id,
                error = %e,
                "Send failed"
            ),
            _ => tracing::debug!(
                tenant = %event.tenant_id,
                encoding = event.encoding.as_str(),
                log_id = %event.log_id,
                status = outcome.status(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Event sent"
            ),
        }

        (event, outcome)
    }

    /// Send `count` events, pausing `delay` between consecutive sends.
    ///
    /// Writes one report line per event to `out` and returns the tally.
    /// Only errors writing to `out` abort the run.
    pub async fn simulate<W: Write>(
        &mut self,
        count: u64,
        delay: Duration,
        out: &mut W,
    ) -> io::Result<Tally> {
        let mut tally = Tally::default();

        for i in 0..count {
            let (event, outcome) = self.send_one().await;
            writeln!(
                out,
                "{}",
                EventReport {
                    event: &event,
                    outcome: &outcome,
                }
            )?;
            tally.record(&outcome);

            if i + 1 < count && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        tracing::info!(
            success = tally.success,
            failed = tally.failed,
            "Simulation finished"
        );
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrafficConfig;
    use crate::payload::Encoding;
    use crate::transport::{IngestResponse, TransportError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    /// Answers every request with a fixed status.
    struct FixedStatus(u16);

    impl Transport for FixedStatus {
        async fn send(&self, _event: &LogEvent) -> Result<IngestResponse, TransportError> {
            Ok(IngestResponse::new(self.0, "stub body"))
        }
    }

    struct Unreachable;

    impl Transport for Unreachable {
        async fn send(&self, _event: &LogEvent) -> Result<IngestResponse, TransportError> {
            Err(TransportError::Connect("connection refused".into()))
        }
    }

    #[derive(Default)]
    struct Recording {
        events: Mutex<Vec<LogEvent>>,
    }

    impl Transport for Recording {
        async fn send(&self, event: &LogEvent) -> Result<IngestResponse, TransportError> {
            self.events.lock().unwrap().push(event.clone());
            Ok(IngestResponse::new(202, ""))
        }
    }

    fn simulator<T: Transport>(transport: T, seed: u64) -> Simulator<T, StdRng> {
        let generator = EventGenerator::new(&TrafficConfig::default(), StdRng::seed_from_u64(seed));
        Simulator::new(transport, generator)
    }

    async fn run<T: Transport>(sim: &mut Simulator<T, StdRng>, count: u64) -> (Tally, String) {
        let mut out = Vec::new();
        let tally = sim.simulate(count, Duration::ZERO, &mut out).await.unwrap();
        (tally, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_always_succeeding_transport() {
        for count in [0, 1, 7, 50] {
            let mut sim = simulator(FixedStatus(200), count);
            let (tally, output) = run(&mut sim, count).await;
            assert_eq!(tally, Tally { success: count, failed: 0 });
            assert_eq!(output.lines().count() as u64, count);
            assert!(output.lines().all(|l| l.ends_with("-> 200 | OK")));
        }
    }

    #[tokio::test]
    async fn test_always_failing_transport() {
        for count in [0, 1, 7, 50] {
            let mut sim = simulator(Unreachable, count);
            let (tally, output) = run(&mut sim, count).await;
            assert_eq!(tally, Tally { success: 0, failed: count });
            assert!(output
                .lines()
                .all(|l| l.ends_with("-> ERROR: connection failed: connection refused")));
        }
    }

    #[tokio::test]
    async fn test_server_errors_count_as_failures() {
        let mut sim = simulator(FixedStatus(500), 3);
        let (tally, output) = run(&mut sim, 3).await;
        assert_eq!(tally.to_string(), "Success: 0 | Failed: 3");
        assert!(output.lines().all(|l| l.ends_with("-> 500 | stub body")));
    }

    #[tokio::test]
    async fn test_redirect_printed_ok_but_failed() {
        let mut sim = simulator(FixedStatus(302), 1);
        let (tally, output) = run(&mut sim, 1).await;
        assert_eq!(tally, Tally { success: 0, failed: 1 });
        assert!(output.trim_end().ends_with("-> 302 | OK"));
    }

    #[tokio::test]
    async fn test_events_cover_tenants_and_encodings() {
        let mut sim = simulator(Recording::default(), 11);
        let (tally, _) = run(&mut sim, 600).await;
        assert_eq!(tally.success, 600);

        let events = sim.transport().events.lock().unwrap();
        assert_eq!(events.len(), 600);

        for tenant in ["tenant-1", "tenant-2", "tenant-3"] {
            let n = events.iter().filter(|e| e.tenant_id == tenant).count();
            assert!((140..=260).contains(&n), "{} sent {} times", tenant, n);
        }
        let json = events.iter().filter(|e| e.encoding == Encoding::Json).count();
        assert!((240..=360).contains(&json), "json sent {} times", json);

        let mut ids: Vec<&str> = events.iter().map(|e| e.log_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 600);
    }

    #[tokio::test]
    async fn test_report_lines_match_events() {
        let mut sim = simulator(Recording::default(), 12);
        let (_, output) = run(&mut sim, 20).await;
        let events = sim.transport().events.lock().unwrap();

        for (line, event) in output.lines().zip(events.iter()) {
            let expected = format!("[{}] {} -> 202 | OK", event.encoding.tag(), event.tenant_id);
            assert_eq!(line, expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_after_last_event() {
        let mut sim = simulator(FixedStatus(200), 13);
        let mut out = Vec::new();

        let start = tokio::time::Instant::now();
        sim.simulate(3, Duration::from_secs(1), &mut out).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_millis(2_500));

        let start = tokio::time::Instant::now();
        sim.simulate(1, Duration::from_secs(1), &mut out).await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
