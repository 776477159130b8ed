use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Local};

use super::types::{RequestOutcome, StatusClass};

/// Everything a run accumulates.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub started: Option<DateTime<Local>>,
    pub ended: Option<DateTime<Local>>,
    pub duration: Option<Duration>,
    pub total_requests: u64,
    /// 2xx
    pub successful_requests: u64,
    /// 3xx
    pub further_action_responses: u64,
    /// 4xx
    pub user_errors: u64,
    /// 5xx
    pub server_errors: u64,
    pub exceptions: u64,
    pub response_times_ms: Vec<u64>,
    pub bytes_sent: i64,
    pub bytes_received: i64,
}

impl RunStats {
    /// Sum of all outcome buckets. Equals `total_requests` once every begun
    /// request has been recorded with a status inside 200..=599 or as an exception.
    #[must_use]
    pub const fn outcome_total(&self) -> u64 {
        self.successful_requests
            .saturating_add(self.further_action_responses)
            .saturating_add(self.user_errors)
            .saturating_add(self.server_errors)
            .saturating_add(self.exceptions)
    }

    fn count_status(&mut self, status: u16) {
        let counter = match StatusClass::from_status(status) {
            Some(StatusClass::Successful) => &mut self.successful_requests,
            Some(StatusClass::FurtherAction) => &mut self.further_action_responses,
            Some(StatusClass::UserError) => &mut self.user_errors,
            Some(StatusClass::ServerError) => &mut self.server_errors,
            None => {
                tracing::debug!("Status {} falls outside every bucket.", status);
                return;
            }
        };
        *counter = counter.saturating_add(1);
    }
}

/// Shared, lock-guarded accumulator for one run.
///
/// A single mutex covers the whole aggregate, so a counter increment, the
/// latency append, and the byte totals of one outcome land together.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    stats: Mutex<RunStats>,
}

impl StatsAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RunStats> {
        // Recording never leaves the aggregate half-updated, so a poisoned
        // lock still holds consistent data.
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mark_started(&self) -> DateTime<Local> {
        let now = Local::now();
        self.lock().started = Some(now);
        now
    }

    pub fn mark_ended(&self) -> DateTime<Local> {
        let now = Local::now();
        let mut stats = self.lock();
        stats.ended = Some(now);
        stats.duration = stats.started.map(|started| {
            now.signed_duration_since(started)
                .to_std()
                .unwrap_or(Duration::ZERO)
        });
        now
    }

    /// Counts a request before it is sent, so in-flight requests are already
    /// part of the total.
    pub fn begin_request(&self) {
        let mut stats = self.lock();
        stats.total_requests = stats.total_requests.saturating_add(1);
    }

    pub fn record(&self, outcome: &RequestOutcome) {
        let mut stats = self.lock();
        match outcome {
            RequestOutcome::Response {
                status,
                elapsed_ms,
                bytes_sent,
                bytes_received,
            } => {
                stats.count_status(*status);
                stats.response_times_ms.push(*elapsed_ms);
                stats.bytes_sent = stats.bytes_sent.saturating_add(*bytes_sent);
                stats.bytes_received = stats.bytes_received.saturating_add(*bytes_received);
            }
            RequestOutcome::StatusError { status } => stats.count_status(*status),
            RequestOutcome::Failed { .. } => {
                stats.exceptions = stats.exceptions.saturating_add(1);
            }
        }
    }

    #[must_use]
    pub fn total_requests(&self) -> u64 {
        self.lock().total_requests
    }

    #[must_use]
    pub fn snapshot(&self) -> RunStats {
        self.lock().clone()
    }
}
