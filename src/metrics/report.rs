use std::time::Duration;

use chrono::{DateTime, Local};

use super::aggregator::RunStats;

/// Derived latency figures in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySummary {
    pub average_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
    pub p50_ms: u64,
    pub p90_ms: u64,
    pub p99_ms: u64,
}

impl LatencySummary {
    /// Returns `None` when no request produced a latency sample.
    #[must_use]
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let min_ms = *sorted.first()?;
        let max_ms = *sorted.last()?;
        let sum: u128 = sorted.iter().map(|value| u128::from(*value)).sum();
        let count = u128::try_from(sorted.len()).unwrap_or(u128::MAX);
        // Integer division truncates toward zero, matching a whole-ms average.
        let average_ms = u64::try_from(sum.checked_div(count).unwrap_or(0)).unwrap_or(u64::MAX);

        Some(Self {
            average_ms,
            min_ms,
            max_ms,
            p50_ms: percentile(&sorted, 50),
            p90_ms: percentile(&sorted, 90),
            p99_ms: percentile(&sorted, 99),
        })
    }
}

fn percentile(sorted: &[u64], percentile: u64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let count = u64::try_from(sorted.len().saturating_sub(1)).unwrap_or(u64::MAX);
    let index = percentile
        .saturating_mul(count)
        .saturating_add(50)
        .checked_div(100)
        .unwrap_or(0);
    let idx = usize::try_from(index).unwrap_or_else(|_err| sorted.len().saturating_sub(1));
    *sorted.get(idx).unwrap_or(&0)
}

/// Read-only view of a finished run, ready for printing or export.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started: Option<DateTime<Local>>,
    pub ended: Option<DateTime<Local>>,
    pub duration: Duration,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub further_action_responses: u64,
    pub user_errors: u64,
    pub server_errors: u64,
    pub exceptions: u64,
    pub latency: Option<LatencySummary>,
    pub bytes_sent: i64,
    pub bytes_received: i64,
}

impl RunReport {
    #[must_use]
    pub fn from_stats(stats: &RunStats) -> Self {
        Self {
            started: stats.started,
            ended: stats.ended,
            duration: stats.duration.unwrap_or(Duration::ZERO),
            total_requests: stats.total_requests,
            successful_requests: stats.successful_requests,
            further_action_responses: stats.further_action_responses,
            user_errors: stats.user_errors,
            server_errors: stats.server_errors,
            exceptions: stats.exceptions,
            latency: LatencySummary::from_samples(&stats.response_times_ms),
            bytes_sent: stats.bytes_sent,
            bytes_received: stats.bytes_received,
        }
    }
}
