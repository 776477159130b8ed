//! Run statistics: outcome classification, aggregation, and reporting.
mod aggregator;
mod format;
mod report;
mod types;


pub use aggregator::{RunStats, StatsAggregator};
pub use format::{format_bytes, format_duration, format_timestamp};
pub use report::{LatencySummary, RunReport};
pub use types::{RequestOutcome, StatusClass};
