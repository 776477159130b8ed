use std::sync::Arc;

use tracing::debug;

use crate::args::RunCount;
use crate::metrics::StatsAggregator;
use crate::shutdown::ShutdownReceiver;

use super::executor::RequestExecutor;

/// One simulated client: runs its repetitions strictly one after another.
#[derive(Debug)]
pub struct UserSimulator {
    user_id: u64,
    executor: Arc<RequestExecutor>,
    stats: Arc<StatsAggregator>,
    repetitions: RunCount,
    shutdown_rx: ShutdownReceiver,
}

impl UserSimulator {
    #[must_use]
    pub const fn new(
        user_id: u64,
        executor: Arc<RequestExecutor>,
        stats: Arc<StatsAggregator>,
        repetitions: RunCount,
        shutdown_rx: ShutdownReceiver,
    ) -> Self {
        Self {
            user_id,
            executor,
            stats,
            repetitions,
            shutdown_rx,
        }
    }

    /// Returns how many requests this user completed.
    pub async fn run(self) -> u64 {
        let mut completed: u64 = 0;
        for _ in 0..self.repetitions.get() {
            if *self.shutdown_rx.borrow() {
                debug!(
                    "User {} stopping after {} requests on shutdown.",
                    self.user_id, completed
                );
                break;
            }
            self.stats.begin_request();
            let outcome = self.executor.execute().await;
            self.stats.record(&outcome);
            completed = completed.saturating_add(1);
        }
        completed
    }
}
