use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::{
    config::RunConfig,
    error::{AppError, AppResult},
    http::{RequestExecutor, UserSimulator, build_client},
    metrics::{RunReport, StatsAggregator},
    shutdown::{ShutdownReceiver, shutdown_channel},
    shutdown_handlers::setup_signal_shutdown_handler,
};

use super::{export, progress, summary};

/// Runs every simulated user to completion and stamps the run's start and
/// end on `stats`. Stops spawning new users once `shutdown_rx` flips.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built. Per-request
/// failures are recorded in `stats` and never surface here.
pub(crate) async fn run_users(
    config: &Arc<RunConfig>,
    stats: &Arc<StatsAggregator>,
    shutdown_rx: &ShutdownReceiver,
) -> AppResult<()> {
    let client = build_client().map_err(AppError::http)?;
    let executor = Arc::new(RequestExecutor::new(client, Arc::clone(config)));
    let users = config.users.get();

    let started = stats.mark_started();
    info!(
        "Run started at {}: {} users x {} repetitions against {}",
        started, users, config.repetitions, config.url
    );

    let mut tasks = JoinSet::new();
    let mut spawned: u64 = 0;
    for user_id in 0..users {
        if *shutdown_rx.borrow() {
            debug!("Shutdown requested; stopped spawning after {} users.", spawned);
            break;
        }
        let user = UserSimulator::new(
            user_id,
            Arc::clone(&executor),
            Arc::clone(stats),
            config.repetitions,
            shutdown_rx.clone(),
        );
        tasks.spawn(user.run());
        spawned = spawned.saturating_add(1);

        while let Some(joined) = tasks.try_join_next() {
            log_join_result(joined);
        }
        tokio::task::yield_now().await;
    }

    while let Some(joined) = tasks.join_next().await {
        log_join_result(joined);
    }

    let ended = stats.mark_ended();
    info!(
        "Run finished at {}: {} users, {} requests",
        ended,
        spawned,
        stats.total_requests()
    );
    Ok(())
}

fn log_join_result(joined: Result<u64, tokio::task::JoinError>) {
    match joined {
        Ok(completed) => debug!("User finished after {} requests.", completed),
        Err(err) => error!("User task failed: {}", err),
    }
}

/// Executes one full run: banner, users, report, optional JSON export.
///
/// # Errors
///
/// Returns an error when the client cannot be built or the JSON export
/// cannot be written. The report is printed before an export failure is
/// returned.
pub(crate) async fn run_local(config: RunConfig, export_json: Option<&str>) -> AppResult<RunReport> {
    let config = Arc::new(config);
    let stats = Arc::new(StatsAggregator::new());

    println!(
        " # Spinning up {} users with {} requests per user for a total of {} request against {}",
        config.users,
        config.repetitions,
        config.total_requests(),
        config.url
    );
    println!();

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let (done_tx, done_rx) = shutdown_channel();
    let progress_handle = if progress::should_show(&config) {
        Some(progress::setup_progress_indicator(
            Arc::clone(&stats),
            config.total_requests(),
            done_rx,
        ))
    } else {
        drop(done_rx);
        None
    };

    let run_result = run_users(&config, &stats, &shutdown_rx).await;

    drop(done_tx.send(true));
    if let Some(handle) = progress_handle
        && let Err(err) = handle.await
    {
        error!("Progress task failed: {}", err);
    }
    signal_handle.abort();
    run_result?;

    if config.verbose {
        println!();
    }

    let report = RunReport::from_stats(&stats.snapshot());
    summary::print_summary(&report);

    if let Some(path) = export_json {
        export::export_json(path, &report).await?;
        info!("Report written to {}", path);
    }

    Ok(report)
}
