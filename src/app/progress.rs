use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::config::RunConfig;
use crate::metrics::StatsAggregator;
use crate::shutdown::ShutdownReceiver;

const BAR_WIDTH: u128 = 30;

/// Verbose output would tear the line apart, and an unbounded run has no
/// meaningful percentage.
pub(crate) fn should_show(config: &RunConfig) -> bool {
    !config.verbose
        && !config.users.is_unbounded()
        && !config.repetitions.is_unbounded()
        && std::io::stderr().is_terminal()
}

/// Redraws a one-line progress bar on stderr until `done_rx` flips.
pub(crate) fn setup_progress_indicator(
    stats: Arc<StatsAggregator>,
    total: u128,
    mut done_rx: ShutdownReceiver,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(250));
        loop {
            tokio::select! {
                changed = done_rx.changed() => {
                    let current = u128::from(stats.total_requests());
                    if changed.is_ok() && render_progress_line(current, total).is_err() {
                        break;
                    }
                    drop(finish_progress_line());
                    break;
                }
                _ = ticker.tick() => {
                    let current = u128::from(stats.total_requests());
                    if render_progress_line(current, total).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

fn render_progress_line(current: u128, total: u128) -> Result<(), std::io::Error> {
    let (bar, percent) = build_progress_line(current, total);
    let mut out = std::io::stderr();
    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(bar),
        SetForegroundColor(Color::Cyan),
        Print(percent),
        ResetColor,
        SetForegroundColor(Color::Yellow),
        Print(format!(" | {}/{} requests", current.min(total), total)),
        ResetColor
    )?;
    out.flush()
}

fn finish_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()
}

/// Bar and percentage text for `current` of `total` started requests.
pub(crate) fn build_progress_line(current: u128, total: u128) -> (String, String) {
    let current = current.min(total);
    let (filled, percent_x100) = if total == 0 {
        (BAR_WIDTH, 10_000)
    } else {
        (
            current
                .saturating_mul(BAR_WIDTH)
                .checked_div(total)
                .unwrap_or(0),
            current
                .saturating_mul(10_000)
                .checked_div(total)
                .unwrap_or(0),
        )
    };
    let empty = usize::try_from(BAR_WIDTH.saturating_sub(filled)).unwrap_or(0);
    let filled = usize::try_from(filled).unwrap_or(0);

    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(empty));
    let percent = format!(" {}.{:02}%", percent_x100 / 100, percent_x100 % 100);
    (bar, percent)
}
