use std::future::Future;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::shutdown::ShutdownSender;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Exit code for a run cut short by a second Ctrl+C, as a shell would report SIGINT.
const FORCED_EXIT_CODE: i32 = 130;

/// How the signal relay stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignalRelayEnd {
    /// Every receiver was dropped; the run is over.
    ReceiversGone,
    /// A second signal arrived while the run was still winding down.
    Forced,
}

/// Flips the shutdown flag on Ctrl+C (and SIGTERM on unix). Users finish the
/// request they are on and skip the rest; the report is still printed. A
/// second signal exits the process at once, so a stalled request cannot keep
/// it alive. The task ends on its own once every receiver is gone.
pub fn setup_signal_shutdown_handler(shutdown_tx: &ShutdownSender) -> JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        if relay_signals(&shutdown_tx, wait_for_signal).await == SignalRelayEnd::Forced {
            eprintln!("Second interrupt received; exiting without a report.");
            std::process::exit(FORCED_EXIT_CODE);
        }
    })
}

/// Sets the shutdown flag on the first signal from `next_signal` and reports
/// `Forced` on the second.
pub(crate) async fn relay_signals<F, Fut>(
    shutdown_tx: &ShutdownSender,
    mut next_signal: F,
) -> SignalRelayEnd
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    tokio::select! {
        () = shutdown_tx.closed() => return SignalRelayEnd::ReceiversGone,
        () = next_signal() => {
            warn!("Shutdown requested; waiting for in-flight requests. Press Ctrl+C again to exit now.");
            drop(shutdown_tx.send(true));
        }
    }

    tokio::select! {
        () = shutdown_tx.closed() => SignalRelayEnd::ReceiversGone,
        () = next_signal() => SignalRelayEnd::Forced,
    }
}

async fn wait_for_signal() {
    #[cfg(unix)]
    {
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                eprintln!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    eprintln!("Failed to register Ctrl+C handler: {}", err);
                    std::future::pending::<()>().await;
                }
            }
            () = async {
                if let Some(signal) = term_signal.as_mut() {
                    signal.recv().await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => {}
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to register Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
