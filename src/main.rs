mod app;
mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;
mod shutdown;
mod shutdown_handlers;

use std::process::ExitCode;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Exiting on error: {:?}", err);
            app::write_error(&err.user_message());
            ExitCode::FAILURE
        }
    }
}
