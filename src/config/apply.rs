use crate::args::{TesterArgs, parse_method};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Fills every option not given on the command line from the config file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(args: &mut TesterArgs, config: ConfigFile) -> AppResult<()> {
    if args.url.is_none() {
        args.url = config.url;
    }

    if args.method.is_none()
        && let Some(method) = config.method.as_deref()
    {
        let parsed = parse_method(method).map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "method",
                source: err,
            })
        })?;
        args.method = Some(parsed);
    }

    if args.users.is_none() {
        args.users = config.users;
    }

    if args.repetitions.is_none() {
        args.repetitions = config.reps;
    }

    if !args.verbose {
        args.verbose = config.verbose.unwrap_or(false);
    }

    if args.user_agent.is_none() {
        args.user_agent = config.user_agent;
    }

    if args.headers.is_none() {
        args.headers = config.headers;
    }

    if args.timeout_ms.is_none()
        && let Some(timeout) = config.timeout
    {
        if timeout == 0 {
            return Err(AppError::config(ConfigError::InvalidField {
                field: "timeout",
                source: ValidationError::TimeoutZero,
            }));
        }
        args.timeout_ms = Some(timeout);
    }

    if args.export_json.is_none() {
        args.export_json = config.export_json;
    }

    Ok(())
}
