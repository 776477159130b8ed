use std::time::Duration;

use reqwest::{Method, Url};

use crate::args::{DEFAULT_REPETITIONS, DEFAULT_USERS, HeaderList, RunCount, TesterArgs};
use crate::error::{AppError, AppResult, ValidationError};

/// Fully resolved settings for one run. Immutable once built.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: Url,
    pub method: Method,
    pub users: RunCount,
    pub repetitions: RunCount,
    pub verbose: bool,
    pub user_agent: Option<String>,
    pub headers: Option<HeaderList>,
    pub timeout: Option<Duration>,
}

impl RunConfig {
    /// Settings for `url` with every other option at its default.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            method: Method::GET,
            users: DEFAULT_USERS,
            repetitions: DEFAULT_REPETITIONS,
            verbose: false,
            user_agent: None,
            headers: None,
            timeout: None,
        }
    }

    /// Total number of requests the run will schedule. Wide enough for `-1` counts.
    #[must_use]
    pub fn total_requests(&self) -> u128 {
        u128::from(self.users.get()).saturating_mul(u128::from(self.repetitions.get()))
    }
}

/// Validates parsed arguments and resolves defaults.
///
/// # Errors
///
/// Returns an error when the URL is missing or cannot be parsed as an
/// http(s) URL.
pub fn resolve_run_config(args: &TesterArgs) -> AppResult<RunConfig> {
    let raw_url = args
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let url = Url::parse(raw_url).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: raw_url.to_owned(),
            source: err,
        })
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::validation(ValidationError::UnsupportedScheme {
            url: raw_url.to_owned(),
        }));
    }

    let mut config = RunConfig::new(url);
    if let Some(method) = args.method.clone() {
        config.method = method;
    }
    if let Some(users) = args.users {
        config.users = users;
    }
    if let Some(repetitions) = args.repetitions {
        config.repetitions = repetitions;
    }
    config.verbose = args.verbose;
    config.user_agent.clone_from(&args.user_agent);
    config.headers.clone_from(&args.headers);
    config.timeout = args.timeout_ms.map(Duration::from_millis);
    Ok(config)
}
