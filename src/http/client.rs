use std::time::Duration;

use reqwest::{Client, redirect};

use crate::error::HttpError;

/// Builds the client shared by every user of a run.
///
/// Redirects are not followed so 3xx responses are counted as such, and idle
/// connections are never kept, so each request opens its own connection.
/// System proxies are ignored; requests go straight to the target.
///
/// # Errors
///
/// Returns an error when the underlying TLS backend cannot be initialised.
pub fn build_client() -> Result<Client, HttpError> {
    let client = Client::builder()
        .redirect(redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .pool_idle_timeout(Some(Duration::from_secs(0)))
        .no_proxy()
        .build()
        .map_err(|err| HttpError::BuildClientFailed { source: err })?;
    tracing::debug!("HTTP client ready (redirects off, keep-alive off).");
    Ok(client)
}
