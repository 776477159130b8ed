use std::error::Error as _;
use std::sync::Arc;

use reqwest::{
    Client, Request, StatusCode,
    header::{CONNECTION, CONTENT_LENGTH, HeaderMap, HeaderValue, USER_AGENT},
};
use tokio::time::Instant;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::HttpError;
use crate::metrics::RequestOutcome;

/// Rough size of a bare request line and the default headers.
const BASE_REQUEST_BYTES: i64 = 50;
/// Added when a per-request timeout is configured.
const TIMEOUT_BYTES: i64 = 12;
/// `User-Agent: ` plus line ending, before the value itself.
const USER_AGENT_BYTES: i64 = 12;
/// Separator and line ending of each custom header.
const HEADER_OVERHEAD_BYTES: i64 = 5;

/// Estimated bytes sent per request. This is an approximation of the header
/// block, not metered wire bytes.
#[must_use]
pub fn estimate_request_bytes(config: &RunConfig) -> i64 {
    let mut size = BASE_REQUEST_BYTES;
    if config.timeout.is_some() {
        size = size.saturating_add(TIMEOUT_BYTES);
    }
    if let Some(user_agent) = config.user_agent.as_deref() {
        size = size
            .saturating_add(USER_AGENT_BYTES)
            .saturating_add(len_i64(user_agent));
    }
    if let Some(headers) = config.headers.as_ref() {
        for (name, value) in headers {
            size = size
                .saturating_add(len_i64(name))
                .saturating_add(len_i64(value))
                .saturating_add(HEADER_OVERHEAD_BYTES);
        }
    }
    size
}

fn len_i64(value: &str) -> i64 {
    i64::try_from(value.len()).unwrap_or(i64::MAX)
}

/// Performs single requests against the configured target.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
    config: Arc<RunConfig>,
    bytes_sent: i64,
}

impl RequestExecutor {
    #[must_use]
    pub fn new(client: Client, config: Arc<RunConfig>) -> Self {
        let bytes_sent = estimate_request_bytes(&config);
        Self {
            client,
            config,
            bytes_sent,
        }
    }

    fn build_request(&self) -> Result<Request, HttpError> {
        let mut builder = self
            .client
            .request(self.config.method.clone(), self.config.url.clone())
            .header(CONNECTION, HeaderValue::from_static("close"));

        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.config.user_agent.as_deref() {
            builder = builder.header(USER_AGENT, user_agent);
        }
        if let Some(headers) = self.config.headers.as_ref() {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder
            .build()
            .map_err(|err| HttpError::BuildRequestFailed { source: err })
    }

    /// Sends one request and classifies what came back. Never fails: every
    /// problem is folded into [`RequestOutcome::Failed`].
    pub async fn execute(&self) -> RequestOutcome {
        let start = Instant::now();

        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => return self.failed(err.to_string()),
        };

        match self.client.execute(request).await {
            Ok(response) => {
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let status = response.status();
                let bytes_received = declared_content_length(response.headers());
                self.print_status(status);
                RequestOutcome::Response {
                    status: status.as_u16(),
                    elapsed_ms,
                    bytes_sent: self.bytes_sent,
                    bytes_received,
                }
            }
            // A status only rides on an error via `error_for_status` or a
            // redirect policy error, neither of which this client produces.
            Err(err) => match err.status() {
                Some(status) => {
                    self.print_status(status);
                    RequestOutcome::StatusError {
                        status: status.as_u16(),
                    }
                }
                None => self.failed(error_chain(&err)),
            },
        }
    }

    fn failed(&self, message: String) -> RequestOutcome {
        debug!("Request to {} failed: {}", self.config.url, message);
        if self.config.verbose {
            println!(" > [ERROR] {}", message);
        }
        RequestOutcome::Failed { message }
    }

    fn print_status(&self, status: StatusCode) {
        if self.config.verbose {
            println!(
                " > {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
        }
    }
}

/// The `Content-Length` the server declared, `-1` when absent or unparsable.
/// Read from the header so HEAD and 204/304 replies report what they announce.
fn declared_content_length(headers: &HeaderMap) -> i64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(-1)
}

/// `reqwest` keeps the useful part (refused, timed out, dns) in the source chain.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
