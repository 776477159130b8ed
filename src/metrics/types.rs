/// Result of a single request, consumed immediately by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A response arrived.
    Response {
        status: u16,
        elapsed_ms: u64,
        bytes_sent: i64,
        /// `Content-Length` of the response, `-1` when the server omitted it.
        bytes_received: i64,
    },
    /// The client reported an error that still carries an HTTP status.
    StatusError { status: u16 },
    /// No usable response: connect/timeout/DNS/parse failure, or the request
    /// could not be built.
    Failed { message: String },
}

impl RequestOutcome {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            RequestOutcome::Response { status, .. } | RequestOutcome::StatusError { status } => {
                Some(*status)
            }
            RequestOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Successful,
    FurtherAction,
    UserError,
    ServerError,
}

impl StatusClass {
    /// Buckets a status code; codes outside 200..=599 belong to no class.
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => Some(StatusClass::Successful),
            300..=399 => Some(StatusClass::FurtherAction),
            400..=499 => Some(StatusClass::UserError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }
}
