use reqwest::Method;

use super::types::{HeaderList, RunCount};
use crate::error::ValidationError;

pub(super) fn parse_run_count(s: &str) -> Result<RunCount, ValidationError> {
    s.parse::<RunCount>()
}

/// Parses `key1:value1,key2:value2`. Entries that do not split into exactly
/// one name and one value are dropped; a repeated name keeps its last value.
#[must_use]
pub(crate) fn parse_header_list(s: &str) -> HeaderList {
    let mut headers = HeaderList::new();
    for entry in s.split(',') {
        let mut parts = entry.split(':');
        if let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
            headers.insert(name.to_owned(), value.to_owned());
        }
    }
    headers
}

pub(super) fn parse_header_arg(s: &str) -> Result<HeaderList, ValidationError> {
    Ok(parse_header_list(s))
}

pub(crate) fn parse_method(s: &str) -> Result<Method, ValidationError> {
    let normalized = s.trim().to_ascii_uppercase();
    Method::from_bytes(normalized.as_bytes()).map_err(|_err| ValidationError::InvalidMethod {
        value: s.to_owned(),
    })
}

pub(super) fn parse_timeout_ms(s: &str) -> Result<u64, ValidationError> {
    let value: u64 = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidNumber {
            value: s.to_owned(),
            source: err,
        })?;
    if value == 0 {
        return Err(ValidationError::TimeoutZero);
    }
    Ok(value)
}
