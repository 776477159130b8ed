use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;

/// Header name to value, as given by `--headers` or the config file.
pub type HeaderList = BTreeMap<String, String>;

/// Upper bound used for `-1` counts: the largest signed 64-bit value.
pub const MAX_RUN_COUNT: u64 = i64::MAX.unsigned_abs();

/// A user or repetition count. `-1` on the command line selects `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum RunCount {
    Bounded(u64),
    Unbounded,
}

impl RunCount {
    #[must_use]
    pub const fn get(self) -> u64 {
        match self {
            RunCount::Bounded(value) => value,
            RunCount::Unbounded => MAX_RUN_COUNT,
        }
    }

    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, RunCount::Unbounded)
    }
}

impl TryFrom<i64> for RunCount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == -1 {
            return Ok(RunCount::Unbounded);
        }
        u64::try_from(value)
            .map(RunCount::Bounded)
            .map_err(|_err| ValidationError::NegativeCount { value })
    }
}

impl std::str::FromStr for RunCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber {
                value: s.to_owned(),
                source: err,
            })?;
        RunCount::try_from(value)
    }
}

impl fmt::Display for RunCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
