use serde::Deserialize;

use crate::args::{HeaderList, RunCount};

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<String>,
    #[serde(alias = "concurrent_users")]
    pub users: Option<RunCount>,
    #[serde(alias = "repetitions")]
    pub reps: Option<RunCount>,
    pub verbose: Option<bool>,
    pub user_agent: Option<String>,
    pub headers: Option<HeaderList>,
    /// Per-request timeout in milliseconds.
    pub timeout: Option<u64>,
    pub export_json: Option<String>,
}
