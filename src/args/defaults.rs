use super::types::RunCount;

/// Config filenames picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["stressi.toml", "stressi.json"];

pub(crate) const DEFAULT_USERS: RunCount = RunCount::Bounded(10);
pub(crate) const DEFAULT_REPETITIONS: RunCount = RunCount::Bounded(10);
