//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::TesterArgs;
pub use types::{HeaderList, MAX_RUN_COUNT, RunCount};

pub(crate) use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_REPETITIONS, DEFAULT_USERS};
pub(crate) use parsers::parse_method;
