//! Configuration loading, merging, and resolution.
mod apply;
mod loader;
mod run;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::load_config;
pub use run::{RunConfig, resolve_run_config};

#[cfg(test)]
pub(crate) use loader::load_config_file;
