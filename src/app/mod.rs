mod console;
mod export;
mod progress;
mod runner;
mod summary;


pub(crate) use console::{print_help_notes, write_error};
pub(crate) use runner::run_local;
