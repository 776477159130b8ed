//! HTTP request execution and simulated users.
mod client;
mod executor;
mod user;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::build_client;
pub use executor::{RequestExecutor, estimate_request_bytes};
pub use user::UserSimulator;
