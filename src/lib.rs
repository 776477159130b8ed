//! Core library for the `stressi` CLI.
//!
//! `stressi` spins up a number of simulated users, each firing a fixed number
//! of sequential HTTP requests at one target, and reports timing, status-code
//! and byte-volume statistics. This crate exposes the building blocks the
//! binary wires together: argument and config resolution, the request
//! executor and user simulator, and the shared statistics aggregator.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod shutdown;
