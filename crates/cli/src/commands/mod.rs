//! Subcommand implementations.
//!
//! Each command borrows the in-memory store, calls one service, and reports
//! through `tracing`.

pub mod auth;
pub mod catalog;
pub mod lists;
pub mod reports;
pub mod seed;
