//! Grocery application library.
//!
//! This crate holds everything between the front end and the data:
//!
//! - [`models`] - Domain entities and read-only report rows
//! - [`db`] - In-memory repositories seeded from a fixture
//! - [`services`] - Sales analysis, purchase history, authentication, and
//!   the CRUD services the front end calls
//! - [`config`] - Environment-driven configuration
//! - [`error`] - The umbrella [`AppError`](error::AppError)
//!
//! Everything is synchronous; a [`Database`](db::Database) is shared by
//! reference and each repository borrows it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use db::Database;
pub use error::AppError;
