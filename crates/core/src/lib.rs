//! Grocery Core - Shared types library.
//!
//! This crate provides the value types used across the grocery components:
//! - `app` - Domain models, in-memory repositories, and services
//! - `cli` - Command-line front end over the services
//!
//! # Architecture
//!
//! The core crate contains only types and pure predicates - no I/O, no
//! repositories, no hashing. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles,
//!   and product categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
