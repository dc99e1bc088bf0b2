//! Application services.
//!
//! Services borrow a [`Database`](crate::db::Database) and combine
//! repositories into the operations the front end needs.

mod error;

pub mod analysis;
pub mod auth;
pub mod clients;
pub mod grocery_list_items;
pub mod grocery_lists;
pub mod products;

pub use error::ServiceError;
