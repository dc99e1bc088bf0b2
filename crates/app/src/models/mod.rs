//! Domain models.
//!
//! Entities embed a [`Model`] (identifier plus display name) by composition
//! and compare equal when their identifiers match. Report rows in
//! [`reports`] are owned snapshots produced by the analysis services.

mod error;
mod model;

pub mod client;
pub mod grocery_list;
pub mod grocery_list_item;
pub mod product;
pub mod reports;

pub use client::Client;
pub use error::ValidationError;
pub use grocery_list::GroceryList;
pub use grocery_list_item::GroceryListItem;
pub use model::Model;
pub use product::Product;
pub use reports::{BestSellingProduct, BoughtProduct};
