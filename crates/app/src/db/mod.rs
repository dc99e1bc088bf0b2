//! In-memory data store.
//!
//! # Collections
//!
//! - `products` - Shelf products with stock, price, and category
//! - `grocery_lists` - Lists owned by clients
//! - `grocery_list_items` - (list, product, amount) rows
//! - `clients` - Users with their password hashes and roles
//!
//! # Seeding
//!
//! A [`Database`] always starts from [`SeedData`]: either the built-in
//! fixture (`Database::seeded`) or a YAML file named by `GROCERY_SEED_FILE`.
//! Nothing is written back; the store lives as long as the process.
//!
//! Each collection sits behind its own `RwLock`, so a `Database` can be
//! shared by reference and repositories borrow it the same way they would
//! borrow a connection pool. Changes that span products and list items go
//! through a [`StockLedger`], which holds both locks at once.

pub mod clients;
pub mod grocery_list_items;
pub mod grocery_lists;
pub mod products;
pub mod seed;
pub mod stock;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::{Client, GroceryList, GroceryListItem, Product, ValidationError};

pub use clients::ClientRepository;
pub use grocery_list_items::GroceryListItemRepository;
pub use grocery_lists::GroceryListRepository;
pub use products::ProductRepository;
pub use seed::{SeedData, SeedError, SeedIssue};
pub use stock::StockLedger;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Constraint violation (e.g., duplicate ID).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A writer panicked while holding a collection lock.
    #[error("data store lock poisoned")]
    Poisoned,

    /// Entity failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// The in-memory store backing every repository.
#[derive(Debug, Default)]
pub struct Database {
    products: RwLock<Vec<Product>>,
    grocery_lists: RwLock<Vec<GroceryList>>,
    grocery_list_items: RwLock<Vec<GroceryListItem>>,
    clients: RwLock<Vec<Client>>,
}

impl Database {
    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store from already validated entities.
    #[must_use]
    pub fn new(
        products: Vec<Product>,
        grocery_lists: Vec<GroceryList>,
        grocery_list_items: Vec<GroceryListItem>,
        clients: Vec<Client>,
    ) -> Self {
        Self {
            products: RwLock::new(products),
            grocery_lists: RwLock::new(grocery_lists),
            grocery_list_items: RwLock::new(grocery_list_items),
            clients: RwLock::new(clients),
        }
    }

    /// Build a store from seed data.
    ///
    /// Dangling references are allowed (see [`SeedData::validate`]);
    /// invalid rows and duplicate IDs are not.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Invalid` or `SeedError::DuplicateId`.
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let issues = seed.validate();
        for issue in &issues {
            tracing::warn!(%issue, "Seed data integrity issue");
        }

        let (products, grocery_lists, grocery_list_items, clients) = seed.into_entities()?;

        tracing::debug!(
            products = products.len(),
            grocery_lists = grocery_lists.len(),
            grocery_list_items = grocery_list_items.len(),
            clients = clients.len(),
            "Database seeded"
        );

        Ok(Self::new(products, grocery_lists, grocery_list_items, clients))
    }

    /// Build a store from the built-in fixture.
    ///
    /// # Errors
    ///
    /// Returns a `SeedError` if the bundled fixture fails to parse.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::from_seed(SeedData::builtin()?)
    }

    /// Product repository over this store.
    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }

    /// Grocery list repository over this store.
    #[must_use]
    pub const fn grocery_lists(&self) -> GroceryListRepository<'_> {
        GroceryListRepository::new(self)
    }

    /// Grocery list item repository over this store.
    #[must_use]
    pub const fn grocery_list_items(&self) -> GroceryListItemRepository<'_> {
        GroceryListItemRepository::new(self)
    }

    /// Client repository over this store.
    #[must_use]
    pub const fn clients(&self) -> ClientRepository<'_> {
        ClientRepository::new(self)
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read().map_err(|_| RepositoryError::Poisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write().map_err(|_| RepositoryError::Poisoned)
}
