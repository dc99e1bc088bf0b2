//! Product repository.

use grocery_core::ProductId;

use super::{Database, RepositoryError, read, write};
use crate::models::Product;

/// Repository for product operations.
pub struct ProductRepository<'a> {
    db: &'a Database,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All products, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(read(&self.db.products)?.clone())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(read(&self.db.products)?
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    /// Add a product under its own ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a product with the same ID exists.
    pub fn add(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = write(&self.db.products)?;
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(RepositoryError::Conflict(format!(
                "product with id {} already exists",
                product.id()
            )));
        }
        products.push(product.clone());
        tracing::debug!(product_id = %product.id(), "Product added");
        Ok(product)
    }

    /// Replace the stored product with the same ID.
    ///
    /// Returns `None` if no such product exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
        let mut products = write(&self.db.products)?;
        let Some(existing) = products.iter_mut().find(|p| p.id() == product.id()) else {
            return Ok(None);
        };
        *existing = product;
        Ok(Some(existing.clone()))
    }

    /// Remove a product, returning it if it existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn delete(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let mut products = write(&self.db.products)?;
        Ok(products
            .iter()
            .position(|p| p.id() == id)
            .map(|index| products.remove(index)))
    }
}
