//! Product catalog service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use grocery_core::{ProductCategory, ProductId};

use super::ServiceError;
use crate::db::{Database, ProductRepository, RepositoryError};
use crate::models::Product;

/// Catalog queries and product maintenance.
pub struct ProductService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductService<'a> {
    /// Create a new product service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            products: db.products(),
        }
    }

    /// All products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.get_all()
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the product does not exist.
    pub fn get(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.products.get(id)?.ok_or(ServiceError::NotFound {
            entity: "product",
            id: id.as_i32(),
        })
    }

    /// Add a new product.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` with a conflict if the ID is taken.
    pub fn add(&self, product: Product) -> Result<Product, ServiceError> {
        let product = self.products.add(product)?;
        tracing::info!(product_id = %product.id(), name = product.name(), "Product created");
        Ok(product)
    }

    /// Replace an existing product.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the product does not exist.
    pub fn update(&self, product: Product) -> Result<Product, ServiceError> {
        let id = product.id();
        self.products.update(product)?.ok_or(ServiceError::NotFound {
            entity: "product",
            id: id.as_i32(),
        })
    }

    /// Remove a product.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the product does not exist.
    pub fn delete(&self, id: ProductId) -> Result<Product, ServiceError> {
        let product = self.products.delete(id)?.ok_or(ServiceError::NotFound {
            entity: "product",
            id: id.as_i32(),
        })?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(product)
    }

    /// Products with at least one unit in stock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn in_stock(&self) -> Result<Vec<Product>, RepositoryError> {
        self.filter(Product::is_in_stock)
    }

    /// Products with no stock left.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn out_of_stock(&self) -> Result<Vec<Product>, RepositoryError> {
        self.filter(Product::is_out_of_stock)
    }

    /// Products whose name contains `term`, ignoring case. A blank term
    /// matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn search(&self, term: &str) -> Result<Vec<Product>, RepositoryError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.filter(|p| name_matches(p, &term))
    }

    /// Products in `category`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn by_category(&self, category: ProductCategory) -> Result<Vec<Product>, RepositoryError> {
        self.filter(|p| p.category == category)
    }

    /// Products whose best-before date falls within `days` days of `today`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn expiring(&self, days: u32, today: NaiveDate) -> Result<Vec<Product>, RepositoryError> {
        self.filter(|p| p.is_expiring_soon(today, days))
    }

    /// Products priced between `min` and `max`, both inclusive. An inverted
    /// range matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>, RepositoryError> {
        if min > max {
            return Ok(Vec::new());
        }
        self.filter(|p| (min..=max).contains(&p.price.amount()))
    }

    /// Sum of `price * stock` over the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn total_stock_value(&self) -> Result<Decimal, RepositoryError> {
        Ok(self
            .products
            .get_all()?
            .iter()
            .map(Product::stock_value)
            .sum())
    }

    fn filter(&self, keep: impl Fn(&Product) -> bool) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.products.get_all()?;
        products.retain(|p| keep(p));
        Ok(products)
    }
}

/// Case-insensitive substring match; `term` must already be lowercase.
pub(crate) fn name_matches(product: &Product, term: &str) -> bool {
    product.name().to_lowercase().contains(term)
}
