//! Product entity with stock tracking and shelf-life information.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use grocery_core::{Price, ProductCategory, ProductId};

use super::ValidationError;
use super::model::{Model, impl_entity};

/// A product on the shelf.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Identifier and name.
    #[serde(flatten)]
    pub model: Model<ProductId>,
    /// Units in stock.
    pub stock: u32,
    /// Unit price.
    pub price: Price,
    /// Shelf category.
    pub category: ProductCategory,
    /// Last day the product is good to eat, if it spoils.
    pub best_before: Option<NaiveDate>,
}

impl_entity!(Product, ProductId);

impl Product {
    /// Create a product in [`ProductCategory::Other`] without a best-before date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankName` if `name` is blank.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        stock: u32,
        price: Price,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            model: Model::new(id, name)?,
            stock,
            price,
            category: ProductCategory::default(),
            best_before: None,
        })
    }

    /// Set the category.
    #[must_use]
    pub const fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the best-before date.
    #[must_use]
    pub const fn with_best_before(mut self, date: NaiveDate) -> Self {
        self.best_before = Some(date);
        self
    }

    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Whether `requested` units can be taken from stock.
    #[must_use]
    pub const fn has_sufficient_stock(&self, requested: u32) -> bool {
        requested > 0 && self.stock >= requested
    }

    /// Whether the best-before date lies before `today`.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.best_before.is_some_and(|date| date < today)
    }

    /// Whether the best-before date falls within `days` days from `today`
    /// (inclusive on both ends). Already expired products are not
    /// "expiring soon".
    #[must_use]
    pub fn is_expiring_soon(&self, today: NaiveDate, days: u32) -> bool {
        let Some(date) = self.best_before else {
            return false;
        };
        let horizon = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        date >= today && date <= horizon
    }

    /// Stock value (`price * stock`).
    #[must_use]
    pub fn stock_value(&self) -> rust_decimal::Decimal {
        self.price.amount() * rust_decimal::Decimal::from(self.stock)
    }

    /// Add units to stock.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Overflow` if the stock would exceed `u32::MAX`.
    pub fn increase_stock(&mut self, amount: u32) -> Result<(), ValidationError> {
        self.stock = self
            .stock
            .checked_add(amount)
            .ok_or(ValidationError::Overflow)?;
        Ok(())
    }

    /// Take units from stock.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InsufficientStock` if `amount` exceeds the
    /// current stock; the stock is left unchanged.
    pub fn decrease_stock(&mut self, amount: u32) -> Result<(), ValidationError> {
        self.stock = self
            .stock
            .checked_sub(amount)
            .ok_or(ValidationError::InsufficientStock {
                requested: amount,
                available: self.stock,
            })?;
        Ok(())
    }
}
