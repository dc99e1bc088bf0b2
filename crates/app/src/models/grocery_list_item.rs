//! Grocery list item: a (list, product, amount) association.

use serde::Serialize;

use grocery_core::{GroceryListId, GroceryListItemId, ProductId};

use super::ValidationError;

/// One product on one grocery list.
///
/// Items have no display name of their own, so they carry a bare identifier
/// instead of a [`Model`](super::Model). The amount is always at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroceryListItem {
    /// Item identifier.
    pub id: GroceryListItemId,
    /// List the item is on.
    pub grocery_list_id: GroceryListId,
    /// Product the item refers to.
    pub product_id: ProductId,
    amount: u32,
}

impl GroceryListItem {
    /// Create a list item.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroAmount` if `amount` is zero.
    pub const fn new(
        id: GroceryListItemId,
        grocery_list_id: GroceryListId,
        product_id: ProductId,
        amount: u32,
    ) -> Result<Self, ValidationError> {
        if amount == 0 {
            return Err(ValidationError::ZeroAmount);
        }
        Ok(Self {
            id,
            grocery_list_id,
            product_id,
            amount,
        })
    }

    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Set a new amount.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroAmount` if `amount` is zero.
    pub const fn update_amount(&mut self, amount: u32) -> Result<(), ValidationError> {
        if amount == 0 {
            return Err(ValidationError::ZeroAmount);
        }
        self.amount = amount;
        Ok(())
    }

    #[must_use]
    pub fn belongs_to_grocery_list(&self, grocery_list_id: GroceryListId) -> bool {
        self.grocery_list_id == grocery_list_id
    }

    #[must_use]
    pub fn represents_product(&self, product_id: ProductId) -> bool {
        self.product_id == product_id
    }
}
