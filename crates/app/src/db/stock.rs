//! Joint write access to products and list items.
//!
//! Moving units between the shelf and a list touches both collections.
//! [`StockLedger`] holds both write locks for the whole change, so a failure
//! can only happen before anything is written.

use std::sync::RwLockWriteGuard;

use grocery_core::{GroceryListId, GroceryListItemId, ProductId};

use super::grocery_list_items::next_item_id;
use super::{Database, RepositoryError, write};
use crate::models::{GroceryListItem, Product};

/// Products and list items locked for writing.
///
/// Locks are taken products first, then items; dropping the ledger
/// releases both.
pub struct StockLedger<'a> {
    products: RwLockWriteGuard<'a, Vec<Product>>,
    items: RwLockWriteGuard<'a, Vec<GroceryListItem>>,
}

impl<'a> StockLedger<'a> {
    /// Lock both collections of `db`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if either lock is poisoned.
    pub fn lock(db: &'a Database) -> Result<Self, RepositoryError> {
        let products = write(&db.products)?;
        let items = write(&db.grocery_list_items)?;
        Ok(Self { products, items })
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// The item for `product_id` on a list, if it is there.
    #[must_use]
    pub fn item_on_list(
        &self,
        grocery_list_id: GroceryListId,
        product_id: ProductId,
    ) -> Option<&GroceryListItem> {
        self.items.iter().find(|i| {
            i.belongs_to_grocery_list(grocery_list_id) && i.represents_product(product_id)
        })
    }

    /// Replace the stored product with the same ID; no-op if it is gone.
    pub fn put_product(&mut self, product: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id() == product.id()) {
            *existing = product;
        }
    }

    /// Replace the stored item with the same ID; no-op if it is gone.
    pub fn put_item(&mut self, item: GroceryListItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        }
    }

    /// Store a new item under the next free ID.
    pub fn insert_item(&mut self, mut item: GroceryListItem) -> GroceryListItem {
        item.id = next_item_id(&self.items);
        self.items.push(item.clone());
        item
    }

    pub fn remove_item(&mut self, id: GroceryListItemId) {
        self.items.retain(|i| i.id != id);
    }
}

impl Database {
    /// Lock products and list items together for a stock transfer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if either lock is poisoned.
    pub fn stock_ledger(&self) -> Result<StockLedger<'_>, RepositoryError> {
        StockLedger::lock(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
impl Database {
    /// Poison the list item lock the way a panicking writer would.
    pub(crate) fn poison_grocery_list_items(&self) {
        let joined = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.grocery_list_items.write().unwrap();
                panic!("writer died holding the item lock");
            })
            .join()
        });
        assert!(joined.is_err());
    }
}
