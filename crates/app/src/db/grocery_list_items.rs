//! Grocery list item repository.

use grocery_core::{GroceryListId, GroceryListItemId};

use super::{Database, RepositoryError, read, write};
use crate::models::GroceryListItem;

/// Repository for grocery list item operations.
pub struct GroceryListItemRepository<'a> {
    db: &'a Database,
}

impl<'a> GroceryListItemRepository<'a> {
    /// Create a new grocery list item repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All items across all lists, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<GroceryListItem>, RepositoryError> {
        Ok(read(&self.db.grocery_list_items)?.clone())
    }

    /// Items on one grocery list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all_on_grocery_list(
        &self,
        grocery_list_id: GroceryListId,
    ) -> Result<Vec<GroceryListItem>, RepositoryError> {
        Ok(read(&self.db.grocery_list_items)?
            .iter()
            .filter(|i| i.belongs_to_grocery_list(grocery_list_id))
            .cloned()
            .collect())
    }

    /// Get an item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get(&self, id: GroceryListItemId) -> Result<Option<GroceryListItem>, RepositoryError> {
        Ok(read(&self.db.grocery_list_items)?
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    /// Store a new item under the next free ID (`max + 1`, or 1 when empty).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn add(&self, mut item: GroceryListItem) -> Result<GroceryListItem, RepositoryError> {
        let mut items = write(&self.db.grocery_list_items)?;
        item.id = next_item_id(&items);
        items.push(item.clone());
        tracing::debug!(
            item_id = %item.id,
            grocery_list_id = %item.grocery_list_id,
            product_id = %item.product_id,
            "Grocery list item added"
        );
        Ok(item)
    }

    /// Replace the stored item with the same ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn update(
        &self,
        item: GroceryListItem,
    ) -> Result<Option<GroceryListItem>, RepositoryError> {
        let mut items = write(&self.db.grocery_list_items)?;
        let Some(existing) = items.iter_mut().find(|i| i.id == item.id) else {
            return Ok(None);
        };
        *existing = item;
        Ok(Some(existing.clone()))
    }

    /// Remove an item, returning it if it existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn delete(
        &self,
        id: GroceryListItemId,
    ) -> Result<Option<GroceryListItem>, RepositoryError> {
        let mut items = write(&self.db.grocery_list_items)?;
        Ok(items
            .iter()
            .position(|i| i.id == id)
            .map(|index| items.remove(index)))
    }
}

/// `max + 1`, or 1 when there are no items.
pub(super) fn next_item_id(items: &[GroceryListItem]) -> GroceryListItemId {
    items
        .iter()
        .map(|i| i.id)
        .max()
        .map_or(GroceryListItemId::new(1), |id| id.next())
}
