//! Grocery list repository.

use grocery_core::{ClientId, GroceryListId};

use super::{Database, RepositoryError, read, write};
use crate::models::GroceryList;

/// Repository for grocery list operations.
pub struct GroceryListRepository<'a> {
    db: &'a Database,
}

impl<'a> GroceryListRepository<'a> {
    /// Create a new grocery list repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All grocery lists, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<GroceryList>, RepositoryError> {
        Ok(read(&self.db.grocery_lists)?.clone())
    }

    /// Lists owned by one client.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<GroceryList>, RepositoryError> {
        Ok(read(&self.db.grocery_lists)?
            .iter()
            .filter(|l| l.belongs_to_client(client_id))
            .cloned()
            .collect())
    }

    /// Get a grocery list by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get(&self, id: GroceryListId) -> Result<Option<GroceryList>, RepositoryError> {
        Ok(read(&self.db.grocery_lists)?
            .iter()
            .find(|l| l.id() == id)
            .cloned())
    }

    /// Store a new list under the next free ID (`max + 1`, or 1 when empty).
    ///
    /// The ID carried by `list` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn add(&self, mut list: GroceryList) -> Result<GroceryList, RepositoryError> {
        let mut lists = write(&self.db.grocery_lists)?;
        list.model.id = lists
            .iter()
            .map(GroceryList::id)
            .max()
            .map_or(GroceryListId::new(1), |id| id.next());
        lists.push(list.clone());
        tracing::debug!(grocery_list_id = %list.id(), "Grocery list added");
        Ok(list)
    }

    /// Replace the stored list with the same ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn update(&self, list: GroceryList) -> Result<Option<GroceryList>, RepositoryError> {
        let mut lists = write(&self.db.grocery_lists)?;
        let Some(existing) = lists.iter_mut().find(|l| l.id() == list.id()) else {
            return Ok(None);
        };
        *existing = list;
        Ok(Some(existing.clone()))
    }

    /// Remove a list, returning it if it existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn delete(&self, id: GroceryListId) -> Result<Option<GroceryList>, RepositoryError> {
        let mut lists = write(&self.db.grocery_lists)?;
        Ok(lists
            .iter()
            .position(|l| l.id() == id)
            .map(|index| lists.remove(index)))
    }
}
