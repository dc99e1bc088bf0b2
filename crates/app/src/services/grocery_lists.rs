//! Grocery list service.

use grocery_core::{ClientId, GroceryListId};

use super::ServiceError;
use crate::db::{Database, GroceryListRepository, RepositoryError};
use crate::models::GroceryList;

/// Grocery list maintenance.
pub struct GroceryListService<'a> {
    lists: GroceryListRepository<'a>,
}

impl<'a> GroceryListService<'a> {
    /// Create a new grocery list service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            lists: db.grocery_lists(),
        }
    }

    /// All grocery lists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<GroceryList>, RepositoryError> {
        self.lists.get_all()
    }

    /// Lists owned by `client_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn for_client(&self, client_id: ClientId) -> Result<Vec<GroceryList>, RepositoryError> {
        self.lists.get_all_for_client(client_id)
    }

    /// Get a list by its ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the list does not exist.
    pub fn get(&self, id: GroceryListId) -> Result<GroceryList, ServiceError> {
        self.lists.get(id)?.ok_or_else(|| not_found(id))
    }

    /// Store a new list. The list receives the next free ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store is unavailable.
    pub fn add(&self, list: GroceryList) -> Result<GroceryList, ServiceError> {
        let list = self.lists.add(list)?;
        tracing::info!(
            grocery_list_id = %list.id(),
            client_id = %list.client_id,
            "Grocery list created"
        );
        Ok(list)
    }

    /// Replace an existing list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the list does not exist.
    pub fn update(&self, list: GroceryList) -> Result<GroceryList, ServiceError> {
        let id = list.id();
        self.lists.update(list)?.ok_or_else(|| not_found(id))
    }

    /// Remove a list. Items on it are left in place and drop out of the
    /// purchase reports.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the list does not exist.
    pub fn delete(&self, id: GroceryListId) -> Result<GroceryList, ServiceError> {
        let list = self.lists.delete(id)?.ok_or_else(|| not_found(id))?;
        tracing::info!(grocery_list_id = %id, "Grocery list deleted");
        Ok(list)
    }

    /// Change the color tag of a list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the list does not exist, or
    /// `ServiceError::Validation` if `color` is blank.
    pub fn change_color(&self, id: GroceryListId, color: &str) -> Result<GroceryList, ServiceError> {
        let mut list = self.get(id)?;
        list.update_color(color)?;
        self.update(list)
    }
}

fn not_found(id: GroceryListId) -> ServiceError {
    ServiceError::NotFound {
        entity: "grocery list",
        id: id.as_i32(),
    }
}
