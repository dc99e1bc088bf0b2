//! Client repository.

use grocery_core::{ClientId, Email};

use super::{Database, RepositoryError, read};
use crate::models::Client;

/// Repository for client lookups. Clients are only ever seeded.
pub struct ClientRepository<'a> {
    db: &'a Database,
}

impl<'a> ClientRepository<'a> {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All clients.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<Client>, RepositoryError> {
        Ok(read(&self.db.clients)?.clone())
    }

    /// Get a client by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        Ok(read(&self.db.clients)?
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    /// Get a client by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_by_email(&self, email: &Email) -> Result<Option<Client>, RepositoryError> {
        Ok(read(&self.db.clients)?
            .iter()
            .find(|c| &c.email == email)
            .cloned())
    }
}
