//! Client lookup service.

use grocery_core::{ClientId, Email};

use super::ServiceError;
use crate::db::{ClientRepository, Database, RepositoryError};
use crate::models::Client;

/// Read access to clients.
pub struct ClientService<'a> {
    clients: ClientRepository<'a>,
}

impl<'a> ClientService<'a> {
    /// Create a new client service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            clients: db.clients(),
        }
    }

    /// All clients.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<Client>, RepositoryError> {
        self.clients.get_all()
    }

    /// Get a client by ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the client does not exist.
    pub fn get(&self, id: ClientId) -> Result<Client, ServiceError> {
        self.clients.get(id)?.ok_or(ServiceError::NotFound {
            entity: "client",
            id: id.as_i32(),
        })
    }

    /// Get a client by email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the collection lock is poisoned.
    pub fn get_by_email(&self, email: &Email) -> Result<Option<Client>, RepositoryError> {
        self.clients.get_by_email(email)
    }
}
