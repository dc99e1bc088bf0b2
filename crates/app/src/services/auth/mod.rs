//! Authentication service.
//!
//! Provides email and password login against the client store.

mod error;
mod password;

pub use error::AuthError;
pub use password::{
    ITERATIONS, KEY_SIZE, PasswordError, SALT_SIZE, hash_password, verify_password,
};

use secrecy::{ExposeSecret, SecretString};

use grocery_core::Email;

use crate::db::{ClientRepository, Database};
use crate::models::Client;

/// Authentication service.
pub struct AuthService<'a> {
    clients: ClientRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            clients: db.clients(),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or the
    /// password is wrong.
    /// Returns `AuthError::Password` if the password is blank.
    pub fn login(&self, email: &str, password: &SecretString) -> Result<Client, AuthError> {
        let email = Email::parse(email)?;

        let Some(client) = self.clients.get_by_email(&email)? else {
            tracing::debug!(%email, "Login for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password.expose_secret(), client.password_hash())? {
            tracing::debug!(client = %client.id(), "Login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(client = %client.id(), admin = client.is_admin(), "Client logged in");
        Ok(client)
    }
}
