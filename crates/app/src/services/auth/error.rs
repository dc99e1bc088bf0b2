//! Authentication error types.

use thiserror::Error;

use grocery_core::EmailError;

use super::password::PasswordError;
use crate::db::RepositoryError;

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Unknown email or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Blank password or stored hash.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
