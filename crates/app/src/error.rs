//! Unified error type for callers that drive several layers at once.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::{RepositoryError, SeedError};
use crate::services::ServiceError;
use crate::services::auth::{AuthError, PasswordError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Seed data could not be loaded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Data store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Service operation failed.
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Authentication failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Password hashing was misused.
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

impl AppError {
    /// Whether the error was caused by the caller's input rather than the
    /// data store or environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Service(
                ServiceError::NotFound { .. }
                | ServiceError::OutOfStock(_)
                | ServiceError::AlreadyOnList { .. }
                | ServiceError::Validation(_),
            )
            | Self::Auth(
                AuthError::InvalidEmail(_) | AuthError::InvalidCredentials | AuthError::Password(_),
            )
            | Self::Password(_) => true,
            Self::Config(_)
            | Self::Seed(_)
            | Self::Database(_)
            | Self::Service(_)
            | Self::Auth(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(AppError::from(ServiceError::OutOfStock(4)).is_user_error());
        assert!(AppError::from(AuthError::InvalidCredentials).is_user_error());
        assert!(AppError::from(PasswordError::EmptyPassword).is_user_error());
        assert!(!AppError::from(RepositoryError::Poisoned).is_user_error());
        assert!(
            !AppError::from(ServiceError::Repository(RepositoryError::Conflict(
                "duplicate product id 1".to_string()
            )))
            .is_user_error()
        );
    }

    #[test]
    fn test_display_keeps_context() {
        let err = AppError::from(ServiceError::NotFound {
            entity: "product",
            id: 42,
        });
        assert_eq!(err.to_string(), "product 42 not found");
        assert_eq!(
            AppError::from(AuthError::InvalidCredentials).to_string(),
            "Auth error: invalid email or password"
        );
    }
}
