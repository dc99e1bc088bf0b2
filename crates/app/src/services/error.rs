//! Service-level error type.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;

/// Errors returned by the CRUD services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The product has no units left to put on a list.
    #[error("product {0} is out of stock")]
    OutOfStock(i32),

    /// The product is already on the list; change the amount instead.
    #[error("product {product} is already on grocery list {grocery_list}")]
    AlreadyOnList { grocery_list: i32, product: i32 },

    /// A domain rule was violated.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Export serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
