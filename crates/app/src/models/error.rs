//! Validation errors raised by entity constructors and mutators.

use thiserror::Error;

/// A domain rule was violated while building or changing an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Display name is empty or whitespace.
    #[error("name cannot be empty")]
    BlankName,

    /// Grocery list color tag is empty or whitespace.
    #[error("color cannot be empty")]
    BlankColor,

    /// Stored password hash is empty or whitespace.
    #[error("password hash cannot be empty")]
    BlankPasswordHash,

    /// List item amount must be at least one.
    #[error("amount must be greater than 0")]
    ZeroAmount,

    /// Tried to take more units than are in stock.
    #[error("requested {requested} units but only {available} in stock")]
    InsufficientStock {
        /// Units requested.
        requested: u32,
        /// Units available.
        available: u32,
    },

    /// Stock or amount would not fit in a `u32`.
    #[error("quantity overflow")]
    Overflow,

    /// Client email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] grocery_core::EmailError),
}
