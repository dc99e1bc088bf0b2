//! Identifier and display name shared by every named entity.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::Serialize;

use super::ValidationError;

/// Identifier plus display name, embedded in each named entity.
///
/// Two models are equal when their identifiers are equal; the name is
/// presentation data.
#[derive(Debug, Clone, Serialize)]
pub struct Model<Id> {
    /// Entity identifier.
    pub id: Id,
    /// Display name.
    pub name: String,
}

impl<Id> Model<Id> {
    /// Create a model, rejecting blank names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankName` if `name` is empty or whitespace.
    pub fn new(id: Id, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(Self { id, name })
    }
}

impl<Id: PartialEq> PartialEq for Model<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Id: Eq> Eq for Model<Id> {}

impl<Id: Hash> Hash for Model<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<Id: fmt::Display> fmt::Display for Model<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Id: {})", self.name, self.id)
    }
}

/// Implements identity accessors and id-based equality for an entity that
/// embeds a `model: Model<$id>` field.
macro_rules! impl_entity {
    ($entity:ty, $id:ty) => {
        impl $entity {
            /// Entity identifier.
            #[must_use]
            pub const fn id(&self) -> $id {
                self.model.id
            }

            /// Display name.
            #[must_use]
            pub fn name(&self) -> &str {
                &self.model.name
            }
        }

        impl PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                self.model == other.model
            }
        }

        impl Eq for $entity {}

        impl ::core::hash::Hash for $entity {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                self.model.hash(state);
            }
        }
    };
}

pub(crate) use impl_entity;
