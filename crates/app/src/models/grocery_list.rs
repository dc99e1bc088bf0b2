//! Grocery list entity.

use chrono::NaiveDate;
use serde::Serialize;

use grocery_core::{ClientId, GroceryListId};

use super::ValidationError;
use super::model::{Model, impl_entity};

/// A named grocery list owned by a client.
#[derive(Debug, Clone, Serialize)]
pub struct GroceryList {
    /// Identifier and name.
    #[serde(flatten)]
    pub model: Model<GroceryListId>,
    /// Day the list was created.
    pub date: NaiveDate,
    /// Owning client.
    pub client_id: ClientId,
    color: String,
}

impl_entity!(GroceryList, GroceryListId);

impl GroceryList {
    /// Create a grocery list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankName` or `ValidationError::BlankColor`
    /// for blank inputs.
    pub fn new(
        id: GroceryListId,
        name: impl Into<String>,
        date: NaiveDate,
        color: impl Into<String>,
        client_id: ClientId,
    ) -> Result<Self, ValidationError> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err(ValidationError::BlankColor);
        }
        Ok(Self {
            model: Model::new(id, name)?,
            date,
            client_id,
            color,
        })
    }

    /// Color tag, e.g. `#FF6A00`.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replace the color tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankColor` if `color` is blank; the old
    /// color is kept.
    pub fn update_color(&mut self, color: impl Into<String>) -> Result<(), ValidationError> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err(ValidationError::BlankColor);
        }
        self.color = color;
        Ok(())
    }

    #[must_use]
    pub fn belongs_to_client(&self, client_id: ClientId) -> bool {
        self.client_id == client_id
    }
}
