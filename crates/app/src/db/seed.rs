//! Seed data loading.
//!
//! Seed files are YAML documents with four top-level sequences (`products`,
//! `grocery_lists`, `grocery_list_items`, `clients`); see
//! `crates/app/fixtures/default.yaml` for the built-in fixture.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use grocery_core::{
    ClientId, GroceryListId, GroceryListItemId, Price, PriceError, ProductCategory, ProductId,
    Role,
};

use crate::models::{Client, GroceryList, GroceryListItem, Product, ValidationError};

const BUILTIN_FIXTURE: &str = include_str!("../../fixtures/default.yaml");

/// Errors that can occur while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid YAML of the expected shape.
    #[error("failed to parse seed data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A row violates a domain rule.
    #[error("invalid {entity} {id}: {source}")]
    Invalid {
        entity: &'static str,
        id: i32,
        #[source]
        source: ValidationError,
    },

    /// A product price is not positive.
    #[error("invalid price for product {id}: {source}")]
    Price {
        id: i32,
        #[source]
        source: PriceError,
    },

    /// Two rows of the same collection share an ID.
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: i32 },
}

/// A product row as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub stock: u32,
    pub price: Decimal,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub best_before: Option<NaiveDate>,
}

/// A grocery list row as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryListRecord {
    pub id: GroceryListId,
    pub name: String,
    pub date: NaiveDate,
    pub color: String,
    pub client_id: ClientId,
}

/// A grocery list item row as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryListItemRecord {
    pub id: GroceryListItemId,
    pub grocery_list_id: GroceryListId,
    pub product_id: ProductId,
    pub amount: u32,
}

/// A client row as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
}

/// Raw contents of a seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub grocery_lists: Vec<GroceryListRecord>,
    #[serde(default)]
    pub grocery_list_items: Vec<GroceryListItemRecord>,
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
}

/// A dangling reference found by [`SeedData::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedIssue {
    /// An item points at a list that does not exist.
    MissingGroceryList {
        item: GroceryListItemId,
        grocery_list: GroceryListId,
    },
    /// An item points at a product that does not exist.
    MissingProduct {
        item: GroceryListItemId,
        product: ProductId,
    },
    /// A list is owned by a client that does not exist.
    MissingClient {
        grocery_list: GroceryListId,
        client: ClientId,
    },
}

impl fmt::Display for SeedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGroceryList { item, grocery_list } => {
                write!(f, "item {item} refers to missing grocery list {grocery_list}")
            }
            Self::MissingProduct { item, product } => {
                write!(f, "item {item} refers to missing product {product}")
            }
            Self::MissingClient {
                grocery_list,
                client,
            } => write!(f, "grocery list {grocery_list} refers to missing client {client}"),
        }
    }
}

impl SeedData {
    /// Parse seed data from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Yaml` if the document does not match the expected shape.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML seed file.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Io` if the file cannot be read, or `SeedError::Yaml`
    /// if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loading seed data from file");
        Self::from_yaml_str(&content)
    }

    /// The fixture bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Yaml` only if the bundled fixture is broken.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_yaml_str(BUILTIN_FIXTURE)
    }

    /// Report references that do not resolve.
    ///
    /// These are not fatal: the analysis services skip rows they cannot
    /// resolve. The list exists so integrity problems can be surfaced.
    #[must_use]
    pub fn validate(&self) -> Vec<SeedIssue> {
        let product_ids: HashSet<ProductId> = self.products.iter().map(|p| p.id).collect();
        let list_ids: HashSet<GroceryListId> = self.grocery_lists.iter().map(|l| l.id).collect();
        let client_ids: HashSet<ClientId> = self.clients.iter().map(|c| c.id).collect();

        let mut issues = Vec::new();
        for list in &self.grocery_lists {
            if !client_ids.contains(&list.client_id) {
                issues.push(SeedIssue::MissingClient {
                    grocery_list: list.id,
                    client: list.client_id,
                });
            }
        }
        for item in &self.grocery_list_items {
            if !list_ids.contains(&item.grocery_list_id) {
                issues.push(SeedIssue::MissingGroceryList {
                    item: item.id,
                    grocery_list: item.grocery_list_id,
                });
            }
            if !product_ids.contains(&item.product_id) {
                issues.push(SeedIssue::MissingProduct {
                    item: item.id,
                    product: item.product_id,
                });
            }
        }
        issues
    }

    /// Convert every row into a validated entity.
    ///
    /// # Errors
    ///
    /// Returns the first invalid row or duplicate ID encountered.
    #[allow(clippy::type_complexity)]
    pub fn into_entities(
        self,
    ) -> Result<
        (
            Vec<Product>,
            Vec<GroceryList>,
            Vec<GroceryListItem>,
            Vec<Client>,
        ),
        SeedError,
    > {
        ensure_unique("product", self.products.iter().map(|p| p.id.as_i32()))?;
        ensure_unique("grocery list", self.grocery_lists.iter().map(|l| l.id.as_i32()))?;
        ensure_unique(
            "grocery list item",
            self.grocery_list_items.iter().map(|i| i.id.as_i32()),
        )?;
        ensure_unique("client", self.clients.iter().map(|c| c.id.as_i32()))?;

        let products = self
            .products
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<Result<Vec<_>, _>>()?;
        let grocery_lists = self
            .grocery_lists
            .into_iter()
            .map(|r| {
                GroceryList::new(r.id, r.name, r.date, r.color, r.client_id)
                    .map_err(invalid("grocery list", r.id.as_i32()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let grocery_list_items = self
            .grocery_list_items
            .into_iter()
            .map(|r| {
                GroceryListItem::new(r.id, r.grocery_list_id, r.product_id, r.amount)
                    .map_err(invalid("grocery list item", r.id.as_i32()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let clients = self
            .clients
            .into_iter()
            .map(|r| {
                Client::new(r.id, r.name, &r.email, r.password_hash)
                    .map(|client| client.with_role(r.role))
                    .map_err(invalid("client", r.id.as_i32()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, grocery_lists, grocery_list_items, clients))
    }
}

impl ProductRecord {
    fn into_product(self) -> Result<Product, SeedError> {
        let id = self.id.as_i32();
        let price = Price::new(self.price).map_err(|source| SeedError::Price { id, source })?;
        let product = Product::new(self.id, self.name, self.stock, price)
            .map_err(invalid("product", id))?
            .with_category(self.category);
        Ok(match self.best_before {
            Some(date) => product.with_best_before(date),
            None => product,
        })
    }
}

fn invalid(entity: &'static str, id: i32) -> impl FnOnce(ValidationError) -> SeedError {
    move |source| SeedError::Invalid { entity, id, source }
}

fn ensure_unique(
    entity: &'static str,
    ids: impl IntoIterator<Item = i32>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { entity, id });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixture_parses() {
        let seed = SeedData::builtin().unwrap();
        assert_eq!(seed.products.len(), 10);
        assert_eq!(seed.grocery_lists.len(), 3);
        assert_eq!(seed.grocery_list_items.len(), 5);
        assert_eq!(seed.clients.len(), 3);
        assert_eq!(seed.clients[2].role, Role::Admin);
        assert!(seed.validate().is_empty());
    }

    #[test]
    fn test_builtin_fixture_converts() {
        let (products, _, items, clients) = SeedData::builtin().unwrap().into_entities().unwrap();
        assert_eq!(products[0].name(), "Melk");
        assert_eq!(products[0].category, ProductCategory::Dairy);
        assert_eq!(products[3].stock, 0);
        assert_eq!(items[4].amount(), 5);
        assert!(clients[2].is_admin());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedData::from_yaml_str("products: []").unwrap();
        assert!(seed.clients.is_empty());
        assert!(seed.grocery_list_items.is_empty());
    }

    #[test]
    fn test_validate_reports_dangling_references() {
        let seed = SeedData::from_yaml_str(
            r"
grocery_lists:
  - { id: 1, name: Lijst, date: 2024-12-01, color: red, client_id: 9 }
grocery_list_items:
  - { id: 1, grocery_list_id: 2, product_id: 7, amount: 1 }
",
        )
        .unwrap();

        let issues = seed.validate();
        assert_eq!(
            issues,
            vec![
                SeedIssue::MissingClient {
                    grocery_list: GroceryListId::new(1),
                    client: ClientId::new(9),
                },
                SeedIssue::MissingGroceryList {
                    item: GroceryListItemId::new(1),
                    grocery_list: GroceryListId::new(2),
                },
                SeedIssue::MissingProduct {
                    item: GroceryListItemId::new(1),
                    product: ProductId::new(7),
                },
            ]
        );
        assert_eq!(
            issues[0].to_string(),
            "grocery list 1 refers to missing client 9"
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        let seed = SeedData::from_yaml_str(
            "grocery_list_items:\n  - { id: 4, grocery_list_id: 1, product_id: 1, amount: 0 }\n",
        )
        .unwrap();
        let err = seed.into_entities().unwrap_err();
        assert!(matches!(
            err,
            SeedError::Invalid {
                entity: "grocery list item",
                id: 4,
                source: ValidationError::ZeroAmount
            }
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let seed = SeedData::from_yaml_str(
            "products:\n  - { id: 1, name: Gratis, stock: 1, price: \"0\" }\n",
        )
        .unwrap();
        assert!(matches!(
            seed.into_entities().unwrap_err(),
            SeedError::Price { id: 1, .. }
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let seed = SeedData::from_yaml_str(
            r#"
products:
  - { id: 1, name: Melk, stock: 1, price: "1.00" }
  - { id: 1, name: Kaas, stock: 1, price: "2.00" }
"#,
        )
        .unwrap();
        assert!(matches!(
            seed.into_entities().unwrap_err(),
            SeedError::DuplicateId {
                entity: "product",
                id: 1
            }
        ));
    }

    #[test]
    fn test_negative_stock_is_a_parse_error() {
        let result = SeedData::from_yaml_str(
            "products:\n  - { id: 1, name: Melk, stock: -1, price: \"1.00\" }\n",
        );
        assert!(matches!(result, Err(SeedError::Yaml(_))));
    }
}
