//! Grocery list item service.
//!
//! Moving a product onto a list takes one unit out of stock; every change
//! to an item's amount moves a unit between the shelf and the list, so
//! `stock + Σ amount` stays constant for a product.

use serde::Serialize;

use grocery_core::{GroceryListId, GroceryListItemId, ProductId};

use super::ServiceError;
use super::analysis::{BestSellingService, Lookup, index_by};
use super::products::name_matches;
use crate::db::{
    Database, GroceryListItemRepository, GroceryListRepository, ProductRepository,
    RepositoryError,
};
use crate::models::{BestSellingProduct, GroceryListItem, Product, ValidationError};

/// A list item together with the product it refers to.
///
/// `product` is `None` when the product has been removed from the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ListItemView {
    #[serde(flatten)]
    pub item: GroceryListItem,
    pub product: Option<Product>,
}

/// List item maintenance and stock bookkeeping.
pub struct GroceryListItemService<'a> {
    db: &'a Database,
    items: GroceryListItemRepository<'a>,
    lists: GroceryListRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> GroceryListItemService<'a> {
    /// Create a new list item service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            db,
            items: db.grocery_list_items(),
            lists: db.grocery_lists(),
            products: db.products(),
        }
    }

    /// All list items with their products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if a collection lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<ListItemView>, RepositoryError> {
        self.enrich(self.items.get_all()?)
    }

    /// Items on one list with their products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if a collection lock is poisoned.
    pub fn get_all_on_grocery_list(
        &self,
        grocery_list_id: GroceryListId,
    ) -> Result<Vec<ListItemView>, RepositoryError> {
        self.enrich(self.items.get_all_on_grocery_list(grocery_list_id)?)
    }

    /// Get an item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the item does not exist.
    pub fn get(&self, id: GroceryListItemId) -> Result<GroceryListItem, ServiceError> {
        self.items.get(id)?.ok_or(ServiceError::NotFound {
            entity: "grocery list item",
            id: id.as_i32(),
        })
    }

    /// Put one unit of a product on a list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the list or product does not exist,
    /// `ServiceError::AlreadyOnList` if the product is already on the list,
    /// and `ServiceError::OutOfStock` if no units are left.
    pub fn add_product(
        &self,
        grocery_list_id: GroceryListId,
        product_id: ProductId,
    ) -> Result<GroceryListItem, ServiceError> {
        if self.lists.get(grocery_list_id)?.is_none() {
            return Err(ServiceError::NotFound {
                entity: "grocery list",
                id: grocery_list_id.as_i32(),
            });
        }
        let mut ledger = self.db.stock_ledger()?;
        let mut product = ledger
            .product(product_id)
            .cloned()
            .ok_or_else(|| product_not_found(product_id))?;

        if ledger.item_on_list(grocery_list_id, product_id).is_some() {
            return Err(ServiceError::AlreadyOnList {
                grocery_list: grocery_list_id.as_i32(),
                product: product_id.as_i32(),
            });
        }
        if product.is_out_of_stock() {
            return Err(ServiceError::OutOfStock(product_id.as_i32()));
        }

        product.decrease_stock(1)?;
        let item = GroceryListItem::new(
            GroceryListItemId::new(0),
            grocery_list_id,
            product_id,
            1,
        )?;

        ledger.put_product(product);
        let item = ledger.insert_item(item);
        drop(ledger);

        tracing::info!(
            grocery_list_id = %grocery_list_id,
            product_id = %product_id,
            item_id = %item.id,
            "Product added to grocery list"
        );
        Ok(item)
    }

    /// Move one more unit of a product from stock onto a list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the product is not on the list or
    /// does not exist, and `ServiceError::OutOfStock` if no units are left.
    pub fn increase_amount(
        &self,
        grocery_list_id: GroceryListId,
        product_id: ProductId,
    ) -> Result<GroceryListItem, ServiceError> {
        let mut ledger = self.db.stock_ledger()?;
        let mut item = ledger
            .item_on_list(grocery_list_id, product_id)
            .cloned()
            .ok_or_else(|| not_on_list(product_id))?;
        let mut product = ledger
            .product(product_id)
            .cloned()
            .ok_or_else(|| product_not_found(product_id))?;

        if product.is_out_of_stock() {
            return Err(ServiceError::OutOfStock(product_id.as_i32()));
        }

        let amount = item
            .amount()
            .checked_add(1)
            .ok_or(ValidationError::Overflow)?;
        item.update_amount(amount)?;
        product.decrease_stock(1)?;

        ledger.put_product(product);
        ledger.put_item(item.clone());
        drop(ledger);

        tracing::debug!(item_id = %item.id, amount, "List item amount increased");
        Ok(item)
    }

    /// Move one unit of a product from a list back to stock.
    ///
    /// Returns the updated item, or `None` when the last unit was taken off
    /// and the item removed. Stock is only restored while the product still
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the product is not on the list.
    pub fn decrease_amount(
        &self,
        grocery_list_id: GroceryListId,
        product_id: ProductId,
    ) -> Result<Option<GroceryListItem>, ServiceError> {
        let mut ledger = self.db.stock_ledger()?;
        let mut item = ledger
            .item_on_list(grocery_list_id, product_id)
            .cloned()
            .ok_or_else(|| not_on_list(product_id))?;
        let restocked = match ledger.product(product_id).cloned() {
            Some(mut product) => {
                product.increase_stock(1)?;
                Some(product)
            }
            None => None,
        };

        if item.amount() == 1 {
            if let Some(product) = restocked {
                ledger.put_product(product);
            }
            ledger.remove_item(item.id);
            drop(ledger);

            tracing::info!(
                grocery_list_id = %grocery_list_id,
                product_id = %product_id,
                "Product removed from grocery list"
            );
            return Ok(None);
        }

        item.update_amount(item.amount().saturating_sub(1))?;
        if let Some(product) = restocked {
            ledger.put_product(product);
        }
        ledger.put_item(item.clone());
        drop(ledger);

        tracing::debug!(item_id = %item.id, amount = item.amount(), "List item amount decreased");
        Ok(Some(item))
    }

    /// Products that can still be added to a list: in stock, not on the list
    /// yet, and matching `search` (case-insensitive; blank matches all).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if a collection lock is poisoned.
    pub fn available_products(
        &self,
        grocery_list_id: GroceryListId,
        search: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        let on_list = self.items.get_all_on_grocery_list(grocery_list_id)?;
        let term = search.trim().to_lowercase();

        let mut products = self.products.get_all()?;
        products.retain(|product| {
            product.is_in_stock()
                && !on_list.iter().any(|item| item.represents_product(product.id()))
                && (term.is_empty() || name_matches(product, &term))
        });
        Ok(products)
    }

    /// Pretty-printed JSON of a list's items with their products.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Serialization` if encoding fails.
    pub fn export_json(&self, grocery_list_id: GroceryListId) -> Result<String, ServiceError> {
        let items = self.get_all_on_grocery_list(grocery_list_id)?;
        Ok(serde_json::to_string_pretty(&items)?)
    }

    /// The `top` best-selling products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if a collection lock is poisoned.
    pub fn best_selling(&self, top: usize) -> Result<Vec<BestSellingProduct>, RepositoryError> {
        BestSellingService::new(self.db).best_selling(top)
    }

    fn enrich(&self, items: Vec<GroceryListItem>) -> Result<Vec<ListItemView>, RepositoryError> {
        let products = index_by(self.products.get_all()?, Product::id);
        Ok(items
            .into_iter()
            .map(|item| ListItemView {
                product: products.lookup(item.product_id).cloned(),
                item,
            })
            .collect())
    }
}

fn product_not_found(product_id: ProductId) -> ServiceError {
    ServiceError::NotFound {
        entity: "product",
        id: product_id.as_i32(),
    }
}

fn not_on_list(product_id: ProductId) -> ServiceError {
    ServiceError::NotFound {
        entity: "product on grocery list",
        id: product_id.as_i32(),
    }
}
