//! Read-only report rows produced by the analysis services.
//!
//! Rows own clones of the entities they describe, so later changes to the
//! store do not show through.

use chrono::NaiveDate;
use serde::Serialize;

use grocery_core::ProductId;

use super::{Client, GroceryList, Product};

/// Sales count threshold used by [`BestSellingProduct::is_top_performer`]
/// when the caller has no preference.
pub const DEFAULT_TOP_PERFORMER_THRESHOLD: u32 = 10;

/// One row of the best-selling products report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSellingProduct {
    pub product_id: ProductId,
    pub name: String,
    pub stock: u32,
    /// Number of list items referring to the product.
    pub sales: u32,
    /// 1-based position in the report.
    pub rank: u32,
}

impl BestSellingProduct {
    /// Sales per unit still in stock; `0.0` when out of stock.
    #[must_use]
    pub fn sales_performance_ratio(&self) -> f64 {
        if self.stock == 0 {
            return 0.0;
        }
        f64::from(self.sales) / f64::from(self.stock)
    }

    #[must_use]
    pub const fn is_top_performer(&self, threshold: u32) -> bool {
        self.sales >= threshold
    }
}

/// One purchase event: a product on a client's grocery list.
#[derive(Debug, Clone, Serialize)]
pub struct BoughtProduct {
    pub product: Product,
    pub client: Client,
    pub grocery_list: GroceryList,
}

impl BoughtProduct {
    /// Human-readable summary, e.g.
    /// `M.J. Curie bought Melk from list 'Kerstboodschappen' on 2024-12-07`.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} bought {} from list '{}' on {}",
            self.client.name(),
            self.product.name(),
            self.grocery_list.name(),
            self.grocery_list.date.format("%Y-%m-%d")
        )
    }

    #[must_use]
    pub const fn was_purchased_by_admin(&self) -> bool {
        self.client.is_admin()
    }

    /// The date of the list the product was bought on.
    #[must_use]
    pub const fn purchase_date(&self) -> NaiveDate {
        self.grocery_list.date
    }
}
