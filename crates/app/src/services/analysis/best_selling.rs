//! Best-selling products report.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use grocery_core::ProductId;

use super::{Lookup, index_by};
use crate::db::{Database, GroceryListItemRepository, ProductRepository, RepositoryError};
use crate::models::{BestSellingProduct, GroceryListItem, Product};

/// Number of rows in the report when the caller does not ask for another size.
pub const DEFAULT_TOP: usize = 5;

/// Rank products by the number of list items that refer to them.
///
/// Items are grouped by product and the groups sorted by size, largest
/// first; ties keep the order in which each product first appeared. The
/// first `top` groups are resolved against `products`. Groups whose product
/// no longer exists are dropped before ranks are handed out, so ranks always
/// run `1..=K` without gaps.
pub fn rank_best_sellers(
    items: &[GroceryListItem],
    products: &impl Lookup<ProductId, Product>,
    top: usize,
) -> Vec<BestSellingProduct> {
    let mut sales: Vec<(ProductId, u32)> = Vec::new();
    let mut positions: HashMap<ProductId, usize> = HashMap::new();

    for item in items {
        match positions.entry(item.product_id) {
            Entry::Occupied(entry) => {
                if let Some((_, count)) = sales.get_mut(*entry.get()) {
                    *count = count.saturating_add(1);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(sales.len());
                sales.push((item.product_id, 1));
            }
        }
    }

    // Stable: equal counts stay in first-seen order.
    sales.sort_by(|a, b| b.1.cmp(&a.1));

    sales
        .into_iter()
        .take(top)
        .filter_map(|(product_id, count)| {
            let product = products.lookup(product_id);
            if product.is_none() {
                tracing::debug!(%product_id, "Skipping sales of unknown product");
            }
            product.map(|product| (product, count))
        })
        .zip(1..)
        .map(|((product, count), rank)| BestSellingProduct {
            product_id: product.id(),
            name: product.name().to_owned(),
            stock: product.stock,
            sales: count,
            rank,
        })
        .collect()
}

/// Best-selling products over the whole store.
pub struct BestSellingService<'a> {
    items: GroceryListItemRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> BestSellingService<'a> {
    /// Create a new best-selling service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            items: db.grocery_list_items(),
            products: db.products(),
        }
    }

    /// The `top` best-selling products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if a collection lock is poisoned.
    pub fn best_selling(&self, top: usize) -> Result<Vec<BestSellingProduct>, RepositoryError> {
        let items = self.items.get_all()?;
        let products = index_by(self.products.get_all()?, Product::id);
        let report = rank_best_sellers(&items, &products, top);
        tracing::debug!(top, rows = report.len(), "Best-selling report built");
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use grocery_core::{GroceryListId, GroceryListItemId, Price};

    use super::*;

    fn item(id: i32, product: i32) -> GroceryListItem {
        GroceryListItem::new(
            GroceryListItemId::new(id),
            GroceryListId::new(1),
            ProductId::new(product),
            1,
        )
        .unwrap()
    }

    fn items(products: &[i32]) -> Vec<GroceryListItem> {
        (1..).zip(products).map(|(id, &p)| item(id, p)).collect()
    }

    fn catalog(ids: &[i32]) -> HashMap<ProductId, Product> {
        let products = ids
            .iter()
            .map(|&id| {
                Product::new(
                    ProductId::new(id),
                    format!("Product {id}"),
                    10,
                    Price::from_cents(100).unwrap(),
                )
                .unwrap()
            })
            .collect();
        index_by(products, Product::id)
    }

    fn ranks(report: &[BestSellingProduct]) -> Vec<u32> {
        report.iter().map(|row| row.rank).collect()
    }

    #[test]
    fn test_two_products_example() {
        let report = rank_best_sellers(&items(&[1, 1, 2]), &catalog(&[1, 2]), DEFAULT_TOP);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].product_id, ProductId::new(1));
        assert_eq!(report[0].sales, 2);
        assert_eq!(report[0].rank, 1);
        assert_eq!(report[1].product_id, ProductId::new(2));
        assert_eq!(report[1].sales, 1);
        assert_eq!(report[1].rank, 2);
    }

    #[test]
    fn test_empty_items_give_empty_report() {
        assert!(rank_best_sellers(&[], &catalog(&[1]), DEFAULT_TOP).is_empty());
    }

    #[test]
    fn test_top_zero_gives_empty_report() {
        assert!(rank_best_sellers(&items(&[1]), &catalog(&[1]), 0).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let report = rank_best_sellers(&items(&[3, 1, 2, 1, 3, 2]), &catalog(&[1, 2, 3]), 5);
        let order: Vec<i32> = report.iter().map(|r| r.product_id.as_i32()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_truncates_to_top() {
        let report = rank_best_sellers(
            &items(&[1, 1, 1, 2, 2, 3, 4, 5, 6, 7]),
            &catalog(&[1, 2, 3, 4, 5, 6, 7]),
            3,
        );
        assert_eq!(ranks(&report), vec![1, 2, 3]);
        assert_eq!(report[0].sales, 3);
        assert_eq!(report[1].sales, 2);
    }

    #[test]
    fn test_unknown_products_leave_no_rank_gaps() {
        // Product 9 is the best seller but no longer exists.
        let report = rank_best_sellers(&items(&[9, 9, 9, 1, 1, 2]), &catalog(&[1, 2]), 5);

        assert_eq!(ranks(&report), vec![1, 2]);
        assert_eq!(report[0].product_id, ProductId::new(1));
        assert_eq!(report[0].sales, 2);
    }

    #[test]
    fn test_unknown_product_still_consumes_a_top_slot() {
        let report = rank_best_sellers(&items(&[9, 9, 1]), &catalog(&[1]), 1);
        assert!(report.is_empty());
    }

    #[test]
    fn test_ranks_dense_and_sales_non_increasing() {
        let ids = [4, 2, 4, 7, 2, 4, 8, 1, 7, 7, 7, 3, 2, 5, 6, 9, 4];
        for top in 0..10 {
            let report = rank_best_sellers(&items(&ids), &catalog(&[1, 2, 3, 4, 5, 7, 9]), top);

            assert!(report.len() <= top);
            let expected: Vec<u32> = (1..=u32::try_from(report.len()).unwrap()).collect();
            assert_eq!(ranks(&report), expected);
            assert!(report.windows(2).all(|w| w[0].sales >= w[1].sales));
        }
    }

    #[test]
    fn test_row_copies_product_snapshot() {
        let report = rank_best_sellers(&items(&[2]), &catalog(&[2]), 5);
        assert_eq!(report[0].name, "Product 2");
        assert_eq!(report[0].stock, 10);
    }

    #[test]
    fn test_service_on_seeded_store() {
        let db = Database::seeded().unwrap();
        let report = BestSellingService::new(&db).best_selling(DEFAULT_TOP).unwrap();

        let summary: Vec<(&str, u32, u32)> = report
            .iter()
            .map(|r| (r.name.as_str(), r.sales, r.rank))
            .collect();
        assert_eq!(
            summary,
            vec![("Melk", 2, 1), ("Kaas", 2, 2), ("Brood", 1, 3)]
        );
    }
}
