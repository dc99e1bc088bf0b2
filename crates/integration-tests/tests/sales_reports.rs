//! Integration tests for the best-sellers and bought-products reports.
//!
//! Run with: cargo test -p grocery-integration-tests --test sales_reports

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use grocery_app::services::analysis::{BestSellingService, BoughtProductsService, DEFAULT_TOP};
use grocery_app::services::grocery_list_items::GroceryListItemService;
use grocery_core::{ClientId, GroceryListId, ProductId};
use grocery_integration_tests::TestContext;

#[test]
fn test_best_sellers_on_fixture() {
    let ctx = TestContext::new();
    let report = BestSellingService::new(&ctx.db).best_selling(DEFAULT_TOP).unwrap();

    let rows: Vec<(i32, u32, u32, u32)> = report
        .iter()
        .map(|r| (r.product_id.as_i32(), r.sales, r.rank, r.stock))
        .collect();
    assert_eq!(rows, vec![(1, 2, 1, 300), (2, 2, 2, 100), (3, 1, 3, 400)]);
}

#[test]
fn test_best_sellers_follow_list_edits() {
    let ctx = TestContext::new();
    let items = GroceryListItemService::new(&ctx.db);

    // Brood joins two more lists and overtakes Melk and Kaas.
    items.add_product(GroceryListId::new(2), ProductId::new(3)).unwrap();
    items.add_product(GroceryListId::new(3), ProductId::new(3)).unwrap();

    let report = items.best_selling(2).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].name, "Brood");
    assert_eq!(report[0].sales, 3);
    assert_eq!(report[0].stock, 398);
    assert_eq!(report[1].name, "Melk");
}

#[test]
fn test_deleted_product_leaves_no_rank_gap() {
    let ctx = TestContext::new();
    ctx.db.products().delete(ProductId::new(1)).unwrap();

    let report = BestSellingService::new(&ctx.db).best_selling(DEFAULT_TOP).unwrap();
    let ranks: Vec<u32> = report.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2]);
    assert_eq!(report[0].name, "Kaas");
}

#[test]
fn test_bought_products_for_kaas() {
    let ctx = TestContext::new();
    let rows = BoughtProductsService::new(&ctx.db)
        .get(Some(ProductId::new(2)))
        .unwrap();

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.product.name(), "Kaas");
        assert_eq!(row.client.id(), ClientId::new(1));
        assert_eq!(row.client.id(), row.grocery_list.client_id);
        assert!(!row.was_purchased_by_admin());
    }
    assert_eq!(
        rows[1].description(),
        "M.J. Curie bought Kaas from list 'Kerstboodschappen' on 2024-12-07"
    );
}

#[test]
fn test_bought_products_skip_deleted_list() {
    let ctx = TestContext::new();
    ctx.db.grocery_lists().delete(GroceryListId::new(1)).unwrap();

    let rows = BoughtProductsService::new(&ctx.db)
        .get(Some(ProductId::new(1)))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].grocery_list.id(), GroceryListId::new(2));
}

#[test]
fn test_bought_products_without_product() {
    let ctx = TestContext::new();
    assert!(BoughtProductsService::new(&ctx.db).get(None).unwrap().is_empty());
    assert!(BoughtProductsService::new(&ctx.db)
        .get(Some(ProductId::new(10)))
        .unwrap()
        .is_empty());
}
