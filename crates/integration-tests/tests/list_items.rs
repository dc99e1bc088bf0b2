//! Integration tests for editing grocery lists and the stock they draw on.
//!
//! Run with: cargo test -p grocery-integration-tests --test list_items

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::NaiveDate;

use grocery_app::models::GroceryList;
use grocery_app::services::ServiceError;
use grocery_app::services::grocery_list_items::GroceryListItemService;
use grocery_app::services::grocery_lists::GroceryListService;
use grocery_app::services::products::ProductService;
use grocery_core::{ClientId, GroceryListId, ProductId};
use grocery_integration_tests::TestContext;

/// Stock on the shelf plus units on every list.
fn units_of(ctx: &TestContext, product: ProductId) -> u32 {
    let stock = ctx.db.products().get(product).unwrap().unwrap().stock;
    let on_lists: u32 = ctx
        .db
        .grocery_list_items()
        .get_all()
        .unwrap()
        .iter()
        .filter(|item| item.represents_product(product))
        .map(|item| item.amount())
        .sum();
    stock + on_lists
}

#[test]
fn test_new_list_flow() {
    let ctx = TestContext::new();
    let lists = GroceryListService::new(&ctx.db);
    let items = GroceryListItemService::new(&ctx.db);

    let list = lists
        .add(
            GroceryList::new(
                GroceryListId::new(0),
                "Oudejaarsavond",
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                "#FFD700",
                ClientId::new(2),
            )
            .unwrap(),
        )
        .unwrap();
    assert_eq!(list.id(), GroceryListId::new(4));

    items.add_product(list.id(), ProductId::new(7)).unwrap();
    items.add_product(list.id(), ProductId::new(10)).unwrap();
    items.increase_amount(list.id(), ProductId::new(7)).unwrap();

    let views = items.get_all_on_grocery_list(list.id()).unwrap();
    let summary: Vec<(&str, u32)> = views
        .iter()
        .map(|v| (v.product.as_ref().unwrap().name(), v.item.amount()))
        .collect();
    assert_eq!(summary, vec![("Cola", 2), ("Chips", 1)]);

    let available = items.available_products(list.id(), "").unwrap();
    assert!(available.iter().all(|p| p.id() != ProductId::new(7)));
    assert!(available.iter().all(|p| p.is_in_stock()));
}

#[test]
fn test_stock_is_conserved() {
    let ctx = TestContext::new();
    let items = GroceryListItemService::new(&ctx.db);
    let list = GroceryListId::new(3);
    let product = ProductId::new(8);
    let before = units_of(&ctx, product);

    items.add_product(list, product).unwrap();
    assert_eq!(units_of(&ctx, product), before);
    for _ in 0..4 {
        items.increase_amount(list, product).unwrap();
    }
    assert_eq!(units_of(&ctx, product), before);
    items.decrease_amount(list, product).unwrap();
    assert_eq!(units_of(&ctx, product), before);
}

#[test]
fn test_cannot_take_more_than_the_shelf_holds() {
    let ctx = TestContext::new();
    let products = ProductService::new(&ctx.db);
    let items = GroceryListItemService::new(&ctx.db);
    let list = GroceryListId::new(3);

    let mut ijs = products.get(ProductId::new(8)).unwrap();
    ijs.stock = 2;
    products.update(ijs).unwrap();

    items.add_product(list, ProductId::new(8)).unwrap();
    items.increase_amount(list, ProductId::new(8)).unwrap();
    assert!(matches!(
        items.increase_amount(list, ProductId::new(8)),
        Err(ServiceError::OutOfStock(8))
    ));
    assert!(products.out_of_stock().unwrap().iter().any(|p| p.name() == "IJs"));
}

#[test]
fn test_removing_last_unit_drops_item() {
    let ctx = TestContext::new();
    let items = GroceryListItemService::new(&ctx.db);
    let list = GroceryListId::new(1);

    assert!(items.decrease_amount(list, ProductId::new(2)).unwrap().is_none());
    assert_eq!(items.get_all_on_grocery_list(list).unwrap().len(), 2);
    assert!(items
        .available_products(list, "kaas")
        .unwrap()
        .iter()
        .any(|p| p.id() == ProductId::new(2)));
}

#[test]
fn test_export_reflects_edits() {
    let ctx = TestContext::new();
    let items = GroceryListItemService::new(&ctx.db);
    let list = GroceryListId::new(3);

    items.add_product(list, ProductId::new(5)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&items.export_json(list).unwrap()).unwrap();

    assert_eq!(json[0]["product"]["name"], "Appels");
    assert_eq!(json[0]["product"]["stock"], 149);
    assert_eq!(json[0]["amount"], 1);
}
