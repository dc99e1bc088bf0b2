//! Bought-products report: who put a product on which list.

use grocery_core::{ClientId, GroceryListId, ProductId};

use super::{Lookup, index_by};
use crate::db::{
    ClientRepository, Database, GroceryListItemRepository, GroceryListRepository,
    ProductRepository, RepositoryError,
};
use crate::models::{BoughtProduct, Client, GroceryList, GroceryListItem, Product};

/// Join every list item for `product_id` with its list, the list's owner,
/// and the product itself.
///
/// Rows follow item order. An item whose list, client, or product cannot be
/// resolved is skipped. `None` yields an empty report.
pub fn join_bought_products(
    product_id: Option<ProductId>,
    items: &[GroceryListItem],
    grocery_lists: &impl Lookup<GroceryListId, GroceryList>,
    clients: &impl Lookup<ClientId, Client>,
    products: &impl Lookup<ProductId, Product>,
) -> Vec<BoughtProduct> {
    let Some(product_id) = product_id else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.represents_product(product_id))
        .filter_map(|item| {
            let row = grocery_lists.lookup(item.grocery_list_id).and_then(|list| {
                let client = clients.lookup(list.client_id)?;
                let product = products.lookup(item.product_id)?;
                Some(BoughtProduct {
                    product: product.clone(),
                    client: client.clone(),
                    grocery_list: list.clone(),
                })
            });
            if row.is_none() {
                tracing::debug!(item = %item.id, "Skipping list item with dangling reference");
            }
            row
        })
        .collect()
}

/// Bought-products report over the whole store.
pub struct BoughtProductsService<'a> {
    items: GroceryListItemRepository<'a>,
    grocery_lists: GroceryListRepository<'a>,
    clients: ClientRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> BoughtProductsService<'a> {
    /// Create a new bought-products service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            items: db.grocery_list_items(),
            grocery_lists: db.grocery_lists(),
            clients: db.clients(),
            products: db.products(),
        }
    }

    /// Everyone who bought `product_id`, one row per list item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if a collection lock is poisoned.
    pub fn get(&self, product_id: Option<ProductId>) -> Result<Vec<BoughtProduct>, RepositoryError> {
        if product_id.is_none() {
            return Ok(Vec::new());
        }

        let items = self.items.get_all()?;
        let grocery_lists = index_by(self.grocery_lists.get_all()?, GroceryList::id);
        let clients = index_by(self.clients.get_all()?, Client::id);
        let products = index_by(self.products.get_all()?, Product::id);

        Ok(join_bought_products(
            product_id,
            &items,
            &grocery_lists,
            &clients,
            &products,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use grocery_core::{GroceryListItemId, Price};

    use super::*;

    struct Fixture {
        items: Vec<GroceryListItem>,
        lists: HashMap<GroceryListId, GroceryList>,
        clients: HashMap<ClientId, Client>,
        products: HashMap<ProductId, Product>,
    }

    impl Fixture {
        fn join(&self, product_id: Option<ProductId>) -> Vec<BoughtProduct> {
            join_bought_products(
                product_id,
                &self.items,
                &self.lists,
                &self.clients,
                &self.products,
            )
        }
    }

    fn list(id: i32, client: i32) -> GroceryList {
        GroceryList::new(
            GroceryListId::new(id),
            format!("List {id}"),
            NaiveDate::from_ymd_opt(2024, 12, id.try_into().unwrap()).unwrap(),
            "#FFFFFF",
            ClientId::new(client),
        )
        .unwrap()
    }

    fn client(id: i32) -> Client {
        Client::new(
            ClientId::new(id),
            format!("Client {id}"),
            &format!("user{id}@mail.com"),
            "aGFzaA==",
        )
        .unwrap()
    }

    fn product(id: i32) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            5,
            Price::from_cents(100).unwrap(),
        )
        .unwrap()
    }

    fn item(id: i32, list: i32, product: i32) -> GroceryListItem {
        GroceryListItem::new(
            GroceryListItemId::new(id),
            GroceryListId::new(list),
            ProductId::new(product),
            1,
        )
        .unwrap()
    }

    fn fixture() -> Fixture {
        Fixture {
            items: vec![item(1, 1, 7), item(2, 2, 8), item(3, 3, 7)],
            lists: index_by(vec![list(1, 1), list(2, 1), list(3, 2)], GroceryList::id),
            clients: index_by(vec![client(1), client(2)], Client::id),
            products: index_by(vec![product(7), product(8)], Product::id),
        }
    }

    #[test]
    fn test_rows_follow_item_order() {
        let rows = fixture().join(Some(ProductId::new(7)));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].grocery_list.id(), GroceryListId::new(1));
        assert_eq!(rows[0].client.id(), ClientId::new(1));
        assert_eq!(rows[1].grocery_list.id(), GroceryListId::new(3));
        assert_eq!(rows[1].client.id(), ClientId::new(2));
    }

    #[test]
    fn test_every_row_is_consistent() {
        let fixture = fixture();
        for id in [7, 8] {
            let product_id = ProductId::new(id);
            for row in fixture.join(Some(product_id)) {
                assert_eq!(row.product.id(), product_id);
                assert_eq!(row.client.id(), row.grocery_list.client_id);
            }
        }
    }

    #[test]
    fn test_none_gives_empty_report() {
        assert!(fixture().join(None).is_empty());
    }

    #[test]
    fn test_unknown_product_gives_empty_report() {
        assert!(fixture().join(Some(ProductId::new(99))).is_empty());
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let mut fixture = fixture();
        fixture.items.push(item(4, 42, 7));
        fixture.lists.insert(GroceryListId::new(5), list(5, 77));
        fixture.items.push(item(5, 5, 7));

        let rows = fixture.join(Some(ProductId::new(7)));
        let lists: Vec<i32> = rows.iter().map(|r| r.grocery_list.id().as_i32()).collect();
        assert_eq!(lists, vec![1, 3]);
    }

    #[test]
    fn test_missing_product_drops_resolved_rows() {
        let mut fixture = fixture();
        fixture.products.remove(&ProductId::new(7));

        assert!(fixture.join(Some(ProductId::new(7))).is_empty());
        assert_eq!(fixture.join(Some(ProductId::new(8))).len(), 1);
    }

    #[test]
    fn test_service_on_seeded_store() {
        let db = Database::seeded().unwrap();
        let rows = BoughtProductsService::new(&db)
            .get(Some(ProductId::new(1)))
            .unwrap();

        let lists: Vec<&str> = rows.iter().map(|r| r.grocery_list.name()).collect();
        assert_eq!(lists, vec!["Boodschappen familieweekend", "Kerstboodschappen"]);
        assert!(rows.iter().all(|r| r.client.name() == "M.J. Curie"));
    }

    #[test]
    fn test_service_none_short_circuits() {
        let db = Database::seeded().unwrap();
        assert!(BoughtProductsService::new(&db).get(None).unwrap().is_empty());
    }
}
