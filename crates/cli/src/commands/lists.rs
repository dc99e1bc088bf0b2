//! Grocery list commands.

use std::io::Write;
use std::path::Path;

use tracing::info;

use grocery_app::Database;
use grocery_app::services::grocery_list_items::GroceryListItemService;
use grocery_app::services::grocery_lists::GroceryListService;
use grocery_core::{ClientId, GroceryListId};

/// Log grocery lists, optionally only those of one client.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn lists(db: &Database, client: Option<i32>) -> Result<(), Box<dyn std::error::Error>> {
    let service = GroceryListService::new(db);
    let lists = match client {
        Some(id) => service.for_client(ClientId::new(id))?,
        None => service.get_all()?,
    };

    info!(count = lists.len(), "Grocery lists");
    for list in &lists {
        info!(
            grocery_list_id = %list.id(),
            name = list.name(),
            date = %list.date,
            color = list.color(),
            client_id = %list.client_id,
            "Grocery list"
        );
    }
    Ok(())
}

/// Log the items on a list and, when `available` is set, the products that
/// could still be added (filtered by it when non-blank).
///
/// # Errors
///
/// Returns an error if the list does not exist or the store cannot be read.
pub fn items(
    db: &Database,
    list: i32,
    available: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = GroceryListService::new(db).get(GroceryListId::new(list))?;
    let service = GroceryListItemService::new(db);
    let items = service.get_all_on_grocery_list(list.id())?;

    info!(list = %list.model, items = items.len(), "Grocery list items");
    for view in &items {
        info!(
            item_id = %view.item.id,
            product = view.product.as_ref().map_or("<removed>", |p| p.name()),
            amount = view.item.amount(),
            "Item"
        );
    }

    if let Some(search) = available {
        let products = service.available_products(list.id(), search)?;
        info!(search, count = products.len(), "Available products");
        for product in &products {
            info!(
                product_id = %product.id(),
                name = product.name(),
                stock = product.stock,
                "Available"
            );
        }
    }
    Ok(())
}

/// Export a list as pretty JSON to `output`, or to standard output.
///
/// # Errors
///
/// Returns an error if the list cannot be serialized or written.
pub fn export(
    db: &Database,
    list: i32,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = GroceryListService::new(db).get(GroceryListId::new(list))?;
    let json = GroceryListItemService::new(db).export_json(list.id())?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!(list = %list.model, path = %path.display(), "Grocery list exported");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
