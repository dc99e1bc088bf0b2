//! Catalog queries.

use chrono::Local;
use rust_decimal::Decimal;
use tracing::info;

use grocery_app::Database;
use grocery_app::services::products::ProductService;
use grocery_core::ProductCategory;

/// Which slice of the catalog to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    All,
    InStock,
    OutOfStock,
    Search(String),
    Category(ProductCategory),
    /// Expiring within this many days from today.
    Expiring(u32),
    PriceRange(Decimal, Decimal),
}

/// Log the products matching `query`, followed by the stock value of the
/// whole catalog.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn products(db: &Database, query: &Query) -> Result<(), Box<dyn std::error::Error>> {
    let service = ProductService::new(db);
    let today = Local::now().date_naive();

    let products = match query {
        Query::All => service.get_all()?,
        Query::InStock => service.in_stock()?,
        Query::OutOfStock => service.out_of_stock()?,
        Query::Search(term) => service.search(term)?,
        Query::Category(category) => service.by_category(*category)?,
        Query::Expiring(days) => service.expiring(*days, today)?,
        Query::PriceRange(min, max) => service.by_price_range(*min, *max)?,
    };

    info!(query = ?query, matches = products.len(), "Products");
    for product in &products {
        info!(
            product_id = %product.id(),
            name = product.name(),
            category = %product.category,
            stock = product.stock,
            price = %product.price,
            best_before = ?product.best_before,
            expired = product.is_expired(today),
            "Product"
        );
    }

    info!(total = %service.total_stock_value()?, "Catalog stock value");
    Ok(())
}
