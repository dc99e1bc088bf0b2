//! Sales reports.

use tracing::info;

use grocery_app::Database;
use grocery_app::models::reports::DEFAULT_TOP_PERFORMER_THRESHOLD;
use grocery_app::services::analysis::{BestSellingService, BoughtProductsService};
use grocery_core::ProductId;

/// Log the `top` best-selling products.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn best_sellers(db: &Database, top: usize) -> Result<(), Box<dyn std::error::Error>> {
    let report = BestSellingService::new(db).best_selling(top)?;

    if report.is_empty() {
        info!("No sales recorded");
        return Ok(());
    }

    for row in &report {
        info!(
            rank = row.rank,
            product_id = %row.product_id,
            name = %row.name,
            sales = row.sales,
            stock = row.stock,
            ratio = format!("{:.3}", row.sales_performance_ratio()),
            top_performer = row.is_top_performer(DEFAULT_TOP_PERFORMER_THRESHOLD),
            "Best seller"
        );
    }
    Ok(())
}

/// Log every purchase of `product`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn bought(db: &Database, product: Option<i32>) -> Result<(), Box<dyn std::error::Error>> {
    let rows = BoughtProductsService::new(db).get(product.map(ProductId::new))?;

    info!(product = ?product, purchases = rows.len(), "Purchase history");
    for row in &rows {
        info!(
            client = %row.client.email,
            admin = row.was_purchased_by_admin(),
            date = %row.purchase_date(),
            "{}",
            row.description()
        );
    }
    Ok(())
}
