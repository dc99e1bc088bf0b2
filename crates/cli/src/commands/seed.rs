//! Seed fixture validation.
//!
//! Parses a YAML fixture, reports dangling references, and builds a store
//! from it so every row passes the domain rules.

use std::path::Path;

use tracing::{info, warn};

use grocery_app::Database;
use grocery_app::db::SeedData;

/// Check a seed fixture.
///
/// Dangling references are reported as warnings; they do not fail the
/// check because the reports skip rows they cannot resolve.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a row is
/// invalid or duplicated.
pub fn check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let seed = SeedData::from_file(path)?;

    info!(
        products = seed.products.len(),
        grocery_lists = seed.grocery_lists.len(),
        grocery_list_items = seed.grocery_list_items.len(),
        clients = seed.clients.len(),
        "Parsed seed data"
    );

    // Building the store logs each dangling reference.
    let issues = seed.validate().len();
    Database::from_seed(seed)?;

    if issues == 0 {
        info!("Seed data is consistent");
    } else {
        warn!(issues, "Seed data has dangling references");
    }
    Ok(())
}
