//! Sales analytics over the grocery list items.
//!
//! - [`best_selling`] - Products ranked by how many list items refer to them
//! - [`bought_products`] - Purchase history of one product
//!
//! The ranking and join functions are pure: they take already materialized
//! collections plus [`Lookup`] maps and never fail. The service wrappers
//! snapshot the repositories and hand the data over.

pub mod best_selling;
pub mod bought_products;

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

pub use best_selling::{BestSellingService, DEFAULT_TOP, rank_best_sellers};
pub use bought_products::{BoughtProductsService, join_bought_products};

/// Keyed read access to one entity collection.
pub trait Lookup<Id, T> {
    /// The entity with `id`, if present.
    fn lookup(&self, id: Id) -> Option<&T>;
}

impl<Id, T, S> Lookup<Id, T> for HashMap<Id, T, S>
where
    Id: Eq + Hash,
    S: BuildHasher,
{
    fn lookup(&self, id: Id) -> Option<&T> {
        self.get(&id)
    }
}

/// Index `rows` by the key `key` extracts. Later rows win on duplicate keys.
pub fn index_by<Id, T>(rows: Vec<T>, key: impl Fn(&T) -> Id) -> HashMap<Id, T>
where
    Id: Eq + Hash,
{
    rows.into_iter().map(|row| (key(&row), row)).collect()
}
