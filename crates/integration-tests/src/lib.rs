//! Integration tests for the grocery services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p grocery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `login_flow` - Authentication against the seeded clients
//! - `sales_reports` - Best sellers and purchase history
//! - `list_items` - Stock bookkeeping while editing lists
//! - `seed_files` - Loading fixtures through `AppConfig`
//!
//! Every test builds its own [`TestContext`], so tests never share state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use secrecy::SecretString;

use grocery_app::{AppConfig, Database};

/// Password of each seeded client, by email.
pub const SEEDED_PASSWORDS: [(&str, &str); 3] = [
    ("user1@mail.com", "curie-secret"),
    ("user2@mail.com", "hermans-secret"),
    ("user3@mail.com", "kwak-admin"),
];

/// A fresh store seeded with the built-in fixture.
pub struct TestContext {
    pub db: Database,
}

impl TestContext {
    /// Build a context from the built-in fixture.
    ///
    /// # Panics
    ///
    /// Panics if the bundled fixture is broken.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            db: AppConfig::default()
                .open_database()
                .expect("built-in fixture loads"),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a test password.
#[must_use]
pub fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_owned())
}

/// A path under the system temp directory unique to this process and `name`.
#[must_use]
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("grocery-{}-{name}", std::process::id()))
}
