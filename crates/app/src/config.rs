//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GROCERY_SEED_FILE` - YAML fixture to start from (default: built-in seed)
//! - `GROCERY_BEST_SELLERS_TOP` - Rows in the best-sellers report (default: 5)
//! - `GROCERY_EXPIRING_DAYS` - Horizon for "expiring soon" (default: 7)
//! - `GROCERY_LOG_FORMAT` - `text` or `json` (default: text)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::db::{Database, SeedData, SeedError};
use crate::services::analysis::DEFAULT_TOP;

const DEFAULT_EXPIRING_DAYS: u32 = 7;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected text or json)")),
        }
    }
}

/// Grocery application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed fixture to load instead of the built-in one.
    pub seed_file: Option<PathBuf>,
    /// Default size of the best-sellers report; at least 1.
    pub best_sellers_top: usize,
    /// Default horizon in days for expiring products.
    pub expiring_days: u32,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            best_sellers_top: DEFAULT_TOP,
            expiring_days: DEFAULT_EXPIRING_DAYS,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the process environment only; binaries load `.env` once at
    /// startup before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_file = get_optional(&lookup, "GROCERY_SEED_FILE").map(PathBuf::from);

        let best_sellers_top =
            get_parsed_or(&lookup, "GROCERY_BEST_SELLERS_TOP", DEFAULT_TOP)?;
        if best_sellers_top == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "GROCERY_BEST_SELLERS_TOP".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let expiring_days =
            get_parsed_or(&lookup, "GROCERY_EXPIRING_DAYS", DEFAULT_EXPIRING_DAYS)?;
        let log_format = get_parsed_or(&lookup, "GROCERY_LOG_FORMAT", LogFormat::Text)?;

        Ok(Self {
            seed_file,
            best_sellers_top,
            expiring_days,
            log_format,
        })
    }

    /// Seed data named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `SeedError` if the fixture cannot be read or parsed.
    pub fn seed_data(&self) -> Result<SeedData, SeedError> {
        match &self.seed_file {
            Some(path) => SeedData::from_file(path),
            None => SeedData::builtin(),
        }
    }

    /// Build the in-memory store from the configured seed data.
    ///
    /// # Errors
    ///
    /// Returns a `SeedError` if the fixture cannot be read, parsed, or
    /// turned into valid entities.
    pub fn open_database(&self) -> Result<Database, SeedError> {
        Database::from_seed(self.seed_data()?)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Parse a variable, falling back to `default` when unset.
fn get_parsed_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional(lookup, key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
