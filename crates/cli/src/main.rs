//! Grocery CLI - Reports, catalog queries, and credential tools.
//!
//! # Usage
//!
//! ```bash
//! # Top five best-selling products
//! grocery best-sellers
//!
//! # Everyone who bought product 1
//! grocery bought --product 1
//!
//! # Check a client's credentials
//! GROCERY_PASSWORD=curie-secret grocery login --email user1@mail.com
//!
//! # Products expiring within the configured horizon
//! grocery products --expiring
//!
//! # Export a grocery list as JSON
//! grocery export --list 1 --output boodschappen.json
//!
//! # Validate a seed fixture
//! grocery seed check fixtures/default.yaml
//! ```
//!
//! # Commands
//!
//! - `best-sellers` - Products ranked by sales
//! - `bought` - Purchase history of one product
//! - `login` - Verify an email and password
//! - `hash-password` - Produce a stored password hash
//! - `products` - Query the catalog
//! - `lists` - Show grocery lists
//! - `items` - Show the items on a grocery list
//! - `export` - Export a grocery list as JSON
//! - `seed check` - Validate a seed fixture

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grocery_app::AppConfig;
use grocery_app::config::{ConfigError, LogFormat};
use grocery_core::ProductCategory;

mod commands;

#[derive(Parser)]
#[command(name = "grocery")]
#[command(author, version, about = "Grocery list reports and tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the best-selling products
    BestSellers {
        /// Number of products (default: `GROCERY_BEST_SELLERS_TOP`)
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// Show who bought a product
    Bought {
        /// Product ID; without it the report is empty
        #[arg(short, long)]
        product: Option<i32>,
    },
    /// Log in with email and password
    Login {
        /// Client email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long, env = "GROCERY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Hash a password for a seed fixture
    HashPassword {
        /// Password to hash
        #[arg(short, long, env = "GROCERY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Query the product catalog
    Products(ProductFilter),
    /// Show grocery lists
    Lists {
        /// Only lists owned by this client
        #[arg(short, long)]
        client: Option<i32>,
    },
    /// Show the items on a grocery list
    Items {
        /// Grocery list ID
        #[arg(short, long)]
        list: i32,

        /// Also show products that can still be added, optionally filtered
        #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
        available: Option<String>,
    },
    /// Export a grocery list as JSON
    Export {
        /// Grocery list ID
        #[arg(short, long)]
        list: i32,

        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Work with seed fixtures
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
}

/// Catalog filters; at most one applies.
#[derive(Args)]
#[group(multiple = false)]
struct ProductFilter {
    /// Only products with stock
    #[arg(long)]
    in_stock: bool,

    /// Only products without stock
    #[arg(long)]
    out_of_stock: bool,

    /// Case-insensitive name search
    #[arg(short, long)]
    search: Option<String>,

    /// Only products in this category
    #[arg(short, long)]
    category: Option<ProductCategory>,

    /// Products expiring within DAYS (default: `GROCERY_EXPIRING_DAYS`)
    #[arg(long, value_name = "DAYS", num_args = 0..=1)]
    expiring: Option<Option<u32>>,

    /// Products priced between MIN and MAX (inclusive)
    #[arg(long, value_names = ["MIN", "MAX"], num_args = 2)]
    price_range: Option<Vec<Decimal>>,
}

#[derive(Subcommand)]
enum SeedAction {
    /// Parse a fixture and report integrity issues
    Check {
        /// Path to the YAML fixture
        file: PathBuf,
    },
}

fn main() {
    // Load .env before clap reads GROCERY_PASSWORD
    dotenvy::dotenv().ok();

    init_tracing(log_format_from_env());

    let cli = Cli::parse();

    if let Err(e) = run(cli, AppConfig::from_env) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// `GROCERY_LOG_FORMAT`, or text when unset or unreadable. Commands that
/// load the full configuration still report a malformed value.
fn log_format_from_env() -> LogFormat {
    std::env::var("GROCERY_LOG_FORMAT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grocery_cli=info,grocery_app=info".into());

    let json = format == LogFormat::Json;
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().without_time());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(
    cli: Cli,
    load_config: impl FnOnce() -> Result<AppConfig, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed {
            action: SeedAction::Check { file },
        } => commands::seed::check(&file),
        Commands::HashPassword { password } => {
            commands::auth::hash_password(&SecretString::from(password))
        }
        command => run_with_database(command, &load_config()?),
    }
}

fn run_with_database(
    command: Commands,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = config.open_database()?;

    match command {
        Commands::BestSellers { top } => {
            commands::reports::best_sellers(&db, top.unwrap_or(config.best_sellers_top))?;
        }
        Commands::Bought { product } => commands::reports::bought(&db, product)?,
        Commands::Login { email, password } => {
            commands::auth::login(&db, &email, &SecretString::from(password))?;
        }
        Commands::Products(filter) => {
            commands::catalog::products(&db, &filter.into_query(config.expiring_days))?;
        }
        Commands::Lists { client } => commands::lists::lists(&db, client)?,
        Commands::Items { list, available } => {
            commands::lists::items(&db, list, available.as_deref())?;
        }
        Commands::Export { list, output } => commands::lists::export(&db, list, output.as_deref())?,
        Commands::Seed { .. } | Commands::HashPassword { .. } => {}
    }
    Ok(())
}

impl ProductFilter {
    fn into_query(self, default_expiring_days: u32) -> commands::catalog::Query {
        use commands::catalog::Query;

        if self.in_stock {
            Query::InStock
        } else if self.out_of_stock {
            Query::OutOfStock
        } else if let Some(term) = self.search {
            Query::Search(term)
        } else if let Some(category) = self.category {
            Query::Category(category)
        } else if let Some(days) = self.expiring {
            Query::Expiring(days.unwrap_or(default_expiring_days))
        } else if let Some([min, max]) = self.price_range.as_deref() {
            Query::PriceRange(*min, *max)
        } else {
            Query::All
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn broken_config() -> Result<AppConfig, ConfigError> {
        Err(ConfigError::InvalidEnvVar(
            "GROCERY_BEST_SELLERS_TOP".to_string(),
            "must be at least 1".to_string(),
        ))
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("grocery").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_hash_password_ignores_config() {
        let cli = parse(&["hash-password", "--password", "geheim"]);
        assert!(run(cli, broken_config).is_ok());
    }

    #[test]
    fn test_seed_check_ignores_config() {
        let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/../app/fixtures/default.yaml");
        let cli = parse(&["seed", "check", fixture]);
        assert!(run(cli, broken_config).is_ok());
    }

    #[test]
    fn test_store_commands_report_config_errors() {
        let cli = parse(&["best-sellers"]);
        let err = run(cli, broken_config).unwrap_err();
        assert!(err.to_string().contains("GROCERY_BEST_SELLERS_TOP"));
    }

    #[test]
    fn test_store_commands_use_loaded_config() {
        let cli = parse(&["best-sellers", "--top", "2"]);
        assert!(run(cli, || Ok(AppConfig::default())).is_ok());
    }

    #[test]
    fn test_price_range_filter() {
        let Commands::Products(filter) = parse(&["products", "--price-range", "1.00", "2.50"]).command
        else {
            panic!("expected products command");
        };
        assert!(matches!(
            filter.into_query(7),
            commands::catalog::Query::PriceRange(min, max)
                if min == Decimal::new(100, 2) && max == Decimal::new(250, 2)
        ));
    }
}
