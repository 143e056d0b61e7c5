//! CLI command implementations.

pub mod carousel;
pub mod categories;
pub mod config;
pub mod contact;
pub mod order;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Free-text search over product and category names.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category name, or "All".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort key: name, price-low, price-high or rating.
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Products page query string, e.g. "category=Two%20Pieces&search=set".
    #[arg(short, long, conflicts_with_all = ["search", "category"])]
    pub query: Option<String>,

    /// Use the home-page featured selection instead of the full catalog.
    #[arg(long)]
    pub featured: bool,

    /// Show one detailed row per product.
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: u32,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Product ID.
    pub id: u32,

    /// Print only the deep link.
    #[arg(long)]
    pub url_only: bool,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Also list subcategories.
    #[arg(short, long)]
    pub subcategories: bool,
}

/// Arguments for the carousel command.
#[derive(Args)]
pub struct CarouselArgs {
    /// Number of automatic advances to show before exiting.
    #[arg(short, long, default_value = "4")]
    pub ticks: usize,

    /// Override the configured interval (milliseconds).
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Slide to start on (0-based).
    #[arg(long, default_value = "0")]
    pub start: usize,

    /// Simulate the pointer entering after this many advances.
    #[arg(long)]
    pub pause_after: Option<usize>,

    /// How long the simulated pointer stays (milliseconds).
    #[arg(long, default_value = "2000")]
    pub pause_for_ms: u64,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long)]
    pub name: Option<String>,

    /// Your e-mail address.
    #[arg(long)]
    pub email: Option<String>,

    /// Subject line.
    #[arg(long)]
    pub subject: Option<String>,

    /// Message body.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Never prompt; fail if a field is missing.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
    /// Print the path of the config file in use.
    Path,
}
