//! Harvey CLI - Command line companion for the Shop with Harvey storefront.
//!
//! Commands:
//! - `harvey products` - Browse, filter and sort the catalog
//! - `harvey product` - Show one product
//! - `harvey order` - Build the WhatsApp order link for a product
//! - `harvey categories` - List shop categories
//! - `harvey carousel` - Preview the hero carousel on a live timer
//! - `harvey contact` - Fill in and submit the contact form
//! - `harvey config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CarouselArgs, CategoriesArgs, ConfigArgs, ContactArgs, OrderArgs, ProductArgs, ProductsArgs,
};

/// Harvey CLI - Browse the Shop with Harvey catalog from the terminal
#[derive(Parser)]
#[command(name = "harvey")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    Products(ProductsArgs),

    /// Show details for one product
    Product(ProductArgs),

    /// Build the order message and deep link for a product
    Order(OrderArgs),

    /// List shop categories
    Categories(CategoriesArgs),

    /// Preview the hero carousel
    Carousel(CarouselArgs),

    /// Send a message through the contact form
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Carousel(args) => commands::carousel::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
