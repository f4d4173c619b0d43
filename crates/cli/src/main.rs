//! Hidestyle CLI - shop, cart, and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! hs-cli shop list --category Apparel --sort price-asc --max-price 100
//! hs-cli shop show <id>
//!
//! # Manage the local cart
//! hs-cli cart add <id> --quantity 2 --size M --color Red
//! hs-cli cart remove <id> --size M --color Red
//! hs-cli cart show
//! hs-cli cart clear
//!
//! # Manage the catalog
//! hs-cli admin add --name "Premium T-Shirt" --price 29.99 --upload front.jpg
//! hs-cli admin edit <id> --price 19.99
//! hs-cli admin delete <id>
//! hs-cli admin dashboard --search shirt
//!
//! # Run catalog database migrations
//! hs-cli migrate
//! ```
//!
//! # Commands
//!
//! - `shop` - Browse and filter the catalog
//! - `cart` - Local cart, persisted to a file slot
//! - `admin` - Catalog CRUD and image uploads
//! - `migrate` - Run database migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use hidestyle_cli::config::CliConfig;
use hidestyle_core::ProductId;

mod commands;

use commands::admin::ProductArgs;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(author, version, about = "Hidestyle CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Manage the local shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the product catalog
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Run catalog database migrations
    Migrate,
}

#[derive(Subcommand)]
enum ShopAction {
    /// List products
    List {
        /// Exact category filter (server-side)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: newest, price-asc, price-desc, featured
        #[arg(short, long, default_value = "newest")]
        sort: String,

        /// Client-side price ceiling (clamped to 0..=5000)
        #[arg(long, default_value_t = 5000)]
        max_price: u32,
    },
    /// Show one product in detail
    Show {
        /// Product identifier
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product identifier
        id: ProductId,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Selected size ("" means no selection)
        #[arg(long, default_value = "")]
        size: String,

        /// Selected color ("" means no selection)
        #[arg(long, default_value = "")]
        color: String,
    },
    /// Remove one line from the cart
    Remove {
        /// Product identifier
        id: ProductId,

        /// Selected size of the line to remove
        #[arg(long, default_value = "")]
        size: String,

        /// Selected color of the line to remove
        #[arg(long, default_value = "")]
        color: String,
    },
    /// Empty the cart
    Clear,
    /// Show cart lines, count, and total
    Show,
    /// Checkout (stub - no payment processing)
    Checkout,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a product
    Add {
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Edit an existing product
    Edit {
        /// Product identifier
        id: ProductId,

        #[command(flatten)]
        product: ProductArgs,
    },
    /// Delete a product
    Delete {
        /// Product identifier
        id: ProductId,
    },
    /// List the catalog with an optional search
    Dashboard {
        /// Case-insensitive match on name or category
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shop { action } => {
            let config = CliConfig::from_env()?;
            match action {
                ShopAction::List {
                    category,
                    sort,
                    max_price,
                } => commands::shop::list(&config, category, &sort, max_price).await?,
                ShopAction::Show { id } => commands::shop::show(&config, id).await?,
            }
        }
        Commands::Cart { action } => {
            let config = CliConfig::from_env()?;
            match action {
                CartAction::Add {
                    id,
                    quantity,
                    size,
                    color,
                } => commands::cart::add(&config, id, quantity, &size, &color).await?,
                CartAction::Remove { id, size, color } => {
                    commands::cart::remove(&config, id, &size, &color);
                }
                CartAction::Clear => commands::cart::clear(&config),
                CartAction::Show => commands::cart::show(&config),
                CartAction::Checkout => commands::cart::checkout(&config),
            }
        }
        Commands::Admin { action } => {
            let config = CliConfig::from_env()?;
            match action {
                AdminAction::Add { product } => commands::admin::add(&config, product).await?,
                AdminAction::Edit { id, product } => {
                    commands::admin::edit(&config, id, product).await?;
                }
                AdminAction::Delete { id } => commands::admin::delete(&config, id).await?,
                AdminAction::Dashboard { search } => {
                    commands::admin::dashboard(&config, search.as_deref()).await?;
                }
            }
        }
        Commands::Migrate => commands::migrate::run().await?,
    }
    Ok(())
}
