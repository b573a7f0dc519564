//! Atelier CLI - Cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! atelier cart show
//!
//! # Add an artwork to the cart
//! atelier cart add --id 1 --title "Nymphéa" --price 1500
//!
//! # Remove an artwork from the cart
//! atelier cart remove --id 1
//!
//! # Empty the cart
//! atelier cart clear
//! ```
//!
//! # Environment Variables
//!
//! - `ATELIER_CART_DIR` - Cart storage directory (default: `.atelier`)
//! - `ATELIER_LOG` - Tracing filter directive (default: `info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about = "Atelier CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add an artwork snapshot to the cart
    Add {
        /// Artwork catalog identifier
        #[arg(short, long)]
        id: String,

        /// Display title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Price in the shop currency (e.g. `1500` or `1500.00`)
        #[arg(short, long)]
        price: Option<String>,

        /// Image reference (URL or media key)
        #[arg(long)]
        image: Option<String>,

        /// Technique, e.g. "oil on canvas"
        #[arg(long)]
        technique: Option<String>,

        /// Physical dimensions, e.g. "50x70cm"
        #[arg(long)]
        dimensions: Option<String>,
    },
    /// Remove an artwork from the cart
    Remove {
        /// Artwork catalog identifier
        #[arg(short, long)]
        id: String,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_env("ATELIER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::cart::CartCommandError> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add {
                id,
                title,
                price,
                image,
                technique,
                dimensions,
            } => {
                commands::cart::add(&commands::cart::AddArgs {
                    id,
                    title,
                    price,
                    image,
                    technique,
                    dimensions,
                })?;
            }
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::Clear => commands::cart::clear()?,
        },
    }
    Ok(())
}
