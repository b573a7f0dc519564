//! Cart management commands.
//!
//! Each command opens the file-backed store, restores persisted items, applies
//! one operation, and prints the resulting cart. The store persists after
//! every mutation, so nothing needs an explicit save step.

// CLI output goes to stdout by design.
#![allow(clippy::print_stdout)]

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use atelier_cart::{CartConfig, CartStore, ConfigError, FileStorage, StorageError};
use atelier_core::{Artwork, ArtworkId};

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage directory could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Price argument is not a decimal number.
    #[error("Invalid price '{0}': {1}")]
    InvalidPrice(String, String),
}

/// Arguments for the `cart add` command.
pub struct AddArgs {
    pub id: String,
    pub title: String,
    pub price: Option<String>,
    pub image: Option<String>,
    pub technique: Option<String>,
    pub dimensions: Option<String>,
}

/// Show cart contents and totals.
pub fn show() -> Result<(), CartCommandError> {
    let store = open_store()?;
    print_cart(&store);
    Ok(())
}

/// Add an artwork snapshot to the cart.
pub fn add(args: &AddArgs) -> Result<(), CartCommandError> {
    let price = args
        .price
        .as_deref()
        .map(|raw| {
            Decimal::from_str(raw)
                .map_err(|e| CartCommandError::InvalidPrice(raw.to_string(), e.to_string()))
        })
        .transpose()?;

    let mut artwork = Artwork::new(args.id.as_str()).with_title(args.title.as_str());
    artwork.price = price;
    artwork.image = args.image.clone();
    artwork.technique = args.technique.clone();
    artwork.dimensions = args.dimensions.clone();

    let mut store = open_store()?;
    store.add_to_cart(artwork);
    print_cart(&store);
    Ok(())
}

/// Remove an artwork from the cart. Silently a no-op if the id is absent.
pub fn remove(id: &str) -> Result<(), CartCommandError> {
    let mut store = open_store()?;
    store.remove_from_cart(&ArtworkId::new(id));
    print_cart(&store);
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CartCommandError> {
    let mut store = open_store()?;
    store.clear_cart();
    print_cart(&store);
    Ok(())
}

/// Open the file-backed store and restore persisted items.
fn open_store() -> Result<CartStore<FileStorage>, CartCommandError> {
    let config = CartConfig::from_env()?;
    let storage = FileStorage::open(config.storage_dir)?;
    let mut store = CartStore::new(storage);
    store.initialize();
    Ok(store)
}

/// Print the cart in a human-readable form.
fn print_cart(store: &CartStore<FileStorage>) {
    if store.items().is_empty() {
        println!("Cart is empty.");
        return;
    }

    for item in store.items() {
        let price = item
            .artwork
            .price
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        let title = if item.artwork.title.is_empty() {
            "(untitled)"
        } else {
            item.artwork.title.as_str()
        };
        println!("  [{}] {} - {}", item.artwork.id, title, price);
    }
    println!("Items: {}", store.total_items());
    println!("Total: {:.2}", store.total_price());
}
