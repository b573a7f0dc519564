//! Atelier Cart - the client-side shopping cart store.
//!
//! The cart is the one piece of the storefront with real local state: an
//! ordered list of one-of-a-kind artworks, persisted across sessions, plus
//! the open/closed flag of the cart review panel. Everything else in the
//! storefront is a thin form over the record backend and lives elsewhere.
//!
//! # Modules
//!
//! - [`store`] - The [`CartStore`] itself: add/remove/clear, open/close,
//!   derived totals, persistence after every mutation
//! - [`storage`] - The [`CartStorage`] key-value seam with in-memory and
//!   file-backed implementations
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Error types for storage and deserialization
//!
//! # Example
//!
//! ```rust
//! use atelier_cart::{CartStore, MemoryStorage};
//! use atelier_core::Artwork;
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::new(MemoryStorage::new());
//! cart.initialize();
//!
//! cart.add_to_cart(Artwork::new("1").with_title("Nymphéa").with_price(Decimal::new(1500, 0)));
//! assert_eq!(cart.total_items(), 1);
//! assert!(cart.is_open());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::{CartError, StorageError};
pub use storage::{CartStorage, FileStorage, MemoryStorage};
pub use store::{CART_STORAGE_KEY, CartStore};
