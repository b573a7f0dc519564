//! The cart store.
//!
//! Owns the authoritative in-memory cart state and keeps it consistent with
//! the persisted copy. One store instance should exist per session; two
//! stores over the same storage would race to overwrite each other's writes.

use rust_decimal::Decimal;

use atelier_core::{Artwork, ArtworkId, CartItem};

use crate::error::CartError;
use crate::storage::CartStorage;

/// Fixed storage slot holding the serialized item list.
pub const CART_STORAGE_KEY: &str = "cart_items";

/// In-memory cart state synchronized to a [`CartStorage`] backend.
///
/// Items are ordered by insertion and unique by artwork identifier. The
/// `is_open` flag tracks the visibility of the cart review panel and is
/// independent of the item list; it is session state and never persisted.
///
/// No operation returns an error: anomalies degrade to "do nothing" or
/// "treat as empty" and are logged (see [`CartError`] for the internal
/// taxonomy).
pub struct CartStore<S: CartStorage> {
    items: Vec<CartItem>,
    is_open: bool,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Create an empty, closed cart over the given storage.
    ///
    /// Call [`initialize`](Self::initialize) before use to restore any
    /// persisted items.
    pub const fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            storage,
        }
    }

    /// Restore the item list from the persistence medium.
    ///
    /// Runs once at session startup. Missing or malformed persisted data is
    /// recovered locally: the failure is logged and the cart starts empty.
    /// Never fatal, never surfaced to the user.
    pub fn initialize(&mut self) {
        self.items = match self.read_persisted() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("discarding persisted cart, starting empty: {e}");
                Vec::new()
            }
        };
    }

    /// Add an artwork snapshot to the cart.
    ///
    /// One command, two effects: the item is appended unless an item with
    /// the same identifier is already present (idempotent - no duplicate, no
    /// quantity bump, no reorder), and the review panel is opened. The panel
    /// opens even when the add is a no-op.
    pub fn add_to_cart(&mut self, artwork: Artwork) {
        if self.contains(&artwork.id) {
            tracing::debug!(id = %artwork.id, "artwork already in cart, add is a no-op");
        } else {
            self.items.push(CartItem::new(artwork));
        }
        self.is_open = true;
        self.persist();
    }

    /// Remove the item with the given artwork identifier, if present.
    ///
    /// A no-op when the identifier is absent. Does not touch `is_open`.
    pub fn remove_from_cart(&mut self, id: &ArtworkId) {
        self.items.retain(|item| item.artwork.id != *id);
        self.persist();
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Show the cart review panel.
    pub const fn open_cart(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart review panel.
    pub const fn close_cart(&mut self) {
        self.is_open = false;
    }

    /// Items currently in the cart, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart review panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of items in the cart. Quantity is structurally 1, so this is
    /// the length of the item list.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of item prices, with missing prices counting as zero.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::price).sum()
    }

    /// Consume the store, returning its storage backend.
    ///
    /// Used to hand the persistence medium to a fresh store instance, e.g.
    /// across a simulated session boundary in tests.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn contains(&self, id: &ArtworkId) -> bool {
        self.items.iter().any(|item| item.artwork.id == *id)
    }

    /// Decode the persisted item list, keeping the failure visible.
    ///
    /// The empty-cart fallback is a recovery policy applied by the caller
    /// ([`initialize`](Self::initialize)), not baked in here.
    fn read_persisted(&self) -> Result<Option<Vec<CartItem>>, CartError> {
        let Some(raw) = self.storage.read(CART_STORAGE_KEY)? else {
            return Ok(None);
        };
        let items = serde_json::from_str(&raw)?;
        Ok(Some(items))
    }

    /// Serialize the full item list to the fixed storage slot.
    ///
    /// Best-effort: a failed write is logged and the in-memory state stays
    /// authoritative for the rest of the session.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize cart items: {e}");
                return;
            }
        };
        match self.storage.write(CART_STORAGE_KEY, &json) {
            Ok(()) => tracing::debug!(items = self.items.len(), "persisted cart"),
            Err(e) => tracing::warn!("failed to persist cart: {e}"),
        }
    }
}
