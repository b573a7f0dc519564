//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::artwork::Artwork;

/// One cart entry pairing an artwork snapshot with a quantity.
///
/// Artworks are one-of-a-kind, so quantity is structurally 1. The field is
/// kept in the persisted shape for forward compatibility with readers that
/// expect `{ artwork, quantity }` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the artwork at the moment it was added.
    pub artwork: Artwork,
    /// Always 1; no multi-unit purchase path exists.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Create a line item for an artwork snapshot.
    #[must_use]
    pub const fn new(artwork: Artwork) -> Self {
        Self {
            artwork,
            quantity: 1,
        }
    }

    /// Price contribution of this line, treating a missing price as zero.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.artwork.price.unwrap_or_default()
    }
}
