//! Artwork snapshot taken at cart-add time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ArtworkId;

/// A snapshot of a sellable artwork.
///
/// This is a copy of the catalog record at the moment it entered the cart,
/// not a live reference: later catalog edits (price changes, availability
/// toggles) never retroactively alter a snapshot already in the cart.
///
/// Only `id` is required. The cart uses `id` for uniqueness and `price` for
/// totals; everything else is carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Catalog identifier.
    pub id: ArtworkId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Price in the shop currency. Absent prices count as zero in totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Image reference (URL or media key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Technique, e.g. "oil on canvas".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    /// Physical dimensions, e.g. "50x70cm".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl Artwork {
    /// Create a minimal snapshot with just an identifier.
    #[must_use]
    pub fn new(id: impl Into<ArtworkId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            price: None,
            image: None,
            technique: None,
            dimensions: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
