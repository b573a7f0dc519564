//! Newtype IDs for type-safe entity references.
//!
//! Catalog identifiers are opaque strings assigned by the record backend,
//! so the wrapper holds a `String` rather than an integer.

use serde::{Deserialize, Serialize};

/// Identifier of an artwork in the catalog.
///
/// Treated as opaque: the cart only compares identifiers for equality to
/// enforce uniqueness of line items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Create a new ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArtworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ArtworkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ArtworkId> for String {
    fn from(id: ArtworkId) -> Self {
        id.0
    }
}
