//! Error types for the cart store and its storage seam.
//!
//! None of these reach the presentation layer: the store's public operations
//! are total. The types exist so recovery decisions (fall back to an empty
//! cart, log and continue on a failed write) are explicit instead of
//! swallowed inline.

use thiserror::Error;

/// Errors from the persistence medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key contains characters the backend cannot represent.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors internal to the cart store.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persisted cart data is missing required structure or is not JSON.
    #[error("malformed persisted cart data: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Persistence medium failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
