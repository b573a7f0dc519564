//! Core types for Atelier.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod artwork;
pub mod id;
pub mod item;

pub use artwork::Artwork;
pub use id::ArtworkId;
pub use item::CartItem;
