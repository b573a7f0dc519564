//! Atelier Core - Shared types library.
//!
//! This crate provides common types used across all Atelier components:
//! - `cart` - Client-side shopping cart store
//! - `cli` - Command-line presentation layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Artwork snapshots, cart line items, and type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
