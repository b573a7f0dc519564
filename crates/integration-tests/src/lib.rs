//! Integration tests for Atelier.
//!
//! This crate holds no library code; the tests live under `tests/` and
//! exercise the cart store through its public API, the way the presentation
//! layer drives it.

#![cfg_attr(not(test), forbid(unsafe_code))]
