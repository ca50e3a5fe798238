//! SK Accessories Core - Shared types library.
//!
//! This crate provides common types used across all SK Accessories components:
//! - `storefront` - Catalog, cart, ordering, and price-list import logic
//! - `integration-tests` - Cross-module flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
