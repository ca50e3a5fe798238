//! SK Accessories Storefront library.
//!
//! Session-local catalog, cart, ordering, and price-list import logic for
//! the SK Accessories storefront. The presentation layer (views, modals,
//! image export, native share) lives in the embedding application and
//! consumes this crate through [`state::AppState`].
//!
//! # Architecture
//!
//! - [`store`] - Product collection, persisted as one JSON document
//! - [`cart`] - Line items and live totals
//! - [`catalog`] - Category and free-text product filtering
//! - [`reconcile`] - Bulk price-list reconciliation against the store
//! - [`order`] - Immutable order snapshots and the share-text fallback
//! - [`extraction`] - Gemini-backed price-list row extraction
//!
//! All state is single-client and single-threaded: mutations happen in
//! response to discrete user events, processed to completion before the
//! next event. Nothing here needs locking.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extraction;
pub mod order;
pub mod reconcile;
pub mod state;
pub mod store;
