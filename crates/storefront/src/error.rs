//! Unified error handling for storefront flows.
//!
//! Flow-level operations on [`crate::state::AppState`] return
//! `Result<T, AppError>`. No error here is fatal: every variant maps to a
//! user-visible correction prompt or alert, and all flows return the UI to
//! a stable prior state.

use thiserror::Error;

use crate::config::ConfigError;
use crate::extraction::ExtractionError;
use crate::order::OrderError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Product store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Order validation or placement failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Price-list extraction failed; the import flow aborts unapplied.
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
