//! Integration tests for SK Accessories.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sk-accessories-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `price_list_import` - Bulk reconciliation flow against a real store file
//! - `order_flow` - Browse, cart, and order placement flow
//!
//! Tests that call the live extraction API are `#[ignore]`d and require
//! `GEMINI_API_KEY` in the environment.

use std::path::PathBuf;

use secrecy::SecretString;
use url::Url;

use sk_accessories_storefront::config::{ExtractionConfig, StorefrontConfig};

/// A unique product-store path under the system temp directory.
///
/// Each test gets its own file so runs never interfere; tests remove the
/// file themselves when they care about leftovers.
#[must_use]
pub fn temp_products_path() -> PathBuf {
    std::env::temp_dir().join(format!("sk-accessories-it-{}.json", uuid::Uuid::new_v4()))
}

/// A storefront configuration pointing at a fresh temp store.
///
/// The extraction key comes from `GEMINI_API_KEY` when set (for the
/// `#[ignore]`d live tests) and falls back to a placeholder otherwise -
/// offline tests never reach the network.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    let api_key =
        std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| "offline-test-key".to_owned());
    StorefrontConfig {
        products_path: temp_products_path(),
        extraction: ExtractionConfig {
            api_key: SecretString::from(api_key),
            model: "gemini-2.5-flash".to_owned(),
            base_url: Url::parse("https://generativelanguage.googleapis.com")
                .expect("valid base url"),
        },
    }
}
