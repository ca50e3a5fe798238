//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GEMINI_API_KEY` - API key for the price-list extraction service
//!
//! ## Optional
//! - `SK_PRODUCTS_PATH` - Product store file (default: `sk-accessories-products.json`)
//! - `GEMINI_MODEL` - Extraction model (default: `gemini-2.5-flash`)
//! - `GEMINI_API_BASE_URL` - Extraction API base URL override

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_PRODUCTS_PATH: &str = "sk-accessories-products.json";
const DEFAULT_EXTRACTION_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_EXTRACTION_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// File the product store persists to
    pub products_path: PathBuf,
    /// Price-list extraction service configuration
    pub extraction: ExtractionConfig,
}

/// Extraction service (Gemini API) configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ExtractionConfig {
    /// API key (server-side only)
    pub api_key: SecretString,
    /// Model used for structured row extraction
    pub model: String,
    /// API base URL
    pub base_url: Url,
}

impl std::fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let products_path = std::env::var("SK_PRODUCTS_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_PRODUCTS_PATH), PathBuf::from);

        let api_key = require_env("GEMINI_API_KEY")?;
        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_EXTRACTION_MODEL.to_owned());

        let base_url = std::env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EXTRACTION_BASE_URL.to_owned());
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("GEMINI_API_BASE_URL".to_owned(), e.to_string())
        })?;

        Ok(Self {
            products_path,
            extraction: ExtractionConfig {
                api_key: SecretString::from(api_key),
                model,
                base_url,
            },
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}
