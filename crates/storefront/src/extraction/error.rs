//! Error types for the extraction client.

use thiserror::Error;

use crate::reconcile::RowError;

/// Errors that can occur while extracting price-list rows.
///
/// Any of these aborts the bulk-import flow with no product store
/// mutation; the UI surfaces them as a "parsing failed" alert, distinct
/// from a successful extraction that simply found zero rows.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The extraction API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// The response carried no candidate content to parse.
    #[error("empty response: no candidate content")]
    EmptyResponse,

    /// The candidate text was not the expected JSON row array.
    #[error("parse error: {0}")]
    Parse(String),

    /// An extracted row failed boundary validation.
    #[error("invalid row: {0}")]
    InvalidRow(#[from] RowError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractionError::Api {
            status: 429,
            message: "quota exceeded".to_owned(),
        };
        assert_eq!(err.to_string(), "API error (429): quota exceeded");

        let err = ExtractionError::InvalidRow(RowError::MissingField("uom"));
        assert_eq!(err.to_string(), "invalid row: row field 'uom' is missing or empty");
    }
}
