//! Extraction client for the Gemini `generateContent` API.
//!
//! Turns a source document (a scanned price-list PDF) into structured
//! [`ImportedRow`]s using the model's JSON schema mode.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ExtractionConfig;
use crate::reconcile::ImportedRow;

use super::error::ExtractionError;
use super::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, RawRow,
};

const EXTRACTION_PROMPT: &str = "You are an expert data extraction system. Your task is to \
extract product information from the provided PDF document, which is a price list.\n\
For each product, identify and extract the following four fields from the columns which may \
be labelled CODE, ITEM, RATE, and UOM:\n\
1. 'code': The product's CODE or unique identifier.\n\
2. 'name': The product's ITEM name or description.\n\
3. 'rate': The product's RATE or price, returned as a number.\n\
4. 'uom': The product's Unit of Measurement (UOM), such as 'piece', 'box', or 'dozen'.\n\n\
Please return the extracted information as a clean JSON array of objects. Do not include any \
text or explanations outside of the JSON array itself.";

/// Client for structured price-list row extraction.
///
/// Cheaply cloneable; holds a configured `reqwest` client behind an `Arc`.
#[derive(Clone)]
pub struct ExtractionClient {
    inner: Arc<ExtractionClientInner>,
}

struct ExtractionClientInner {
    client: reqwest::Client,
    model: String,
    base_url: Url,
}

impl ExtractionClient {
    /// Create a new extraction client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &ExtractionConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(config.api_key.expose_secret())
                .expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ExtractionClientInner {
                client,
                model: config.model.clone(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Extract price-list rows from a source document.
    ///
    /// A successful call with zero rows (`Ok(vec![])`) means the document
    /// parsed but contained nothing; a failure means the bulk-import flow
    /// must abort with no store mutation. Callers present different
    /// feedback for the two cases.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if the request fails, the API
    /// responds with an error, or the response is not a valid row array.
    #[instrument(skip(self, document), fields(model = %self.inner.model, bytes = document.len()))]
    pub async fn extract_rows(
        &self,
        document: &[u8],
        mime_type: &str,
    ) -> Result<Vec<ImportedRow>, ExtractionError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text(EXTRACTION_PROMPT.to_owned()),
                    Part::InlineData(InlineData {
                        mime_type: mime_type.to_owned(),
                        data: BASE64.encode(document),
                    }),
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_owned(),
                response_schema: row_array_schema(),
            },
        };

        let url = self.request_url()?;
        let response = self.inner.client.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map_or(body, |e| e.error.message);
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = response.json().await?;
        let rows = parse_rows(&response)?;
        debug!(rows = rows.len(), "Extracted price-list rows");
        Ok(rows)
    }

    fn request_url(&self) -> Result<Url, ExtractionError> {
        self.inner
            .base_url
            .join(&format!(
                "v1beta/models/{}:generateContent",
                self.inner.model
            ))
            .map_err(|e| ExtractionError::Parse(format!("invalid request URL: {e}")))
    }
}

/// JSON schema for the extracted row array, mirroring [`RawRow`].
fn row_array_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "code": { "type": "STRING", "description": "The product code." },
                "name": { "type": "STRING", "description": "The name of the product." },
                "rate": { "type": "NUMBER", "description": "The price of the product." },
                "uom": { "type": "STRING", "description": "The unit of measurement." }
            },
            "required": ["code", "name", "rate", "uom"]
        }
    })
}

/// Pull the first candidate's text and parse it as a validated row array.
fn parse_rows(response: &GenerateContentResponse) -> Result<Vec<ImportedRow>, ExtractionError> {
    let text = response
        .candidates
        .iter()
        .flat_map(|c| c.content.parts.iter())
        .find_map(|part| match part {
            Part::Text(text) => Some(text.as_str()),
            Part::InlineData(_) => None,
        })
        .ok_or(ExtractionError::EmptyResponse)?;

    let raw: Vec<RawRow> =
        serde_json::from_str(text).map_err(|e| ExtractionError::Parse(e.to_string()))?;

    raw.iter()
        .map(|row| {
            let rate = Decimal::try_from(row.rate)
                .map_err(|e| ExtractionError::Parse(format!("rate {}: {e}", row.rate)))?;
            Ok(ImportedRow::new(&row.code, &row.name, rate, &row.uom)?)
        })
        .collect()
}
