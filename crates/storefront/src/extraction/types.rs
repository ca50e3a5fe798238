//! Types for the Gemini `generateContent` API.
//!
//! Only the subset of the wire format the extraction flow needs: inline
//! document parts in, JSON-mode text candidates out.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Prompt contents (a single user turn for extraction).
    pub contents: Vec<Content>,
    /// Structured-output configuration.
    pub generation_config: GenerationConfig,
}

/// One content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A content part: either prompt text or an inline document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    /// Plain text.
    #[serde(rename = "text")]
    Text(String),
    /// Base64-encoded inline document data.
    #[serde(rename = "inlineData")]
    InlineData(InlineData),
}

/// Inline document payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the document (e.g. `application/pdf`).
    pub mime_type: String,
    /// Base64-encoded document bytes.
    pub data: String,
}

/// Structured-output settings forcing a JSON array response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// Response from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Error envelope returned by the API on failure statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// A raw extracted row as the model emits it, before boundary validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub code: String,
    pub name: String,
    pub rate: f64,
    pub uom: String,
}
