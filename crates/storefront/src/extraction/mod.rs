//! Price-list extraction via the Gemini API.
//!
//! The storefront delegates document parsing to an external AI service:
//! given a price-list PDF, the service returns structured
//! `{code, name, rate, uom}` rows. The reconciler depends only on that
//! output contract ([`crate::reconcile::ImportedRow`]), never on this
//! module directly.

mod client;
mod error;
mod types;

pub use client::ExtractionClient;
pub use error::ExtractionError;
