//! Price-list reconciliation: merging extracted rows into the product store.
//!
//! One pass consumes the rows produced by the extraction adapter and, per
//! row in input order, either updates the matching product's price/uom or
//! synthesizes a new product classified by its code prefix. The pass
//! reports three disjoint buckets - updated, added, and uncategorized -
//! and persists the store once at the end. There is no undo: prior prices
//! survive only in the report's before-snapshots.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use sk_accessories_core::{Category, Price, ProductId};

use crate::store::{Product, ProductStore, StoreError};

/// Ordered code-prefix classification rules, evaluated first-match-wins.
///
/// Longer prefixes are listed before prefixes they contain (`SKBR` before
/// `SKB`, `SKFAN`/`SKCF` before `SKB`-adjacent shadows) so every rule is
/// reachable. The order is part of the contract; see the tests.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("SKBR", Category::Breaker),
    ("SKFAN", Category::SkFan),
    ("SKCF", Category::ChinaFitting),
    ("SKB", Category::Bekolite),
    ("SKW", Category::Wire),
];

/// Classify a product code by its prefix. Codes matching no rule map to
/// [`Category::Uncategorized`].
#[must_use]
pub fn category_for_code(code: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map_or(Category::Uncategorized, |(_, category)| *category)
}

/// Error validating a raw extracted row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    /// A required string field was empty after trimming.
    #[error("row field '{0}' is missing or empty")]
    MissingField(&'static str),

    /// The rate was negative.
    #[error("row rate must be non-negative, got {0}")]
    NegativeRate(Decimal),
}

/// One externally-extracted price-list row.
///
/// Rows are validated at the adapter boundary; a malformed row never
/// reaches the reconciler. [`ImportedRow::new`] is the only way to
/// construct one.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow {
    pub code: String,
    pub name: String,
    pub rate: Price,
    pub uom: String,
}

impl ImportedRow {
    /// Validate raw extracted fields into a row, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RowError`] if any field is empty after trimming or the
    /// rate is negative.
    pub fn new(code: &str, name: &str, rate: Decimal, uom: &str) -> Result<Self, RowError> {
        let code = code.trim();
        let name = name.trim();
        let uom = uom.trim();
        if code.is_empty() {
            return Err(RowError::MissingField("code"));
        }
        if name.is_empty() {
            return Err(RowError::MissingField("name"));
        }
        if uom.is_empty() {
            return Err(RowError::MissingField("uom"));
        }
        let rate = Price::new(rate).map_err(|_| RowError::NegativeRate(rate))?;
        Ok(Self {
            code: code.to_owned(),
            name: name.to_owned(),
            rate,
            uom: uom.to_owned(),
        })
    }
}

/// A before/after record for an existing product touched by the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedEntry {
    /// The product after the overwrite.
    pub product: Product,
    pub old_price: Price,
    pub old_uom: String,
}

/// Outcome of one reconciliation pass: three disjoint buckets.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReconcileReport {
    /// Existing products whose price or uom changed.
    pub updated: Vec<UpdatedEntry>,
    /// New products auto-classified into a known category.
    pub added: Vec<Product>,
    /// New products awaiting manual category assignment.
    pub uncategorized: Vec<Product>,
}

impl ReconcileReport {
    /// Whether the pass changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.added.is_empty() && self.uncategorized.is_empty()
    }
}

/// Reconcile extracted rows against the store.
///
/// Per row, in input order: an exact code match with a differing price or
/// uom is overwritten and reported in `updated`; a match with identical
/// price and uom is silently dropped (no-op on unchanged); an unmatched
/// code becomes a new product bucketed by its derived category. The store
/// is persisted once after the pass. An empty input performs no work and
/// reports nothing - distinguishing "extraction failed" from "zero rows"
/// is the extraction adapter's job.
///
/// # Errors
///
/// Returns a [`StoreError`] if persisting the store fails.
pub fn reconcile(
    store: &mut ProductStore,
    rows: Vec<ImportedRow>,
) -> Result<ReconcileReport, StoreError> {
    if rows.is_empty() {
        debug!("No extracted rows, skipping reconciliation");
        return Ok(ReconcileReport::default());
    }

    let mut report = ReconcileReport::default();
    for row in rows {
        if let Some(product) = store.find_by_code_mut(&row.code) {
            if product.price == row.rate && product.uom == row.uom {
                continue;
            }
            let old_price = product.price;
            let old_uom = std::mem::replace(&mut product.uom, row.uom);
            product.price = row.rate;
            report.updated.push(UpdatedEntry {
                product: product.clone(),
                old_price,
                old_uom,
            });
        } else {
            let category = category_for_code(&row.code);
            let product = Product {
                id: ProductId::new(),
                image_url: placeholder_image_url(&row.code),
                code: row.code,
                name: row.name,
                price: row.rate,
                uom: row.uom,
                category,
            };
            store.push(product.clone());
            if category.is_uncategorized() {
                report.uncategorized.push(product);
            } else {
                report.added.push(product);
            }
        }
    }

    store.save()?;
    info!(
        updated = report.updated.len(),
        added = report.added.len(),
        uncategorized = report.uncategorized.len(),
        "Price list reconciled"
    );
    Ok(report)
}

/// Commit manual category assignments for uncategorized products.
///
/// Unknown product IDs are skipped. Persists once after applying every
/// assignment.
///
/// # Errors
///
/// Returns a [`StoreError`] if persisting the store fails.
pub fn assign_categories(
    store: &mut ProductStore,
    assignments: &[(ProductId, Category)],
) -> Result<(), StoreError> {
    if assignments.is_empty() {
        return Ok(());
    }
    for &(id, category) in assignments {
        if let Some(product) = store.find_by_id_mut(id) {
            product.category = category;
        } else {
            debug!(%id, "Skipping category assignment for unknown product");
        }
    }
    store.save()
}

/// Placeholder image for products synthesized from a price list.
fn placeholder_image_url(code: &str) -> String {
    format!("https://picsum.photos/seed/{code}/300/200")
}
