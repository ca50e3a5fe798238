//! Cart ledger: the working set of products a customer intends to order.
//!
//! The ledger holds `(product id, quantity)` line items only - it never
//! owns product data. Totals are resolved against the [`ProductStore`] at
//! computation time, so an admin price edit shows up in the next total
//! without any cart mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sk_accessories_core::ProductId;

use crate::store::ProductStore;

/// One cart line: a product reference plus a positive quantity.
///
/// At most one line exists per product id; adding an already-present
/// product increments its quantity instead of duplicating the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The externally-observed cart summary, recomputed after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of line quantities.
    pub item_count: u32,
    /// Sum of `price * quantity` over all lines.
    pub total: Decimal,
}

/// The cart ledger.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<LineItem>,
}

impl CartLedger {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Current line items, in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of a product.
    ///
    /// A zero quantity is rejected and ignored (the UI surfaces its own
    /// feedback; nothing is mutated). If a line for the product exists its
    /// quantity is incremented, otherwise a new line is appended.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            debug!(%product_id, "Ignoring add with zero quantity");
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(LineItem {
                product_id,
                quantity,
            });
        }
    }

    /// Overwrite a line's quantity. A quantity of zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line if present. Removing an absent product is a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Drop all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity`, resolving each product against the store
    /// now. Lines whose product cannot be resolved contribute nothing.
    #[must_use]
    pub fn total(&self, store: &ProductStore) -> Decimal {
        self.lines
            .iter()
            .filter_map(|l| {
                store
                    .find_by_id(l.product_id)
                    .map(|p| p.price.times(l.quantity))
            })
            .sum()
    }

    /// Recompute the externally-observed summary.
    #[must_use]
    pub fn summary(&self, store: &ProductStore) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total: self.total(store),
        }
    }
}
