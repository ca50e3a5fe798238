//! Application state owned by the single coordinating context.
//!
//! [`AppState`] owns the product store, the cart ledger, and the current
//! role; the presentation layer drives it from a single thread of control,
//! one user event at a time, each processed to completion. Components
//! receive only the slice they need - there is no ambient shared mutation,
//! and nothing here needs locking.
//!
//! Every cart-mutating operation returns the freshly recomputed
//! [`CartSummary`], and every store-mutating operation persists before
//! returning, so the next event never observes stale state.

use tracing::info;

use sk_accessories_core::{Category, ProductId};

use crate::cart::{CartLedger, CartSummary};
use crate::catalog::{self, CatalogFilter};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::extraction::ExtractionClient;
use crate::order::{self, CustomerDetails, Order};
use crate::reconcile::{self, ReconcileReport};
use crate::store::{Product, ProductEdit, ProductStore};

/// The current user role. Admin-only flows (product edits, bulk import)
/// are gated in the presentation layer; the role is plain session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Admin,
    Customer,
}

/// Session-local application state.
pub struct AppState {
    products: ProductStore,
    cart: CartLedger,
    extraction: ExtractionClient,
    role: Role,
}

impl AppState {
    /// Build the application state from configuration, loading the product
    /// store from disk (an absent or corrupt file yields an empty store).
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let products = ProductStore::load(&config.products_path);
        info!(count = products.len(), "Application state initialized");
        Self {
            products,
            cart: CartLedger::new(),
            extraction: ExtractionClient::new(&config.extraction),
            role: Role::default(),
        }
    }

    /// The product store.
    #[must_use]
    pub const fn products(&self) -> &ProductStore {
        &self.products
    }

    /// The cart ledger.
    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The current role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Switch the session role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Run a catalog query against the store, preserving insertion order.
    #[must_use]
    pub fn catalog(&self, filter: &CatalogFilter) -> Vec<&Product> {
        catalog::query(self.products.products(), filter)
    }

    // ------------------------------------------------------------------
    // Cart operations - each returns the recomputed summary
    // ------------------------------------------------------------------

    /// Add `quantity` of a product to the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> CartSummary {
        self.cart.add(product_id, quantity);
        self.cart.summary(&self.products)
    }

    /// Overwrite a cart line's quantity (zero removes the line).
    pub fn set_cart_quantity(&mut self, product_id: ProductId, quantity: u32) -> CartSummary {
        self.cart.set_quantity(product_id, quantity);
        self.cart.summary(&self.products)
    }

    /// Remove a cart line if present.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> CartSummary {
        self.cart.remove(product_id);
        self.cart.summary(&self.products)
    }

    /// The current cart summary, computed against live product prices.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary(&self.products)
    }

    // ------------------------------------------------------------------
    // Admin product operations - each persists the store
    // ------------------------------------------------------------------

    /// Apply an admin edit to a product's details.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown product or a failed write; the edit
    /// fields are validated before this is reachable ([`ProductEdit::new`]).
    pub fn update_product(&mut self, id: ProductId, edit: ProductEdit) -> Result<()> {
        self.products.update_details(id, edit)?;
        Ok(())
    }

    /// Replace a product's image reference.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown product or a failed write.
    pub fn set_product_image(&mut self, id: ProductId, image_url: String) -> Result<()> {
        self.products.set_image(id, image_url)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bulk price-list import
    // ------------------------------------------------------------------

    /// Run the bulk-import flow: extract rows from the document, then
    /// reconcile them against the store.
    ///
    /// # Errors
    ///
    /// An extraction failure aborts with no store mutation; a successful
    /// extraction with zero rows reconciles to an empty report.
    pub async fn import_price_list(
        &mut self,
        document: &[u8],
        mime_type: &str,
    ) -> Result<ReconcileReport> {
        let rows = self.extraction.extract_rows(document, mime_type).await?;
        let report = reconcile::reconcile(&mut self.products, rows)?;
        Ok(report)
    }

    /// Commit manual category assignments for uncategorized products.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the store fails.
    pub fn assign_categories(&mut self, assignments: &[(ProductId, Category)]) -> Result<()> {
        reconcile::assign_categories(&mut self.products, assignments)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Snapshot the cart plus customer details into an immutable order.
    ///
    /// The cart is left untouched - a validation failure must not lose the
    /// customer's selections. Call [`Self::complete_order`] once the
    /// confirmation/export flow finishes.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty cart or a dangling cart line.
    pub fn place_order(&self, customer: CustomerDetails) -> Result<Order> {
        let order = order::place_order(&self.cart, &self.products, customer)?;
        Ok(order)
    }

    /// Finish the confirmation flow: clear the cart and return the
    /// recomputed (empty) summary.
    pub fn complete_order(&mut self) -> CartSummary {
        self.cart.clear();
        self.cart.summary(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::store::tests::{sample_product, temp_store_path};
    use rust_decimal::dec;
    use secrecy::SecretString;
    use sk_accessories_core::Price;
    use url::Url;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            products_path: temp_store_path(),
            extraction: ExtractionConfig {
                api_key: SecretString::from("test-key"),
                model: "gemini-2.5-flash".to_owned(),
                base_url: Url::parse("http://localhost:0").expect("valid url"),
            },
        }
    }

    fn state_with_product() -> (AppState, ProductId) {
        let mut state = AppState::new(&test_config());
        let product = sample_product("SKB100", Price::new(dec!(10)).expect("price"));
        let id = product.id;
        state.products.push(product);
        (state, id)
    }

    #[test]
    fn test_new_state_starts_with_empty_cart_and_admin_role() {
        let state = AppState::new(&test_config());
        assert!(state.cart().is_empty());
        assert_eq!(state.role(), Role::Admin);
    }

    #[test]
    fn test_cart_mutations_return_fresh_summary() {
        let (mut state, id) = state_with_product();

        let summary = state.add_to_cart(id, 2);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, dec!(20));

        let summary = state.set_cart_quantity(id, 5);
        assert_eq!(summary.item_count, 5);

        let summary = state.remove_from_cart(id);
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total, dec!(0));
    }

    #[test]
    fn test_order_validation_failure_keeps_cart() {
        let (mut state, id) = state_with_product();
        state.add_to_cart(id, 2);

        assert!(CustomerDetails::new("Shop", "", "123", "Pune").is_err());
        assert_eq!(state.cart_summary().item_count, 2);
    }

    #[test]
    fn test_complete_order_clears_cart_but_not_snapshot() {
        let (mut state, id) = state_with_product();
        state.add_to_cart(id, 2);

        let details =
            CustomerDetails::new("Shop", "12 Market Road", "123", "Pune").expect("details");
        let order = state.place_order(details).expect("order");
        assert_eq!(state.cart_summary().item_count, 2);

        let summary = state.complete_order();
        assert_eq!(summary.item_count, 0);
        assert_eq!(order.lines().len(), 1);

        let _ = std::fs::remove_file(state.products().path());
    }
}
