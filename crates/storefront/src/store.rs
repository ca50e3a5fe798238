//! Product store: the authoritative in-memory product list.
//!
//! The store owns every [`Product`]; other components hold only
//! [`ProductId`] references. The whole collection is serialized to a single
//! JSON document on disk after every completed mutation, so the on-disk
//! copy is always consistent with memory between user events. There is no
//! finer-grained transactionality.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use sk_accessories_core::{Category, Price, ProductId};

/// Errors from product store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the serialized collection failed.
    #[error("failed to write product store: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the collection failed.
    #[error("failed to serialize product store: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The referenced product does not exist.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A required edit field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A sellable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable opaque identity, generated at creation.
    pub id: ProductId,
    /// Business identifier, e.g. `SKB100`. Unique by convention.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Unit-of-measure label, e.g. `piece`, `box`, `dozen`.
    pub uom: String,
    /// Catalog grouping, or the `Uncategorized` sentinel.
    pub category: Category,
    /// Image resource, local or remote.
    pub image_url: String,
}

/// Validated field set for an admin product edit.
///
/// Covers the editable detail fields (name, code, price, uom). Category and
/// image changes go through their own operations.
#[derive(Debug, Clone)]
pub struct ProductEdit {
    pub name: String,
    pub code: String,
    pub price: Price,
    pub uom: String,
}

impl ProductEdit {
    /// Build an edit from raw form input, trimming and validating.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] if any field is empty after
    /// trimming. Price negativity is rejected upstream by [`Price::new`].
    pub fn new(name: &str, code: &str, price: Price, uom: &str) -> Result<Self, StoreError> {
        let name = name.trim();
        let code = code.trim();
        let uom = uom.trim();
        if name.is_empty() {
            return Err(StoreError::MissingField("name"));
        }
        if code.is_empty() {
            return Err(StoreError::MissingField("code"));
        }
        if uom.is_empty() {
            return Err(StoreError::MissingField("uom"));
        }
        Ok(Self {
            name: name.to_owned(),
            code: code.to_owned(),
            price,
            uom: uom.to_owned(),
        })
    }
}

/// The authoritative product collection, persisted to a JSON file.
#[derive(Debug)]
pub struct ProductStore {
    path: PathBuf,
    products: Vec<Product>,
}

impl ProductStore {
    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. A corrupt or unreadable file is
    /// logged and also yields an empty store - a load failure is never
    /// surfaced to the caller.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let products = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Vec<Product>>(&json) {
                Ok(products) => products,
                Err(error) => {
                    warn!(path = %path.display(), %error, "Corrupt product store, resetting to empty");
                    Vec::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(error) => {
                warn!(path = %path.display(), %error, "Unreadable product store, resetting to empty");
                Vec::new()
            }
        };
        debug!(path = %path.display(), count = products.len(), "Product store loaded");
        Self { path, products }
    }

    /// Create an empty store that will persist to `path`.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            products: Vec::new(),
        }
    }

    /// Serialize the full product list to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.products)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = self.products.len(), "Product store saved");
        Ok(())
    }

    /// Path the store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its ID.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by its business code (exact match).
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    pub(crate) fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.code == code)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Append a product created by the reconciler. Does not persist; the
    /// reconciliation pass saves once after processing every row.
    pub(crate) fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Apply an admin edit to a product's detail fields and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown ID, or a write
    /// error from [`Self::save`]. The edit itself is pre-validated by
    /// [`ProductEdit::new`], so no partial application can occur.
    pub fn update_details(&mut self, id: ProductId, edit: ProductEdit) -> Result<(), StoreError> {
        let product = self
            .find_by_id_mut(id)
            .ok_or(StoreError::ProductNotFound(id))?;
        product.name = edit.name;
        product.code = edit.code;
        product.price = edit.price;
        product.uom = edit.uom;
        self.save()
    }

    /// Replace a product's image reference and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown ID, or a write
    /// error from [`Self::save`].
    pub fn set_image(&mut self, id: ProductId, image_url: String) -> Result<(), StoreError> {
        let product = self
            .find_by_id_mut(id)
            .ok_or(StoreError::ProductNotFound(id))?;
        product.image_url = image_url;
        self.save()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rust_decimal::dec;

    pub(crate) fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("sk-products-{}.json", uuid::Uuid::new_v4()))
    }

    pub(crate) fn sample_product(code: &str, price: Price) -> Product {
        Product {
            id: ProductId::new(),
            code: code.to_owned(),
            name: format!("Product {code}"),
            price,
            uom: "piece".to_owned(),
            category: Category::Bekolite,
            image_url: format!("https://picsum.photos/seed/{code}/300/200"),
        }
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let store = ProductStore::load(temp_store_path());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_resets_to_empty() {
        let path = temp_store_path();
        fs::write(&path, "{not json").expect("write corrupt file");
        let store = ProductStore::load(&path);
        assert!(store.is_empty());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let path = temp_store_path();
        let mut store = ProductStore::empty(&path);
        store.push(sample_product("SKB100", Price::new(dec!(50)).expect("price")));
        store.save().expect("save");

        let reloaded = ProductStore::load(&path);
        assert_eq!(reloaded.len(), 1);
        let product = reloaded.find_by_code("SKB100").expect("product present");
        assert_eq!(product.price.amount(), dec!(50));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_update_details_persists_all_fields() {
        let path = temp_store_path();
        let mut store = ProductStore::empty(&path);
        let product = sample_product("SKB100", Price::new(dec!(50)).expect("price"));
        let id = product.id;
        store.push(product);

        let edit = ProductEdit::new(
            "Deluxe Switch",
            "SKB101",
            Price::new(dec!(60)).expect("price"),
            "box",
        )
        .expect("valid edit");
        store.update_details(id, edit).expect("update");

        let reloaded = ProductStore::load(&path);
        let product = reloaded.find_by_id(id).expect("product present");
        assert_eq!(product.name, "Deluxe Switch");
        assert_eq!(product.code, "SKB101");
        assert_eq!(product.price.amount(), dec!(60));
        assert_eq!(product.uom, "box");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_edit_rejects_blank_fields() {
        let price = Price::new(dec!(10)).expect("price");
        assert!(matches!(
            ProductEdit::new("  ", "SKB100", price, "piece"),
            Err(StoreError::MissingField("name"))
        ));
        assert!(matches!(
            ProductEdit::new("Switch", "", price, "piece"),
            Err(StoreError::MissingField("code"))
        ));
        assert!(matches!(
            ProductEdit::new("Switch", "SKB100", price, "\t"),
            Err(StoreError::MissingField("uom"))
        ));
    }

    #[test]
    fn test_update_details_unknown_id_is_an_error() {
        let mut store = ProductStore::empty(temp_store_path());
        let edit = ProductEdit::new(
            "Switch",
            "SKB100",
            Price::new(dec!(10)).expect("price"),
            "piece",
        )
        .expect("valid edit");
        assert!(matches!(
            store.update_details(ProductId::new(), edit),
            Err(StoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_set_image_replaces_reference() {
        let path = temp_store_path();
        let mut store = ProductStore::empty(&path);
        let product = sample_product("SKW10", Price::new(dec!(5)).expect("price"));
        let id = product.id;
        store.push(product);

        store
            .set_image(id, "data:image/png;base64,AAAA".to_owned())
            .expect("set image");
        let product = store.find_by_id(id).expect("product present");
        assert_eq!(product.image_url, "data:image/png;base64,AAAA");
        let _ = fs::remove_file(path);
    }
}
