//! Catalog query: category and free-text product filtering.
//!
//! Filtering is order-preserving over the store's insertion order. The
//! query returns the filtered sequence only; wording the empty-state
//! message ("no products at all" vs "none in this category" vs "none
//! matching the search") is a presentation concern.

use sk_accessories_core::Category;

use crate::store::Product;

/// Filter criteria for a catalog query.
///
/// An unset category means "all products". A search term, if non-empty
/// after trimming, restricts to products whose name or code contains it as
/// a case-insensitive substring; both filters are ANDed.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<Category>,
    pub search: Option<String>,
}

impl CatalogFilter {
    /// Filter to a single category.
    #[must_use]
    pub const fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            search: None,
        }
    }

    /// Free-text search across all categories.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(term.into()),
        }
    }

    /// Restrict this filter by a search term as well.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Apply `filter` to `products`, preserving input order.
#[must_use]
pub fn query<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    let term = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    products
        .iter()
        .filter(|p| filter.category.is_none_or(|c| p.category == c))
        .filter(|p| {
            term.as_deref().is_none_or(|t| {
                p.name.to_lowercase().contains(t) || p.code.to_lowercase().contains(t)
            })
        })
        .collect()
}
