//! Catalog categories.
//!
//! The catalog is grouped into a fixed set of categories. Products imported
//! from a price list whose code matches no known category prefix land in
//! [`Category::Uncategorized`] until an operator assigns one manually.

use serde::{Deserialize, Serialize};

/// A catalog grouping, or the `Uncategorized` sentinel.
///
/// Serde renames match the strings persisted by the product store, so stored
/// catalogs written by earlier builds keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "BEKOLITE")]
    Bekolite,
    #[serde(rename = "BREAKER")]
    Breaker,
    #[serde(rename = "WIRE")]
    Wire,
    #[serde(rename = "CHINA FITTING")]
    ChinaFitting,
    #[serde(rename = "SK FAN")]
    SkFan,
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl Category {
    /// Categories an operator may assign to an uncategorized product.
    pub const ASSIGNABLE: &'static [Self] = &[
        Self::Bekolite,
        Self::Breaker,
        Self::Wire,
        Self::ChinaFitting,
        Self::SkFan,
    ];

    /// Display/storage name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bekolite => "BEKOLITE",
            Self::Breaker => "BREAKER",
            Self::Wire => "WIRE",
            Self::ChinaFitting => "CHINA FITTING",
            Self::SkFan => "SK FAN",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Whether this is the `Uncategorized` sentinel.
    #[must_use]
    pub const fn is_uncategorized(&self) -> bool {
        matches!(self, Self::Uncategorized)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_storage_format() {
        let json = serde_json::to_string(&Category::ChinaFitting).expect("serialize");
        assert_eq!(json, "\"CHINA FITTING\"");

        let back: Category = serde_json::from_str("\"SK FAN\"").expect("deserialize");
        assert_eq!(back, Category::SkFan);
    }

    #[test]
    fn test_assignable_excludes_sentinel() {
        assert!(!Category::ASSIGNABLE.contains(&Category::Uncategorized));
        assert_eq!(Category::ASSIGNABLE.len(), 5);
    }
}
