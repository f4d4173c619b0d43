//! Catalog sort keys.

use serde::{Deserialize, Serialize};

/// Sort order for catalog listings.
///
/// Mirrors the public API's `sort` query parameter values. Unrecognized
/// values fall back to the default (`newest`) rather than erroring, so a
/// stale or hand-edited URL still renders a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first, by creation time.
    #[default]
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Featured products first, then newest.
    Featured,
}

impl SortKey {
    /// Parse a sort parameter, falling back to [`SortKey::Newest`] for
    /// anything unrecognized (including the parameter being absent).
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("newest") => Self::Newest,
            Some("price-asc") => Self::PriceAsc,
            Some("price-desc") => Self::PriceDesc,
            Some("featured") => Self::Featured,
            _ => Self::default(),
        }
    }

    /// The query-parameter spelling of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Featured => "featured",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(SortKey::parse_or_default(Some("newest")), SortKey::Newest);
        assert_eq!(
            SortKey::parse_or_default(Some("price-asc")),
            SortKey::PriceAsc
        );
        assert_eq!(
            SortKey::parse_or_default(Some("price-desc")),
            SortKey::PriceDesc
        );
        assert_eq!(
            SortKey::parse_or_default(Some("featured")),
            SortKey::Featured
        );
    }

    #[test]
    fn test_unrecognized_values_fall_back_to_newest() {
        assert_eq!(SortKey::parse_or_default(Some("cheapest")), SortKey::Newest);
        assert_eq!(SortKey::parse_or_default(Some("")), SortKey::Newest);
        assert_eq!(SortKey::parse_or_default(None), SortKey::Newest);
    }

    #[test]
    fn test_display_round_trips() {
        for key in [
            SortKey::Newest,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Featured,
        ] {
            assert_eq!(SortKey::parse_or_default(Some(key.as_str())), key);
        }
    }
}
