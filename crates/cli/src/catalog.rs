//! Client-side listing composition.
//!
//! The server owns category filtering and sorting; these helpers are the
//! purely client-side layers on top of a fetched set - the price-ceiling
//! slider on the shop listing and the dashboard's free-text search. Both
//! are pure and idempotent, and neither is ever sent to the server.

use rust_decimal::Decimal;

use hidestyle_core::Product;

/// Upper bound of the price-ceiling slider.
pub const PRICE_CEILING_MAX: u32 = 5000;

/// Clamp a requested ceiling to the slider's [0, 5000] range.
#[must_use]
pub fn clamp_ceiling(value: u32) -> Decimal {
    Decimal::from(value.min(PRICE_CEILING_MAX))
}

/// Restrict a fetched set to products priced at or under the ceiling.
#[must_use]
pub fn filter_by_price_ceiling(products: Vec<Product>, ceiling: Decimal) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.price <= ceiling)
        .collect()
}

/// Dashboard search: case-insensitive substring match on name OR category.
#[must_use]
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hidestyle_core::ProductId;

    fn product(name: &str, category: Option<&str>, price: i64) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            category: category.map(String::from),
            price: Decimal::from(price),
            old_price: None,
            description: None,
            stock: 0,
            featured: false,
            images: vec![],
            sizes: vec![],
            colors: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_price_ceiling_keeps_at_or_under() {
        let products = vec![
            product("A", None, 10),
            product("B", None, 50),
            product("C", None, 200),
        ];

        let visible = filter_by_price_ceiling(products, Decimal::from(100));
        let prices: Vec<_> = visible.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![Decimal::from(10), Decimal::from(50)]);
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let products = vec![product("A", None, 100)];
        assert_eq!(
            filter_by_price_ceiling(products, Decimal::from(100)).len(),
            1
        );
    }

    #[test]
    fn test_clamp_ceiling_bounds() {
        assert_eq!(clamp_ceiling(9999), Decimal::from(5000));
        assert_eq!(clamp_ceiling(0), Decimal::ZERO);
        assert_eq!(clamp_ceiling(250), Decimal::from(250));
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let products = vec![
            product("Premium T-Shirt", Some("Apparel"), 20),
            product("Sneakers", Some("Footwear"), 80),
        ];

        let hits = search(&products, "shirt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Premium T-Shirt");
    }

    #[test]
    fn test_search_matches_category() {
        let products = vec![
            product("Premium T-Shirt", Some("Apparel"), 20),
            product("Sneakers", Some("Footwear"), 80),
        ];

        let hits = search(&products, "FOOT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sneakers");
    }

    #[test]
    fn test_search_skips_uncategorized_on_category_match() {
        let products = vec![product("Mystery Box", None, 5)];
        assert!(search(&products, "apparel").is_empty());
        assert_eq!(search(&products, "mystery").len(), 1);
    }
}
