//! The product schema shared by the API contract and the cart snapshot.
//!
//! There is exactly one definition of what a product looks like. The server
//! serializes [`Product`] out of the catalog store, the client deserializes
//! the same type back, and the cart snapshots it verbatim into line items.
//! Payloads crossing the boundary (create/update bodies) use
//! [`ProductInput`], where every field is optional: required-field
//! enforcement (name, price) belongs to the store schema, not to this layer.
//!
//! The wire format is camelCase JSON (`oldPrice`, `createdAt`, ...) to match
//! the public API contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A catalog product as stored and served.
///
/// The identifier and both timestamps are server-assigned; the identifier is
/// immutable once assigned, all other fields are mutable via update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Non-negative by convention only; the store does not enforce it.
    pub price: Decimal,
    /// Previous price, used only for discount display.
    #[serde(default)]
    pub old_price: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    pub stock: i32,
    pub featured: bool,
    /// Ordered image URLs; the first one is the listing thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product has a visible discount (`oldPrice` above `price`).
    #[must_use]
    pub fn discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}

/// Partial product payload for create and update requests.
///
/// Every field is optional so the same type covers both a complete admin
/// form submission and a partial update. Fields left `None` are omitted:
/// on create they fall back to the store's column defaults (or fail its
/// NOT NULL schema for name/price), on update they keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub old_price: Option<Decimal>,
    pub description: Option<String>,
    pub stock: Option<i32>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product {
            id: ProductId::generate(),
            name: "Premium T-Shirt".to_string(),
            category: Some("Apparel".to_string()),
            price: Decimal::new(2999, 2),
            old_price: Some(Decimal::new(3999, 2)),
            description: None,
            stock: 12,
            featured: true,
            images: vec!["https://img.example/a.jpg".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["Red".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert!(value.get("oldPrice").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("old_price").is_none());
    }

    #[test]
    fn test_price_serializes_as_json_number() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert!(value["price"].is_number());
    }

    #[test]
    fn test_product_round_trips() {
        let product = sample();
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(product.id, back.id);
        assert_eq!(product.price, back.price);
        assert_eq!(product.sizes, back.sizes);
    }

    #[test]
    fn test_input_accepts_partial_payload() {
        let input: ProductInput =
            serde_json::from_value(json!({ "name": "Cap", "price": 15 })).expect("deserialize");
        assert_eq!(input.name.as_deref(), Some("Cap"));
        assert_eq!(input.price, Some(Decimal::from(15)));
        assert!(input.category.is_none());
        assert!(input.images.is_none());
    }

    #[test]
    fn test_discounted_requires_higher_old_price() {
        let mut product = sample();
        assert!(product.discounted());
        product.old_price = Some(product.price);
        assert!(!product.discounted());
        product.old_price = None;
        assert!(!product.discounted());
    }
}
