//! The cart state manager.
//!
//! A cart is a list of line items, each a product snapshot plus a quantity
//! and a size/color variant selection. Two additions land on the same line
//! iff their identity tuple `(product id, selected size, selected color)`
//! matches exactly; the empty string is a valid variant value meaning "no
//! selection".
//!
//! The cart is constructed once per session from its persistence slot and
//! flushes the full line list back after every mutation. Persistence is
//! fire-and-forget: a write failure is logged and swallowed, and corrupt
//! persisted data loads as an empty cart rather than an error. Count and
//! total are derived on read - [`Cart::total`] is the one authoritative
//! total computation, whatever surface displays it.

pub mod storage;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hidestyle_core::{Product, ProductId};

pub use storage::{CartStore, CartStoreError, FileCartStore, MemoryCartStore};

/// One (product, variant) entry in the cart.
///
/// The product fields are a snapshot captured at add-time and never
/// revalidated against the live catalog. The persisted layout flattens
/// them alongside `quantity`/`selectedSize`/`selectedColor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    pub selected_size: String,
    pub selected_color: String,
}

impl CartLine {
    /// Whether this line matches the given identity tuple.
    fn matches(&self, product_id: ProductId, size: &str, color: &str) -> bool {
        self.product.id == product_id && self.selected_size == size && self.selected_color == color
    }

    /// This line's contribution to the cart total.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Client-side cart state, bound to an injected persistence slot.
pub struct Cart<S: CartStore> {
    store: S,
    lines: Vec<CartLine>,
}

impl<S: CartStore> Cart<S> {
    /// Load the cart from its slot.
    ///
    /// Fails open: an unreadable slot or unparseable contents yield an
    /// empty cart (logged at warn), never an error.
    pub fn load(store: S) -> Self {
        let lines = match store.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!("Discarding unparseable cart data: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read cart slot: {e}");
                Vec::new()
            }
        };
        Self { store, lines }
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same identity tuple exists, its quantity is
    /// incremented by `quantity` - no upper bound and no check against the
    /// product's stock. Otherwise a new line snapshots the product.
    pub fn add(&mut self, product: &Product, quantity: u32, selected_size: &str, selected_color: &str) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, selected_size, selected_color))
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
                selected_size: selected_size.to_string(),
                selected_color: selected_color.to_string(),
            }),
        }
        self.persist();
    }

    /// Remove the line matching the identity tuple exactly.
    ///
    /// A tuple with no matching line is a no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId, selected_size: &str, selected_color: &str) {
        self.lines
            .retain(|line| !line.matches(product_id, selected_size, selected_color));
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Number of items in the cart - the sum of line quantities,
    /// recomputed on read.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The authoritative cart total: `Σ price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The current line items.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Flush the full line list to the slot. Fire-and-forget: failures are
    /// logged and swallowed, and nothing retries.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.lines) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to serialize cart: {e}");
                return;
            }
        };
        if let Err(e) = self.store.write(&payload) {
            tracing::warn!("Failed to persist cart: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;

    fn product(name: &str, price: i64) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            category: Some("Apparel".to_string()),
            price: Decimal::from(price),
            old_price: None,
            description: None,
            stock: 10,
            featured: false,
            images: vec![],
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["Red".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn empty_cart() -> Cart<MemoryCartStore> {
        Cart::load(MemoryCartStore::new())
    }

    #[test]
    fn test_adding_same_identity_merges_quantities() {
        let mut cart = empty_cart();
        let shirt = product("Shirt", 10);

        cart.add(&shirt, 2, "S", "Red");
        cart.add(&shirt, 3, "S", "Red");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_different_variants_are_distinct_lines() {
        let mut cart = empty_cart();
        let shirt = product("Shirt", 10);

        cart.add(&shirt, 1, "S", "Red");
        cart.add(&shirt, 1, "M", "Red");

        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_no_variant_selected_is_its_own_identity() {
        let mut cart = empty_cart();
        let shirt = product("Shirt", 10);

        cart.add(&shirt, 1, "", "");
        cart.add(&shirt, 1, "S", "");

        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_removing_absent_identity_is_a_no_op() {
        let mut cart = empty_cart();
        let shirt = product("Shirt", 10);

        cart.add(&shirt, 2, "S", "Red");
        cart.remove(shirt.id, "M", "Red");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_count_sums_quantities() {
        let mut cart = empty_cart();
        cart.add(&product("A", 10), 2, "", "");
        cart.add(&product("B", 5), 3, "", "");

        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let mut cart = empty_cart();
        cart.add(&product("A", 10), 2, "", "");
        cart.add(&product("B", 5), 1, "", "");

        assert_eq!(cart.total(), Decimal::from(25));
    }

    #[test]
    fn test_clear_empties_cart_and_slot() {
        let store = MemoryCartStore::new();
        let mut cart = Cart::load(store.clone());
        cart.add(&product("A", 10), 2, "", "");

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(store.snapshot().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_slot_loads_as_empty_cart() {
        let store = MemoryCartStore::seeded("{not json");
        let cart = Cart::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_mutations_persist_snapshot_layout() {
        let store = MemoryCartStore::new();
        let mut cart = Cart::load(store.clone());
        let shirt = product("Shirt", 10);

        cart.add(&shirt, 2, "S", "Red");

        let raw = store.snapshot().expect("persisted");
        let value: Value = serde_json::from_str(&raw).expect("valid json");
        let line = &value[0];
        assert_eq!(line["id"], Value::String(shirt.id.to_string()));
        assert_eq!(line["name"], "Shirt");
        assert_eq!(line["quantity"], 2);
        assert_eq!(line["selectedSize"], "S");
        assert_eq!(line["selectedColor"], "Red");
    }

    #[test]
    fn test_cart_reloads_from_persisted_state() {
        let store = MemoryCartStore::new();
        let shirt = product("Shirt", 10);
        {
            let mut cart = Cart::load(store.clone());
            cart.add(&shirt, 2, "S", "Red");
        }

        let reloaded = Cart::load(store);
        assert_eq!(reloaded.count(), 2);
        assert_eq!(reloaded.lines()[0].product.name, "Shirt");
    }

    #[test]
    fn test_snapshot_is_not_revalidated_against_live_product() {
        let mut cart = empty_cart();
        let mut shirt = product("Shirt", 10);
        cart.add(&shirt, 1, "", "");

        // The catalog price changes after the add; the line keeps its
        // snapshot.
        shirt.price = Decimal::from(99);
        assert_eq!(cart.total(), Decimal::from(10));
    }
}
