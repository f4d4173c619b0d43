//! Cart commands.
//!
//! The cart lives entirely on this side of the wire: adding snapshots the
//! product as fetched right now, and nothing here ever revalidates a line
//! against the live catalog. Every mutation flushes to the file slot.

use tracing::info;

use hidestyle_cli::{
    api::CatalogClient,
    cart::{Cart, FileCartStore},
    config::CliConfig,
};
use hidestyle_core::ProductId;

/// Load the session cart from its configured file slot.
fn open_cart(config: &CliConfig) -> Cart<FileCartStore> {
    Cart::load(FileCartStore::new(config.cart_path.clone()))
}

/// Fetch a product and add it to the cart.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched; cart persistence
/// itself never errors the command.
pub async fn add(
    config: &CliConfig,
    id: ProductId,
    quantity: u32,
    size: &str,
    color: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(&config.api_url);
    let product = client.get(id).await?;

    let mut cart = open_cart(config);
    cart.add(&product, quantity, size, color);

    info!(
        "Added {quantity} x {} to cart ({} items, total ${})",
        product.name,
        cart.count(),
        cart.total()
    );
    Ok(())
}

/// Remove the line matching the identity tuple; absent lines are a no-op.
pub fn remove(config: &CliConfig, id: ProductId, size: &str, color: &str) {
    let mut cart = open_cart(config);
    cart.remove(id, size, color);
    info!("Cart holds {} items (total ${})", cart.count(), cart.total());
}

/// Empty the cart.
pub fn clear(config: &CliConfig) {
    let mut cart = open_cart(config);
    cart.clear();
    info!("Cart cleared");
}

/// Show cart lines, count, and the authoritative total.
pub fn show(config: &CliConfig) {
    let cart = open_cart(config);
    if cart.is_empty() {
        info!("Cart is empty");
        return;
    }

    for line in cart.lines() {
        let variant = match (line.selected_size.as_str(), line.selected_color.as_str()) {
            ("", "") => String::new(),
            (size, "") => format!(" [{size}]"),
            ("", color) => format!(" [{color}]"),
            (size, color) => format!(" [{size}/{color}]"),
        };
        info!(
            "  {} x {}{variant}  ${} each  (${})",
            line.quantity,
            line.product.name,
            line.product.price,
            line.line_total()
        );
    }
    info!("{} items, total ${}", cart.count(), cart.total());
}

/// Checkout stub - there is no payment processing.
pub fn checkout(config: &CliConfig) {
    let cart = open_cart(config);
    if cart.is_empty() {
        info!("Cart is empty - nothing to check out");
        return;
    }
    info!(
        "Checkout is not available yet; {} items (total ${}) stay in the cart",
        cart.count(),
        cart.total()
    );
}
