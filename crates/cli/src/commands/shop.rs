//! Shop browsing commands.
//!
//! The server applies category filter and sort; the price ceiling is layered
//! client-side over the fetched set, exactly as the shop listing does it.

use tracing::info;

use hidestyle_cli::{api::CatalogClient, catalog, config::CliConfig};
use hidestyle_core::{Product, ProductId, SortKey};

/// List products with server-side filter/sort and the client-side price
/// ceiling.
///
/// # Errors
///
/// Returns an error if the catalog API call fails.
pub async fn list(
    config: &CliConfig,
    category: Option<String>,
    sort: &str,
    max_price: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let sort = SortKey::parse_or_default(Some(sort));
    let client = CatalogClient::new(&config.api_url);

    let fetched = client.list(category.as_deref(), sort).await?;
    let total = fetched.len();

    let ceiling = catalog::clamp_ceiling(max_price);
    let visible = catalog::filter_by_price_ceiling(fetched, ceiling);

    info!(
        "{} of {} products (sort: {sort}, price <= {ceiling})",
        visible.len(),
        total
    );
    for product in &visible {
        info!("  {}", listing_line(product));
    }

    Ok(())
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns an error if the product does not exist or the call fails.
pub async fn show(config: &CliConfig, id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(&config.api_url);
    let product = client.get(id).await?;

    info!("{}", product.name);
    if product.discounted()
        && let Some(old_price) = product.old_price
    {
        info!("  Price: ${} (was ${old_price})", product.price);
    } else {
        info!("  Price: ${}", product.price);
    }
    info!(
        "  Category: {}",
        product.category.as_deref().unwrap_or("Uncategorized")
    );
    if let Some(description) = &product.description {
        info!("  {description}");
    }
    if !product.sizes.is_empty() {
        info!("  Sizes: {}", product.sizes.join(", "));
    }
    if !product.colors.is_empty() {
        info!("  Colors: {}", product.colors.join(", "));
    }
    info!("  Stock: {}", product.stock);
    for image in &product.images {
        info!("  Image: {image}");
    }

    Ok(())
}

/// One listing row: id, price, name, category, and a featured badge.
fn listing_line(product: &Product) -> String {
    let badge = if product.featured { "  [featured]" } else { "" };
    format!(
        "{}  ${}  {}  ({}){badge}",
        product.id,
        product.price,
        product.name,
        product.category.as_deref().unwrap_or("Uncategorized"),
    )
}
