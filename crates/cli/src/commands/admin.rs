//! Catalog administration commands.
//!
//! The submission flow mirrors the admin form: image files upload to the
//! asset host first, one by one, and each success appends a hosted URL to
//! the pending payload. An upload failure is logged and otherwise ignored -
//! the payload simply goes out without that image. Create/update then hit
//! the catalog API; required-field validation is the store schema's call.

use std::path::PathBuf;

use tracing::{info, warn};

use hidestyle_cli::{api::CatalogClient, catalog, config::CliConfig, upload::ImageUploader};
use hidestyle_core::{ProductId, ProductInput};

/// Product fields shared by `admin add` and `admin edit`.
///
/// Everything is optional; the store schema decides what a create may omit.
#[derive(Debug, clap::Args)]
pub struct ProductArgs {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Category
    #[arg(long)]
    pub category: Option<String>,

    /// Price
    #[arg(long)]
    pub price: Option<rust_decimal::Decimal>,

    /// Previous price, for discount display
    #[arg(long)]
    pub old_price: Option<rust_decimal::Decimal>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Stock amount
    #[arg(long)]
    pub stock: Option<i32>,

    /// Featured flag
    #[arg(long)]
    pub featured: Option<bool>,

    /// Already-hosted image URL (repeatable)
    #[arg(long = "image")]
    pub images: Vec<String>,

    /// Available size (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Available color (repeatable)
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Local image file to upload to the asset host (repeatable)
    #[arg(long = "upload")]
    pub uploads: Vec<PathBuf>,
}

impl ProductArgs {
    /// Build the API payload, folding in freshly uploaded image URLs.
    ///
    /// Empty repeatable lists become `None` so an edit leaves the stored
    /// value alone.
    fn into_input(self, uploaded: Vec<String>) -> ProductInput {
        let mut images = self.images;
        images.extend(uploaded);

        ProductInput {
            name: self.name,
            category: self.category,
            price: self.price,
            old_price: self.old_price,
            description: self.description,
            stock: self.stock,
            featured: self.featured,
            images: if images.is_empty() { None } else { Some(images) },
            sizes: if self.sizes.is_empty() {
                None
            } else {
                Some(self.sizes)
            },
            colors: if self.colors.is_empty() {
                None
            } else {
                Some(self.colors)
            },
        }
    }
}

/// Upload image files to the asset host, returning the URLs that succeeded.
///
/// Failures are logged and skipped; they never fail the submission.
async fn upload_images(config: &CliConfig, uploads: &[PathBuf]) -> Vec<String> {
    if uploads.is_empty() {
        return Vec::new();
    }

    let Some(cloud_name) = config.cloudinary_cloud_name.as_deref() else {
        warn!(
            "CLOUDINARY_CLOUD_NAME not set; skipping {} upload(s)",
            uploads.len()
        );
        return Vec::new();
    };

    let uploader = ImageUploader::new(cloud_name, &config.cloudinary_upload_preset);
    let mut urls = Vec::new();
    for path in uploads {
        match uploader.upload(path).await {
            Ok(url) => {
                info!("Uploaded {} -> {url}", path.display());
                urls.push(url);
            }
            Err(e) => warn!("Upload failed for {}: {e}", path.display()),
        }
    }
    urls
}

/// Create a product.
///
/// # Errors
///
/// Returns an error if the catalog API rejects the payload or is
/// unreachable.
pub async fn add(config: &CliConfig, args: ProductArgs) -> Result<(), Box<dyn std::error::Error>> {
    let uploaded = upload_images(config, &args.uploads).await;
    let input = args.into_input(uploaded);

    let client = CatalogClient::new(&config.api_url);
    let product = client.create(&input).await?;

    info!("Created product {} ({})", product.id, product.name);
    Ok(())
}

/// Edit an existing product.
///
/// The stored image list is seeded into the payload and new uploads append
/// to it, the way the edit form carries existing images in its state.
///
/// # Errors
///
/// Returns an error if the product does not exist or the API call fails.
pub async fn edit(
    config: &CliConfig,
    id: ProductId,
    args: ProductArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(&config.api_url);
    let existing = client.get(id).await?;

    let uploaded = upload_images(config, &args.uploads).await;
    let mut input = args.into_input(uploaded);

    let mut images = existing.images;
    images.extend(input.images.take().unwrap_or_default());
    input.images = Some(images);

    let product = client.update(id, &input).await?;
    info!("Updated product {} ({})", product.id, product.name);
    Ok(())
}

/// Delete a product. The API is idempotent, so a repeat delete succeeds.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn delete(config: &CliConfig, id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(&config.api_url);
    client.delete(id).await?;
    info!("Deleted product {id}");
    Ok(())
}

/// List the catalog with an optional client-side search.
///
/// # Errors
///
/// Returns an error if the catalog API call fails.
pub async fn dashboard(
    config: &CliConfig,
    search: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(&config.api_url);
    let products = client.list(None, hidestyle_core::SortKey::Newest).await?;

    let rows: Vec<&hidestyle_core::Product> = match search {
        Some(query) => catalog::search(&products, query),
        None => products.iter().collect(),
    };

    info!("{} of {} products", rows.len(), products.len());
    for product in rows {
        info!(
            "  {}  {}  {}  ${}  stock {}",
            product.id,
            product.name,
            product.category.as_deref().unwrap_or("-"),
            product.price,
            product.stock
        );
    }
    Ok(())
}
