//! Catalog API client.
//!
//! Typed wrapper over the catalog's REST resource. Each operation is an
//! explicit async call returning a result-or-error value; presentation is
//! the caller's concern. Nothing here retries.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use hidestyle_core::{Product, ProductId, ProductInput, SortKey};

/// Errors from catalog API calls.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Network-level failure (server unreachable, protocol error).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The identifier did not resolve.
    #[error("product not found")]
    NotFound,

    /// The API rejected the request; carries the server's error message.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// The API's error payload shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the catalog's `/api/products` resource.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/api/products/{id}", self.base_url)
    }

    /// List products with an optional category filter and a sort order.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` on network failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        category: Option<&str>,
        sort: SortKey,
    ) -> Result<Vec<Product>, ApiClientError> {
        let mut request = self
            .http
            .get(self.products_url())
            .query(&[("sort", sort.as_str())]);
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::NotFound` if the identifier does not
    /// resolve, other `ApiClientError` variants on failure.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Product, ApiClientError> {
        let response = check(self.http.get(self.product_url(id)).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Create a product from a (possibly partial) payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::Api` with the store's message when the
    /// payload fails schema validation.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &ProductInput) -> Result<Product, ApiClientError> {
        let response = check(
            self.http
                .post(self.products_url())
                .json(input)
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Update an existing product's fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::NotFound` for an unknown identifier.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiClientError> {
        let response = check(
            self.http
                .put(self.product_url(id))
                .json(input)
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Delete a product. The server treats this as idempotent, so deleting
    /// an already-absent identifier succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError` on network failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiClientError> {
        check(self.http.delete(self.product_url(id)).send().await?).await?;
        Ok(())
    }
}

/// Map a non-success response to a typed error, keeping the server's
/// `{"error": ...}` message when it sent one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiClientError::NotFound);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| status.to_string(), |body| body.error);
    Err(ApiClientError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = CatalogClient::new("http://localhost:3000/");
        assert_eq!(client.products_url(), "http://localhost:3000/api/products");
    }

    #[test]
    fn test_product_url_embeds_id() {
        let client = CatalogClient::new("http://localhost:3000");
        let id = ProductId::generate();
        assert_eq!(
            client.product_url(id),
            format!("http://localhost:3000/api/products/{id}")
        );
    }
}
