//! Product API route handlers.
//!
//! Thin JSON handlers over [`ProductRepository`]; each request is an
//! independent round-trip to the store with no cross-operation
//! transactionality.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use hidestyle_core::{Product, ProductId, ProductInput, SortKey};

use crate::db::ProductRepository;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// List products with optional category filter and server-side sort.
///
/// Unrecognized `sort` values fall back to newest-first.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let sort = SortKey::parse_or_default(query.sort.as_deref());
    let category = query.category.as_deref().filter(|c| !c.is_empty());

    let products = ProductRepository::new(state.pool())
        .list(category, sort)
        .await?;
    Ok(Json(products))
}

/// Get a single product by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;
    Ok(Json(product))
}

/// Create a product. The store assigns the identifier and timestamps;
/// its schema enforces the required fields.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse> {
    let product = ProductRepository::new(state.pool()).create(input).await?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product's mutable fields. Unknown identifiers are a 404.
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(id, input)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;
    Ok(Json(product))
}

/// Delete a product. Idempotent: an already-absent identifier still
/// answers 204.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<ProductId>) -> Result<StatusCode> {
    ProductRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unsupported verbs on the collection path.
pub async fn collection_method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        allow: "GET, POST",
    }
}

/// Fallback for unsupported verbs on the item path.
pub async fn item_method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        allow: "GET, PUT, DELETE",
    }
}
