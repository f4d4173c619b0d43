//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Products (JSON)
//! GET    /api/products         - List products (?category=&sort=)
//! POST   /api/products         - Create product
//! GET    /api/products/{id}    - Product by id
//! PUT    /api/products/{id}    - Update product
//! DELETE /api/products/{id}    - Delete product (idempotent)
//! ```
//!
//! Any other verb on a product path answers 405 with an `Allow` header
//! naming the supported set.

pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the product API router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list)
                .post(products::create)
                .fallback(products::collection_method_not_allowed),
        )
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove)
                .fallback(products::item_method_not_allowed),
        )
}

/// Create all routes for the catalog API.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api/products", product_routes())
}
