//! Database operations for the catalog `PostgreSQL` store.
//!
//! # Database: `hidestyle`
//!
//! ## Tables
//!
//! - `products` - The catalog; the only collection this service owns
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run explicitly
//! via the CLI (never on server startup):
//! ```bash
//! cargo run -p hidestyle-cli -- migrate
//! ```

pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use products::ProductRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store's schema rejected a write (NOT NULL / CHECK violation).
    /// Carries the underlying database message for the client.
    #[error("validation: {0}")]
    Validation(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
