//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! hs-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `HIDESTYLE_DATABASE_URL` - `PostgreSQL` connection string
//!
//! Migration files live in `crates/server/migrations/`; the server never
//! runs them on startup.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors from running migrations.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run catalog database migrations.
///
/// # Errors
///
/// Returns `MigrateError` if the database URL is missing, the connection
/// fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("HIDESTYLE_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| MigrateError::MissingEnvVar("HIDESTYLE_DATABASE_URL"))?;

    tracing::info!("Connecting to catalog database...");
    let pool = sqlx::PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Running catalog migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Catalog migrations complete!");
    Ok(())
}
