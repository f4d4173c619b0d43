//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HIDESTYLE_API_URL` - Catalog API base URL (default: http://localhost:3000)
//! - `HIDESTYLE_CART_PATH` - Cart slot file (default: .hidestyle/cart.json)
//! - `CLOUDINARY_CLOUD_NAME` - Asset host cloud account (required for uploads)
//! - `CLOUDINARY_UPLOAD_PRESET` - Unsigned upload preset (default: hidestyle_preset)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog API base URL
    pub api_url: String,
    /// Path of the persisted cart slot
    pub cart_path: PathBuf,
    /// Asset host cloud account; uploads are unavailable without it
    pub cloudinary_cloud_name: Option<String>,
    /// Unsigned upload preset identifier
    pub cloudinary_upload_preset: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API URL is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = std::env::var("HIDESTYLE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Url::parse(&api_url).map_err(|e| {
            ConfigError::InvalidEnvVar("HIDESTYLE_API_URL".to_string(), e.to_string())
        })?;

        let cart_path = std::env::var("HIDESTYLE_CART_PATH")
            .map_or_else(|_| PathBuf::from(".hidestyle/cart.json"), PathBuf::from);

        let cloudinary_cloud_name = std::env::var("CLOUDINARY_CLOUD_NAME")
            .ok()
            .filter(|v| !v.is_empty());
        let cloudinary_upload_preset = std::env::var("CLOUDINARY_UPLOAD_PRESET")
            .unwrap_or_else(|_| "hidestyle_preset".to_string());

        Ok(Self {
            api_url,
            cart_path,
            cloudinary_cloud_name,
            cloudinary_upload_preset,
        })
    }
}
