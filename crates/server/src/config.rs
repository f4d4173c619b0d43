//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HIDESTYLE_DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `HIDESTYLE_HOST` - Bind address (default: 127.0.0.1)
//! - `HIDESTYLE_PORT` - Listen port (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g., production)
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry performance trace sample rate
    pub sentry_traces_sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_required_env("HIDESTYLE_DATABASE_URL").map(SecretString::from)?;
        let host = get_env_or_default("HIDESTYLE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HIDESTYLE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("HIDESTYLE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HIDESTYLE_PORT".to_string(), e.to_string()))?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_rate("SENTRY_TRACES_SAMPLE_RATE", "0.1")?;

        Ok(Self {
            database_url,
            host,
            port,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an environment variable with a fallback default.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an optional environment variable (empty values count as unset).
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse a sample-rate variable into an `f32`.
fn parse_rate(name: &str, default: &str) -> Result<f32, ConfigError> {
    get_env_or_default(name, default)
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "0.0.0.0".parse().expect("valid addr"),
            port: 4000,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.1,
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("HIDESTYLE_DATABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: HIDESTYLE_DATABASE_URL"
        );
    }
}
