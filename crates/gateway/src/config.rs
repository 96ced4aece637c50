//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STORE_HOST` - Bind address (default: 127.0.0.1)
//! - `STORE_PORT` - Listen port (default: 4000)
//! - `CATALOG_BASE_URL` - Remote catalog base URL (default: <https://dummyjson.com>)
//! - `CATALOG_CACHE_CAPACITY` - Max cached product snapshots (default: 100)
//! - `CATALOG_CACHE_TTL_SECS` - Product snapshot time-to-live (default: 300)
//! - `CATALOG_TOP_PRODUCTS_LIMIT` - Page size of the top products listing (default: 10)
//! - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Gateway application configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote catalog configuration
    pub catalog: CatalogConfig,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error event sample rate
    pub sentry_sample_rate: f32,
    /// Sentry performance trace sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Remote catalog and product cache configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the remote catalog REST API
    pub base_url: Url,
    /// Maximum number of product snapshots held in the cache
    pub cache_capacity: u64,
    /// How long a product snapshot stays fresh after it is written
    pub cache_ttl: Duration,
    /// Page size of the top products listing
    pub top_products_limit: u32,
}

impl CatalogConfig {
    /// Catalog configuration with the default cache and listing settings.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            cache_capacity: 100,
            cache_ttl: Duration::from_secs(300),
            top_products_limit: 10,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: parse_env_or_default("STORE_HOST", "127.0.0.1")?,
            port: parse_env_or_default("STORE_PORT", "4000")?,
            catalog: CatalogConfig::from_env()?,
            log_format: parse_env_or_default("LOG_FORMAT", "pretty")?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env_or_default("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let ttl_secs: u64 = parse_env_or_default("CATALOG_CACHE_TTL_SECS", "300")?;

        Ok(Self {
            base_url: parse_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL)?,
            cache_capacity: parse_env_or_default("CATALOG_CACHE_CAPACITY", "100")?,
            cache_ttl: Duration::from_secs(ttl_secs),
            top_products_limit: parse_env_or_default("CATALOG_TOP_PRODUCTS_LIMIT", "10")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable (or its default) into `T`.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_defaults() {
        let catalog = CatalogConfig::new(Url::parse(DEFAULT_CATALOG_BASE_URL).unwrap());
        assert_eq!(catalog.base_url.as_str(), "https://dummyjson.com/");
        assert_eq!(catalog.cache_capacity, 100);
        assert_eq!(catalog.cache_ttl, Duration::from_secs(300));
        assert_eq!(catalog.top_products_limit, 10);
    }

    #[test]
    fn test_parse_value_invalid_port() {
        let result: Result<u16, _> = parse_value("STORE_PORT", "not-a-port");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STORE_PORT"));
    }

    #[test]
    fn test_parse_value_invalid_url() {
        let result: Result<Url, _> = parse_value("CATALOG_BASE_URL", "not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = GatewayConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            catalog: CatalogConfig::new(Url::parse("http://127.0.0.1:9999").unwrap()),
            log_format: LogFormat::Pretty,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
    }
}
