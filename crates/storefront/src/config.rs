//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `PASEKA_HOST` - Bind address (default: 127.0.0.1)
//! - `PASEKA_PORT` - Listen port (default: 3000)
//! - `PASEKA_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `PASEKA_TOAST_SECONDS` - How long the order confirmation stays visible (default: 4)
//! - `PASEKA_VISITOR_IDLE_MINUTES` - Idle time before a visitor's page state is dropped (default: 30)
//! - `PASEKA_MAX_VISITORS` - Upper bound on page states held in memory (default: 10000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use paseka_core::TOAST_DURATION;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// How long the confirmation toast stays up
    pub toast_duration: Duration,
    /// Idle time after which a visitor's page state is torn down
    pub visitor_idle: Duration,
    /// Maximum number of visitor page states kept in memory
    pub max_visitors: u64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            toast_duration: TOAST_DURATION,
            visitor_idle: Duration::from_secs(30 * 60),
            max_visitors: 10_000,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
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

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "PASEKA_HOST", defaults.host)?;
        let port = parse_or(&lookup, "PASEKA_PORT", defaults.port)?;

        let base_url = lookup("PASEKA_BASE_URL").unwrap_or(defaults.base_url);
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("PASEKA_BASE_URL".to_string(), e.to_string())
        })?;

        let toast_seconds: u64 = parse_or(
            &lookup,
            "PASEKA_TOAST_SECONDS",
            defaults.toast_duration.as_secs(),
        )?;
        if toast_seconds == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PASEKA_TOAST_SECONDS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let idle_minutes: u64 = parse_or(
            &lookup,
            "PASEKA_VISITOR_IDLE_MINUTES",
            defaults.visitor_idle.as_secs() / 60,
        )?;
        let max_visitors = parse_or(&lookup, "PASEKA_MAX_VISITORS", defaults.max_visitors)?;

        Ok(Self {
            host,
            port,
            base_url,
            toast_duration: Duration::from_secs(toast_seconds),
            visitor_idle: Duration::from_secs(idle_minutes.saturating_mul(60)),
            max_visitors,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_or(
                &lookup,
                "SENTRY_SAMPLE_RATE",
                defaults.sentry_sample_rate,
            )?,
            sentry_traces_sample_rate: parse_or(
                &lookup,
                "SENTRY_TRACES_SAMPLE_RATE",
                defaults.sentry_traces_sample_rate,
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should be marked `Secure`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise fall back to `default`.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.toast_duration, Duration::from_secs(4));
        assert_eq!(config.visitor_idle, Duration::from_secs(1800));
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("PASEKA_HOST", "0.0.0.0"),
            ("PASEKA_PORT", "8080"),
            ("PASEKA_BASE_URL", "https://paseka.ru"),
            ("PASEKA_TOAST_SECONDS", "6"),
            ("PASEKA_VISITOR_IDLE_MINUTES", "5"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.toast_duration, Duration::from_secs(6));
        assert_eq!(config.visitor_idle, Duration::from_secs(300));
        assert!(config.is_secure());
    }

    #[test]
    fn test_invalid_port() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("PASEKA_PORT", "honey")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "PASEKA_PORT"));
    }

    #[test]
    fn test_zero_toast_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("PASEKA_TOAST_SECONDS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "PASEKA_TOAST_SECONDS"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(
            StorefrontConfig::from_lookup(lookup_from(&[("PASEKA_BASE_URL", "not a url")]))
                .is_err()
        );
    }

    #[test]
    fn test_empty_sentry_dsn_is_none() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
