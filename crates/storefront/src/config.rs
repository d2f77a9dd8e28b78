//! Storefront configuration loaded from environment variables.
//!
//! The variable names match the ones the web front-end reads at build time,
//! so a single `.env` file configures both.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NEXT_PUBLIC_API_URL` - Backend base URL (default: http://localhost:8000)
//! - `NEXT_PUBLIC_ENVIRONMENT` - `development`, `staging` or `production` (default: development)
//! - `NEXT_PUBLIC_SITE_URL` - Public URL of the site (default: http://localhost:3000)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `MOCK_LATENCY_MS` - Artificial delay of the mock services (default: 500)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment (default: `NEXT_PUBLIC_ENVIRONMENT`)
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.1)

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Deployment environment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "staging" | "preview" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Backend API base URL
    pub api_url: Url,
    /// Deployment environment
    pub environment: Environment,
    /// Public URL of the site
    pub site_url: Url,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Delay applied by the mock data services
    pub mock_latency: Duration,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
///
/// Implements `Debug` manually to redact the DSN.
#[derive(Clone)]
pub struct SentryConfig {
    pub dsn: Option<SecretString>,
    pub environment: String,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl fmt::Debug for SentryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentryConfig")
            .field("dsn", &self.dsn.as_ref().map(|_| "[REDACTED]"))
            .field("environment", &self.environment)
            .field("sample_rate", &self.sample_rate)
            .field("traces_sample_rate", &self.traces_sample_rate)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Vars(lookup);

        let api_url = env.parse_url("NEXT_PUBLIC_API_URL", "http://localhost:8000")?;
        let environment = env.parse_or("NEXT_PUBLIC_ENVIRONMENT", Environment::Development)?;
        let site_url = env.parse_url("NEXT_PUBLIC_SITE_URL", "http://localhost:3000")?;
        let host = env.parse_or("STOREFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = env.parse_or("STOREFRONT_PORT", 3000_u16)?;
        let mock_latency = Duration::from_millis(env.parse_or("MOCK_LATENCY_MS", 500_u64)?);

        let sentry = SentryConfig {
            dsn: env.optional("SENTRY_DSN").map(SecretString::from),
            environment: env
                .optional("SENTRY_ENVIRONMENT")
                .unwrap_or_else(|| environment.to_string()),
            sample_rate: env.parse_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            traces_sample_rate: env.parse_rate("SENTRY_TRACES_SAMPLE_RATE", 0.1)?,
        };

        Ok(Self {
            api_url,
            environment,
            site_url,
            host,
            port,
            mock_latency,
            sentry,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.site_url.scheme() == "https"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional, non-blank variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }

    fn parse_url(&self, key: &str, default: &str) -> Result<Url, ConfigError> {
        let raw = self.optional(key).unwrap_or_else(|| default.to_string());
        let url = Url::parse(raw.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(url)
    }

    fn parse_rate(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        let rate = self.parse_or(key, default)?;
        if (0.0..=1.0).contains(&rate) {
            Ok(rate)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("must be between 0.0 and 1.0 (got {rate})"),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.site_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.mock_latency, Duration::from_millis(500));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(config.sentry.dsn.is_none());
        assert_eq!(config.sentry.environment, "development");
        assert!(!config.is_secure());
    }

    #[test]
    fn test_public_variables() {
        let config = load(&[
            ("NEXT_PUBLIC_API_URL", "https://api.fullcolombiano.co"),
            ("NEXT_PUBLIC_ENVIRONMENT", "production"),
            ("NEXT_PUBLIC_SITE_URL", "https://fullcolombiano.co"),
            ("MOCK_LATENCY_MS", "0"),
            ("STOREFRONT_PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.api_url.host_str(), Some("api.fullcolombiano.co"));
        assert_eq!(config.environment, Environment::Production);
        assert!(config.is_secure());
        assert_eq!(config.mock_latency, Duration::ZERO);
        assert_eq!(config.port, 8080);
        assert_eq!(config.sentry.environment, "production");
    }

    #[test]
    fn test_invalid_values_are_reported_with_their_key() {
        let err = load(&[("NEXT_PUBLIC_API_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "NEXT_PUBLIC_API_URL"));

        let err = load(&[("NEXT_PUBLIC_SITE_URL", "ftp://fullcolombiano.co")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "NEXT_PUBLIC_SITE_URL"));

        let err = load(&[("NEXT_PUBLIC_ENVIRONMENT", "qa")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "NEXT_PUBLIC_ENVIRONMENT"));

        let err = load(&[("STOREFRONT_PORT", "99999")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "STOREFRONT_PORT"));

        let err = load(&[("SENTRY_SAMPLE_RATE", "1.5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "SENTRY_SAMPLE_RATE"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("STOREFRONT_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry.dsn.is_none());
    }

    #[test]
    fn test_sentry_config_debug_redacts_dsn() {
        let config = load(&[("SENTRY_DSN", "https://super_secret_key@o1.ingest.sentry.io/2")])
            .unwrap();
        assert_eq!(
            config.sentry.dsn.as_ref().unwrap().expose_secret(),
            "https://super_secret_key@o1.ingest.sentry.io/2"
        );

        let debug_output = format!("{:?}", config.sentry);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_key"));
    }
}
