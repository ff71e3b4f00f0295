//! Configuration management

use roster_common::crypto::SharedSecret;
use std::time::Duration;

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default number of synthetic attendees in the snapshot.
pub const DEFAULT_RECORD_COUNT: u32 = 35;

/// Default artificial latency before answering the feed, in milliseconds.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 500;

/// Upper bound on the snapshot size.
pub const MAX_RECORD_COUNT: u32 = 10_000;

/// Default CORS allowed origin for local development.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub feed: FeedConfig,
    pub cors: CorsConfig,
    /// Passphrase shared with every consumer
    pub secret: SharedSecret,
}

/// Server-specific configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// Attendee feed configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub record_count: u32,
    pub response_delay_ms: u64,
}

impl FeedConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
            allow_credentials: false,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from `.env`, the environment, and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Build configuration from the current process environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config {
            server: ServerConfig {
                host: std::env::var("ROSTER_HOST")
                    .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: env_or("ROSTER_PORT", DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: env_or(
                    "ROSTER_SHUTDOWN_TIMEOUT",
                    DEFAULT_SHUTDOWN_TIMEOUT_SECS,
                ),
            },
            feed: FeedConfig {
                record_count: env_or("ROSTER_RECORD_COUNT", DEFAULT_RECORD_COUNT),
                response_delay_ms: env_or("ROSTER_RESPONSE_DELAY_MS", DEFAULT_RESPONSE_DELAY_MS),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: env_or("CORS_ALLOW_CREDENTIALS", false),
            },
            secret: SharedSecret::from_env()?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Configuration with defaults everywhere except the passphrase
    pub fn with_secret(secret: SharedSecret) -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            feed: FeedConfig::default(),
            cors: CorsConfig::default(),
            secret,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.feed.record_count > MAX_RECORD_COUNT {
            anyhow::bail!(
                "ROSTER_RECORD_COUNT ({}) cannot exceed {}",
                self.feed.record_count,
                MAX_RECORD_COUNT
            );
        }

        if self.cors.allow_credentials && self.cors.allowed_origins.iter().any(|o| o == "*") {
            anyhow::bail!("CORS credentials cannot be combined with a wildcard origin");
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn secret() -> SharedSecret {
        SharedSecret::new("test-passphrase").unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::with_secret(secret());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.feed.record_count, 35);
        assert_eq!(config.feed.response_delay(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::with_secret(secret());
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_snapshot() {
        let mut config = Config::with_secret(secret());
        config.feed.record_count = MAX_RECORD_COUNT + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wildcard_with_credentials() {
        let mut config = Config::with_secret(secret());
        config.cors = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: true,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("ROSTER_SHARED_SECRET", "from-env");
        std::env::set_var("ROSTER_PORT", "5055");
        std::env::set_var("ROSTER_RESPONSE_DELAY_MS", "0");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.port, 5055);
        assert_eq!(config.feed.response_delay_ms, 0);
        assert_eq!(config.cors.allowed_origins, vec!["http://a.test", "http://b.test"]);

        std::env::remove_var("ROSTER_SHARED_SECRET");
        std::env::remove_var("ROSTER_PORT");
        std::env::remove_var("ROSTER_RESPONSE_DELAY_MS");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_secret() {
        std::env::remove_var("ROSTER_SHARED_SECRET");
        assert!(Config::from_env().is_err());
    }
}
