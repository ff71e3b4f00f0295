//! Configuration for the Roster CLI
//!
//! Settings come from command-line flags, which clap falls back to the
//! environment for, and from an optional `.env` file.

use crate::error::{CliError, Result};
use roster_common::crypto::{SharedSecret, SHARED_SECRET_ENV};

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default server URL when not specified via flag or environment variable.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Default timeout for API requests in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API request timeout
pub const API_TIMEOUT_ENV: &str = "ROSTER_API_TIMEOUT_SECS";

/// Resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub secret: SharedSecret,
}

impl Config {
    /// Build from parsed flags; the secret is required
    pub fn new(server_url: impl Into<String>, secret: Option<&str>) -> Result<Self> {
        let secret = secret.ok_or_else(|| {
            CliError::config(format!(
                "No shared secret provided. Pass --secret or set {}",
                SHARED_SECRET_ENV
            ))
        })?;

        Ok(Self {
            server_url: server_url.into(),
            secret: SharedSecret::new(secret)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_secret() {
        let config = Config::new(DEFAULT_SERVER_URL, Some("passphrase")).unwrap();
        assert_eq!(config.server_url, "http://localhost:5000");
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let err = Config::new(DEFAULT_SERVER_URL, None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains(SHARED_SECRET_ENV));
    }

    #[test]
    fn test_blank_secret_is_rejected() {
        assert!(Config::new(DEFAULT_SERVER_URL, Some("   ")).is_err());
    }
}
