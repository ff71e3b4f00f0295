//! Error types for the Roster CLI
//!
//! Every variant carries a user-facing message with a hint on how to fix it.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// API server answered with a failure status
    #[error("Server error: {0}. Ensure the Roster server is running (check with 'roster health') and accessible.")]
    Api(String),

    /// The attendee feed could not be fetched
    #[error("Could not load attendee data: {0}")]
    Fetch(String),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your connection and the --server-url value.")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),

    /// JSON encoding failed
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Shared error from the common crate
    #[error(transparent)]
    Roster(#[from] roster_common::RosterError),
}

impl CliError {
    /// Create an API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
