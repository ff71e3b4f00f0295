//! Error types for Roster

use thiserror::Error;

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Decryption error: {0}")]
    Decryption(String),

    #[error("Invalid attendee record {id}: {reason}")]
    InvalidRecord { id: u32, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    pub fn invalid_record(id: u32, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id,
            reason: reason.into(),
        }
    }
}
