//! Response types for the Roster server API
//!
//! The attendee feed itself answers with [`roster_common::types::Envelope`].

use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Size of the server's snapshot
    #[serde(default)]
    pub records: usize,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error body returned by the server on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}
