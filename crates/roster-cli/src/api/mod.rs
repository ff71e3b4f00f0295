//! API client module
//!
//! HTTP client for the Roster server.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::*;
