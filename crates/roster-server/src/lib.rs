//! Roster Server Library
//!
//! HTTP producer for the encrypted attendee feed.
//!
//! # Overview
//!
//! - **Snapshot**: A synthetic attendee collection is generated once at
//!   startup and shared read-only by every request
//! - **Transport**: `GET /api/attendees` answers with an envelope whose
//!   `payload` is the collection encrypted under the shared passphrase
//! - **Configuration**: Environment-based configuration (`ROSTER_*`, `.env`)
//! - **Middleware**: Request tracing, CORS, compression, and security headers
//!
//! There is no server-side querying: search, filtering, aggregation, and
//! pagination all happen in the client after decryption.
//!
//! # Example
//!
//! ```no_run
//! use roster_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod generator;
pub mod middleware;

// Re-export commonly used types
pub use error::{AppError, AppResult};
