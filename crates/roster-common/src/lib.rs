//! Roster Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, crypto transport, and error handling for the Roster project.
//!
//! # Overview
//!
//! This crate provides functionality used by both the producer (`roster-server`)
//! and the consumer (`roster-cli`):
//!
//! - **Types**: The attendee record and the transport envelope
//! - **Crypto**: Passphrase-keyed AES-256-GCM encryption of an attendee collection
//! - **Error Handling**: Shared error and result types
//! - **Logging**: Tracing subscriber setup driven by environment variables
//!
//! # Example
//!
//! ```no_run
//! use roster_common::crypto::{self, SharedSecret};
//! use roster_common::types::Attendee;
//!
//! fn ship(attendees: &[Attendee]) -> roster_common::Result<()> {
//!     let secret = SharedSecret::from_env()?;
//!     let envelope = crypto::encrypt(attendees, &secret)?;
//!     let roundtrip = crypto::decrypt(&envelope.payload, &secret);
//!     assert_eq!(roundtrip.len(), attendees.len());
//!     Ok(())
//! }
//! ```

pub mod crypto;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
