//! Feature modules implementing the Roster API
//!
//! # Features
//!
//! - **attendees**: The encrypted, read-only attendee feed
//!
//! Each feature owns its routes and handlers and is mounted under `/api`.

pub mod attendees;

use axum::Router;

pub use attendees::FeedState;

/// Creates the API router with all feature routes mounted
///
/// - `/attendees` - Encrypted attendee snapshot
pub fn router(feed: FeedState) -> Router<()> {
    Router::new().nest("/attendees", attendees::attendees_routes().with_state(feed))
}
