//! Encrypted attendee feed
//!
//! The snapshot is generated once and never mutated, so every request
//! encrypts the same `Arc<[Attendee]>` without any locking.

pub mod routes;

pub use routes::attendees_routes;

use roster_common::crypto::SharedSecret;
use roster_common::types::Attendee;
use std::sync::Arc;
use std::time::Duration;

/// State shared by the feed handlers
#[derive(Clone, Debug)]
pub struct FeedState {
    /// Read-only snapshot served to every consumer
    pub snapshot: Arc<[Attendee]>,
    pub secret: SharedSecret,
    /// Artificial latency applied before each response
    pub response_delay: Duration,
}

impl FeedState {
    pub fn new(snapshot: Vec<Attendee>, secret: SharedSecret, response_delay: Duration) -> Self {
        Self {
            snapshot: snapshot.into(),
            secret,
            response_delay,
        }
    }

    pub fn record_count(&self) -> usize {
        self.snapshot.len()
    }
}
