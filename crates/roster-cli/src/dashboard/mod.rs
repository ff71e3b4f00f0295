//! Client-side dashboard engine
//!
//! The consumer decrypts the whole collection once and derives every view
//! locally:
//!
//! - [`query`]: case-insensitive search and payment-status filtering
//! - [`stats`]: headline counts, gender split, and the registration timeline
//! - [`pagination`]: fixed-size pages with clamped navigation
//!
//! [`Dashboard`] ties them together as the view state a command renders.
//! Views are recomputed in full on every call.

pub mod pagination;
pub mod query;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use pagination::{paginate, Page, PAGE_SIZE};
pub use query::{AttendeeQuery, StatusFilter};
pub use stats::{DashboardSummary, GenderDistribution, Stats, TimeSeriesPoint};

use roster_common::crypto::{DecryptOutcome, DecryptStatus};
use roster_common::types::Attendee;
use std::fmt;

/// Where the dashboard is in its fetch/decrypt lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The server could not be reached or answered with an error
    FetchFailed(String),
    /// The payload arrived but could not be decrypted; the collection is empty
    DecryptFailed(String),
}

/// View state over one decrypted snapshot
#[derive(Debug, Clone)]
pub struct Dashboard {
    attendees: Vec<Attendee>,
    query: AttendeeQuery,
    page: usize,
    page_size: usize,
    state: LoadState,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            attendees: Vec::new(),
            query: AttendeeQuery::default(),
            page: 1,
            page_size: page_size.max(1),
            state: LoadState::Loading,
        }
    }

    /// Replace the collection with a decrypt result
    pub fn load(&mut self, outcome: DecryptOutcome) {
        self.state = match outcome.status {
            DecryptStatus::Decrypted => LoadState::Ready,
            DecryptStatus::Failed(failure) => LoadState::DecryptFailed(failure.to_string()),
        };
        self.attendees = outcome.attendees;
        self.page = 1;
    }

    /// Record a transport failure
    pub fn fail(&mut self, err: impl fmt::Display) {
        self.attendees.clear();
        self.state = LoadState::FetchFailed(err.to_string());
        self.page = 1;
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn query(&self) -> &AttendeeQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.query.term {
            self.query.term = term;
            self.page = 1;
        }
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        if status != self.query.status {
            self.query.status = status;
            self.page = 1;
        }
    }

    /// Jump to `page`, clamped to the current result
    pub fn set_page(&mut self, page: usize) {
        let total_pages = pagination::total_pages(self.visible().len(), self.page_size);
        self.page = pagination::clamp_page(page, total_pages);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Records matching the current search and filter, in collection order
    pub fn visible(&self) -> Vec<&Attendee> {
        query::apply(&self.attendees, &self.query)
    }

    pub fn current_page(&self) -> Page<&Attendee> {
        paginate(&self.visible(), self.page_size, self.page)
    }

    /// Aggregates over the whole collection, ignoring search and filter
    pub fn summary(&self) -> DashboardSummary {
        stats::summarize(&self.attendees)
    }

    /// Footer text, e.g. `Showing 1 to 8 of 35 entries`
    pub fn showing_label(&self) -> String {
        let page = self.current_page();
        format!(
            "Showing {} to {} of {} entries",
            page.range_start, page.range_end, page.total
        )
    }
}
