//! API endpoint URL builders

/// Build the encrypted attendee feed URL
pub fn attendees_url(base_url: &str) -> String {
    format!("{}/api/attendees", base_url.trim_end_matches('/'))
}

/// Build health check URL
pub fn health_url(base_url: &str) -> String {
    format!("{}/health", base_url.trim_end_matches('/'))
}
