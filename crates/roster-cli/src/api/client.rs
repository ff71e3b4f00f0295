//! HTTP API client for the Roster server

use crate::api::{endpoints, types::*};
use crate::config::{API_TIMEOUT_ENV, DEFAULT_API_TIMEOUT_SECS};
use crate::error::{CliError, Result};
use reqwest::{Client, Response};
use roster_common::types::Envelope;
use std::time::Duration;

/// API client for the Roster server
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Result<Self> {
        let timeout_secs = std::env::var(API_TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch the health report
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = endpoints::health_url(&self.base_url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    /// Fetch the encrypted attendee envelope
    ///
    /// One request, no retry. The payload is returned still encrypted.
    pub async fn fetch_envelope(&self) -> Result<Envelope> {
        let url = endpoints::attendees_url(&self.base_url);
        tracing::debug!(url = %url, "Fetching attendee envelope");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    /// Turn a non-2xx response into [`CliError::Api`], preferring the server's message
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => format!("{} ({})", body.error.message, status),
            Err(_) => status.to_string(),
        };

        Err(CliError::api(message))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use roster_common::crypto::{self, SharedSecret};
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new("http://localhost:5000".to_string()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_fetch_envelope() {
        let mock_server = MockServer::start().await;
        let secret = SharedSecret::new("client-tests").unwrap();
        let envelope = crypto::encrypt(&[], &secret).unwrap();

        Mock::given(method("GET"))
            .and(path("/api/attendees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let fetched = client.fetch_envelope().await.unwrap();

        assert_eq!(fetched, envelope);
    }

    #[tokio::test]
    async fn test_fetch_envelope_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/attendees"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": { "message": "Failed to prepare attendee feed", "status": 500 }
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let err = client.fetch_envelope().await.unwrap_err();

        assert!(matches!(err, CliError::Api(_)));
        assert!(err.to_string().contains("Failed to prepare attendee feed"));
    }

    #[tokio::test]
    async fn test_fetch_envelope_unreachable_is_http_error() {
        let client = ApiClient::new("http://localhost:9".to_string()).unwrap();
        let err = client.fetch_envelope().await.unwrap_err();
        assert!(matches!(err, CliError::Http(_)));
    }

    #[tokio::test]
    async fn test_health_report() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "status": "healthy", "records": 35 })),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let health = client.health().await.unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.records, 35);
    }
}
