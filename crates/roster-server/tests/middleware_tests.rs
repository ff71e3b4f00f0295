//! Integration tests for middleware
//!
//! These tests verify:
//! - CORS headers are correctly set for configured origins
//! - Preflight requests are answered for the read-only methods
//! - Compression is negotiated from `Accept-Encoding`

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;

use roster_server::{config::CorsConfig, middleware};

/// Test helper to create a router with CORS middleware
fn create_test_app_with_cors(cors_config: CorsConfig) -> Router {
    async fn health() -> impl IntoResponse {
        Json(json!({ "status": "ok" }))
    }

    Router::new()
        .route("/health", get(health))
        .layer(middleware::cors_layer(&cors_config))
}

#[tokio::test]
async fn test_cors_headers_with_specific_origin() {
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        allow_credentials: true,
    };

    let response = create_test_app_with_cors(cors_config)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_rejects_unlisted_origin() {
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        allow_credentials: false,
    };

    let response = create_test_app_with_cors(cors_config)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_wildcard_allows_any_origin() {
    let cors_config = CorsConfig {
        allowed_origins: vec!["*".to_string()],
        allow_credentials: false,
    };

    let response = create_test_app_with_cors(cors_config)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://anywhere.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_allows_get() {
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        allow_credentials: false,
    };

    let response = create_test_app_with_cors(cors_config)
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"));
    assert!(!methods.contains("POST"));
}

#[tokio::test]
async fn test_compression_applied_when_requested() {
    async fn large() -> impl IntoResponse {
        Json(json!({ "payload": "A".repeat(4096) }))
    }

    let app = Router::new()
        .route("/large", get(large))
        .layer(CompressionLayer::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/large")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).unwrap(),
        "gzip"
    );
}
