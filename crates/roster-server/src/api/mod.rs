use crate::config::Config;
use crate::error::AppError;
use crate::features::{self, FeedState};
use crate::generator;
use crate::middleware;
use axum::{extract::State, http::Uri, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::{net::SocketAddr, time::Duration};
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub feed: FeedState,
}

impl AppState {
    /// Builds state from configuration, generating a fresh snapshot
    pub fn from_config(config: &Config) -> Self {
        let snapshot = generator::generate_snapshot(config.feed.record_count);
        info!(records = snapshot.len(), "Attendee snapshot generated");

        Self {
            feed: FeedState::new(
                snapshot,
                config.secret.clone(),
                config.feed.response_delay(),
            ),
        }
    }
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config);
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let api = features::router(state.feed.clone());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
        .nest("/api", api)
        .fallback(not_found)
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::security_headers_layer())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Roster Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "records": state.feed.record_count()
    }))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
