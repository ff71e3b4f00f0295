//! Roster Server - Main entry point

use anyhow::Result;
use roster_common::logging::{init_logging, LogConfig};
use roster_server::{api, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("roster-server")
        .filter_directives("roster_server=debug,tower_http=debug,axum=trace")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting Roster Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
