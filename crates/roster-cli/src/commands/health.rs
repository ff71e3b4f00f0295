//! `roster health` command implementation

use crate::api::ApiClient;
use crate::error::{CliError, Result};
use colored::Colorize;

/// Check the server and report its snapshot size
pub async fn run(server_url: String) -> Result<()> {
    let client = ApiClient::new(server_url)?;
    let health = client.health().await?;

    if !health.is_healthy() {
        return Err(CliError::api(format!(
            "server at {} reported status '{}'",
            client.base_url(),
            health.status
        )));
    }

    println!(
        "{} {} ({} records)",
        "Healthy:".green().bold(),
        client.base_url(),
        health.records
    );

    Ok(())
}
