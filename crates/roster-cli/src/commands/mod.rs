//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod health;
pub mod list;
pub mod summary;

use crate::api::ApiClient;
use crate::config::Config;
use crate::dashboard::{Dashboard, LoadState};
use crate::error::{CliError, Result};
use crate::progress::create_spinner;
use colored::Colorize;
use roster_common::crypto::{self, SharedSecret};
use tracing::{error, info, warn};

/// Fetch and decrypt the snapshot into a fresh dashboard
///
/// Never fails: transport errors end up in [`LoadState::FetchFailed`] and
/// decrypt errors in [`LoadState::DecryptFailed`].
pub async fn fetch_dashboard(client: &ApiClient, secret: &SharedSecret) -> Dashboard {
    let mut dashboard = Dashboard::new();
    let spinner = create_spinner("Decrypting dashboard data...");

    match client.fetch_envelope().await {
        Ok(envelope) => {
            let outcome = crypto::decrypt_with_status(&envelope.payload, secret);
            info!(
                records = outcome.attendees.len(),
                decrypted = outcome.is_decrypted(),
                "Attendee feed loaded"
            );
            dashboard.load(outcome);
        },
        Err(e) => {
            error!(error = %e, server = client.base_url(), "Failed to fetch attendee feed");
            dashboard.fail(e);
        },
    }

    spinner.finish_and_clear();
    dashboard
}

/// Load the dashboard for a command
///
/// A transport failure aborts the command. A decrypt failure prints a
/// warning and continues with zero records.
pub async fn load_dashboard(config: &Config) -> Result<Dashboard> {
    let client = ApiClient::new(config.server_url.clone())?;
    let dashboard = fetch_dashboard(&client, &config.secret).await;

    match dashboard.state() {
        LoadState::FetchFailed(reason) => Err(CliError::fetch(reason.clone())),
        LoadState::DecryptFailed(reason) => {
            warn!(reason = %reason, "Rendering empty dashboard after decrypt failure");
            eprintln!(
                "{} dashboard data could not be decrypted ({}). Check that --secret matches the server. Showing 0 records.",
                "Warning:".yellow().bold(),
                reason
            );
            Ok(dashboard)
        },
        LoadState::Ready | LoadState::Loading => Ok(dashboard),
    }
}
