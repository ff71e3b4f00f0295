//! Roster CLI Library
//!
//! Terminal dashboard for the encrypted attendee feed.
//!
//! # Overview
//!
//! Each invocation fetches the envelope once, decrypts it with the shared
//! passphrase, and renders a view computed locally:
//!
//! - **Listing**: Searchable, filterable, paginated attendee table (`roster list`)
//! - **Summary**: Stat cards, gender split, and registration timeline (`roster summary`)
//! - **Health**: Server reachability and snapshot size (`roster health`)

pub mod api;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use dashboard::Dashboard;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use config::DEFAULT_SERVER_URL;

/// Roster - encrypted attendee dashboard
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server URL
    #[arg(long, env = "ROSTER_SERVER_URL", default_value = DEFAULT_SERVER_URL, global = true)]
    pub server_url: String,

    /// Shared passphrase used to decrypt the feed
    #[arg(long, env = "ROSTER_SHARED_SECRET", hide_env_values = true, global = true)]
    pub secret: Option<String>,

    /// Print the full command reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List attendees with search, status filter, and pagination
    List {
        /// Case-insensitive match against name, email, or phone
        #[arg(short, long, default_value = "")]
        search: String,

        /// Payment status filter (all, paid, unpaid)
        #[arg(long, default_value = "all")]
        status: String,

        /// Page number (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format
        #[arg(short, long, default_value = "table", value_parser = ["table", "json", "compact"])]
        format: String,
    },

    /// Show registration totals, revenue, gender split, and timeline
    Summary {
        /// Output format
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// Check that the server is reachable
    Health,
}
