//! Roster CLI - Main entry point

use clap::{CommandFactory, Parser};
use roster_cli::{config::Config, Cli, Commands};
use roster_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    let Some(command) = cli.command.as_ref() else {
        let _ = Cli::command().print_help();
        process::exit(2);
    };

    // Verbose mode logs debug to the console; otherwise only warnings
    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("roster-cli")
        .filter_directives(if cli.verbose {
            "roster_cli=debug,roster_common=debug"
        } else {
            "roster_cli=warn,roster_common=warn"
        })
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging
    let _guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(&cli, command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, command: &Commands) -> roster_cli::Result<()> {
    match command {
        Commands::List {
            search,
            status,
            page,
            format,
        } => {
            let config = Config::new(cli.server_url.clone(), cli.secret.as_deref())?;
            roster_cli::commands::list::run(
                &config,
                search.clone(),
                status.clone(),
                *page,
                format.clone(),
            )
            .await
        },

        Commands::Summary { format } => {
            let config = Config::new(cli.server_url.clone(), cli.secret.as_deref())?;
            roster_cli::commands::summary::run(&config, format.clone()).await
        },

        Commands::Health => roster_cli::commands::health::run(cli.server_url.clone()).await,
    }
}
