//! Build automation tasks for Roster
//!
//! This tool provides automation tasks for the Roster workspace:
//! - Generating the CLI reference from the clap definitions

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for Roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate CLI documentation in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    // Generate markdown from clap definitions
    let markdown = clap_markdown::help_markdown::<roster_cli::Cli>();

    let content = format!(
        r#"# Roster CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

## Overview

`roster` fetches the encrypted attendee feed from a Roster server, decrypts it
with the shared passphrase, and renders the dashboard in the terminal. Search,
filtering, pagination, and aggregation all run locally.

## Quick Start

```bash
# Start the server (same passphrase on both sides)
export ROSTER_SHARED_SECRET='change-me'
cargo run -p roster-server

# List the first page of attendees
roster list

# Search by name, email, or phone
roster list --search ahmed

# Only unpaid registrations, second page
roster list --status unpaid --page 2

# Headline numbers, gender split, and timeline
roster summary

# Machine-readable output
roster summary --format json
```

## Commands

{}

## Environment Variables

- `ROSTER_SERVER_URL` - Server URL (default: `http://localhost:5000`)
- `ROSTER_SHARED_SECRET` - Passphrase shared with the server (required)
- `ROSTER_API_TIMEOUT_SECS` - Request timeout in seconds (default: `30`)
- `LOG_LEVEL`, `LOG_FORMAT`, `LOG_OUTPUT`, `LOG_DIR`, `LOG_FILTER` - Logging

## Decryption Failures

If the passphrase does not match the server's, `roster` prints a warning on
stderr and renders zero records instead of failing. Transport failures exit
with status 1.

---

*This documentation is automatically generated from the CLI source code. To update, run `cargo run -p xtask -- generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    // Create output directory if it doesn't exist
    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
