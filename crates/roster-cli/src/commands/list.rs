//! `roster list` command implementation
//!
//! Searchable, filterable, paginated attendee listing.

use crate::commands::load_dashboard;
use crate::config::Config;
use crate::dashboard::{Dashboard, Page, StatusFilter};
use crate::error::Result;
use crate::progress::format_bhd;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use roster_common::types::{Attendee, PaymentStatus};
use serde::Serialize;
use tracing::debug;

const EMPTY_MESSAGE: &str = "No attendees found matching your search.";

/// Run the list command
///
/// # Arguments
///
/// * `config` - Server URL and shared secret
/// * `search` - Search term (empty matches everything)
/// * `status` - Status filter (all, paid, unpaid)
/// * `page` - Requested page, clamped to the available pages
/// * `format` - Output format (table, json, compact)
pub async fn run(
    config: &Config,
    search: String,
    status: String,
    page: usize,
    format: String,
) -> Result<()> {
    let status: StatusFilter = status.parse()?;

    debug!(search = %search, status = %status, page, format = %format, "Listing attendees");

    let mut dashboard = load_dashboard(config).await?;
    dashboard.set_search(search);
    dashboard.set_status_filter(status);
    dashboard.set_page(page);

    render(&dashboard, &format)
}

/// Render the current page in the given format
pub fn render(dashboard: &Dashboard, format: &str) -> Result<()> {
    let page = dashboard.current_page();

    match format {
        "json" => display_json(&page),
        "compact" => {
            display_compact(&page);
            Ok(())
        },
        _ => {
            display_table(dashboard, &page);
            Ok(())
        },
    }
}

/// JSON shape of one listing page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a> {
    page: usize,
    total_pages: usize,
    range_start: usize,
    range_end: usize,
    total: usize,
    attendees: &'a [&'a Attendee],
}

fn display_json(page: &Page<&Attendee>) -> Result<()> {
    let output = ListOutput {
        page: page.page,
        total_pages: page.total_pages,
        range_start: page.range_start,
        range_end: page.range_end,
        total: page.total,
        attendees: &page.items,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// One attendee per line
fn display_compact(page: &Page<&Attendee>) {
    if page.items.is_empty() {
        println!("{}", EMPTY_MESSAGE);
        return;
    }

    for a in &page.items {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            a.id,
            a.name,
            a.email,
            a.phone,
            a.payment_status,
            a.registration_status()
        );
    }
}

fn status_cell(status: PaymentStatus) -> Cell {
    let color = match status {
        PaymentStatus::Paid => Color::Green,
        PaymentStatus::Unpaid => Color::Red,
    };
    Cell::new(status).fg(color)
}

fn display_table(dashboard: &Dashboard, page: &Page<&Attendee>) {
    if page.items.is_empty() {
        println!("{}", EMPTY_MESSAGE.bold());
        println!();
        println!("{}", dashboard.showing_label());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            "Attendee Name",
            "Contact Info",
            "Registration Date",
            "Payment Source",
            "Amount",
            "Attended Event",
            "Payment Status",
        ]);

    for a in &page.items {
        table.add_row(vec![
            Cell::new(format!(
                "[{}] {} ({})\n{}",
                a.initials(),
                a.name,
                a.gender,
                a.ticket_type
            )),
            Cell::new(format!("{}\n{}", a.phone, a.email)),
            Cell::new(a.registration_date),
            Cell::new(a.source),
            Cell::new(format_bhd(u64::from(a.amount))),
            Cell::new(if a.attended { "Yes" } else { "No" }),
            status_cell(a.payment_status),
        ]);
    }

    println!();
    println!("{}", table);
    println!();
    println!(
        "{}  (page {}/{})",
        dashboard.showing_label(),
        page.page,
        page.total_pages
    );

    let mut hints = Vec::new();
    if page.has_prev() {
        hints.push(format!("--page {} for previous", page.page - 1));
    }
    if page.has_next() {
        hints.push(format!("--page {} for next", page.page + 1));
    }
    if !hints.is_empty() {
        println!("{}", hints.join(", ").dimmed());
    }
}
