//! `roster summary` command implementation
//!
//! Shows the stat cards, gender distribution, and registration timeline.
//! Aggregates always cover the whole collection.

use crate::commands::load_dashboard;
use crate::config::Config;
use crate::dashboard::DashboardSummary;
use crate::error::Result;
use crate::progress::format_bhd;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

/// Widest bar drawn in the charts
const BAR_WIDTH: usize = 30;

/// Run the summary command
pub async fn run(config: &Config, format: String) -> Result<()> {
    let dashboard = load_dashboard(config).await?;
    let summary = dashboard.summary();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        },
        _ => display_table(&summary),
    }

    Ok(())
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "█".repeat((count * BAR_WIDTH).div_ceil(max))
}

fn display_table(summary: &DashboardSummary) {
    let stats = &summary.stats;

    let mut cards = Table::new();
    cards
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Metric", "Value"])
        .add_row(vec!["Total Registrations".to_string(), stats.total.to_string()])
        .add_row(vec!["Confirmed (Paid)".to_string(), stats.paid_count.to_string()])
        .add_row(vec!["Pending Payment".to_string(), stats.unpaid_count.to_string()])
        .add_row(vec!["Total Revenue".to_string(), format_bhd(stats.total_revenue)]);

    println!("{}", "Dashboard Summary".cyan().bold());
    println!("{}", cards);
    println!();

    println!("{}", "Gender Distribution".cyan().bold());
    let gender = &summary.gender;
    let max = gender.male_count.max(gender.female_count);
    let [male_label, female_label] = gender.labels();
    println!(
        "  {:<16} {:>4}  {}",
        male_label,
        gender.male_count,
        bar(gender.male_count, max).blue()
    );
    println!(
        "  {:<16} {:>4}  {}",
        female_label,
        gender.female_count,
        bar(gender.female_count, max).magenta()
    );
    println!();

    println!("{}", "Registration Timeline".cyan().bold());
    if summary.timeline.is_empty() {
        println!("  No registrations yet.");
        return;
    }

    let max = summary
        .timeline
        .iter()
        .map(|p| p.count)
        .max()
        .unwrap_or(0);
    for point in &summary.timeline {
        println!(
            "  {}  {:>4}  {}",
            point.date,
            point.count,
            bar(point.count, max).green()
        );
    }
}
