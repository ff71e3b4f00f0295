//! Aggregates over the full decrypted collection
//!
//! These always see every record; search and status filters only narrow
//! the table, never the headline numbers.

use chrono::NaiveDate;
use roster_common::types::{Attendee, Gender, PaymentStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Headline counts and revenue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    /// Sum of paid amounts in BHD
    pub total_revenue: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderDistribution {
    pub male_count: usize,
    pub female_count: usize,
    pub male_pct: f64,
    pub female_pct: f64,
}

impl GenderDistribution {
    /// Chart labels, e.g. `Male (54.3%)`
    pub fn labels(&self) -> [String; 2] {
        [
            format!("{} ({:.1}%)", Gender::Male, self.male_pct),
            format!("{} ({:.1}%)", Gender::Female, self.female_pct),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Everything the summary view renders
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: Stats,
    pub gender: GenderDistribution,
    pub timeline: Vec<TimeSeriesPoint>,
}

pub fn stats(collection: &[Attendee]) -> Stats {
    let (paid_count, total_revenue) = collection
        .iter()
        .filter(|a| a.payment_status == PaymentStatus::Paid)
        .fold((0usize, 0u64), |(count, revenue), a| {
            (count + 1, revenue + u64::from(a.amount))
        });

    Stats {
        total: collection.len(),
        paid_count,
        unpaid_count: collection.len() - paid_count,
        total_revenue,
    }
}

/// Share of `count` in `total`, rounded to one decimal place
fn percentage(count: usize, total: usize) -> f64 {
    let denominator = total.max(1) as f64;
    (count as f64 * 1000.0 / denominator).round() / 10.0
}

pub fn gender_distribution(collection: &[Attendee]) -> GenderDistribution {
    let male_count = collection
        .iter()
        .filter(|a| a.gender == Gender::Male)
        .count();
    let female_count = collection.len() - male_count;

    GenderDistribution {
        male_count,
        female_count,
        male_pct: percentage(male_count, collection.len()),
        female_pct: percentage(female_count, collection.len()),
    }
}

/// Registrations per calendar day, oldest first
pub fn registration_time_series(collection: &[Attendee]) -> Vec<TimeSeriesPoint> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for attendee in collection {
        *by_date.entry(attendee.registration_date).or_default() += 1;
    }

    by_date
        .into_iter()
        .map(|(date, count)| TimeSeriesPoint { date, count })
        .collect()
}

pub fn summarize(collection: &[Attendee]) -> DashboardSummary {
    DashboardSummary {
        stats: stats(collection),
        gender: gender_distribution(collection),
        timeline: registration_time_series(collection),
    }
}
