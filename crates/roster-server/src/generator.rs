//! Synthetic attendee generator
//!
//! Produces a plausible attendee list for a Bahraini tech event. The output
//! always satisfies the record invariants (unpaid means zero amount and not
//! attended) and is sorted by registration date, most recent first.

use chrono::{DateTime, Utc};
use rand::Rng;
use roster_common::types::{Attendee, Gender, PaymentSource, PaymentStatus, TicketType};

const MALE_NAMES: &[&str] = &[
    "Ahmed", "Mohammed", "Ali", "Yusuf", "Salman", "Hamad", "Abdulla", "Khalid", "Omar", "Ebrahim",
];

const FEMALE_NAMES: &[&str] = &[
    "Fatima", "Zainab", "Noor", "Mariam", "Aysha", "Layla", "Reem", "Sarah", "Dana", "Hessa",
];

const FAMILY_NAMES: &[&str] = &[
    "Al-Khalifa",
    "Al-Alawi",
    "Hasan",
    "Al-Zayani",
    "Al-Jalahma",
    "Nasser",
    "Fakhro",
    "Kanoo",
    "Janahi",
    "Al-Musallam",
];

/// Share of generated attendees that are male
const MALE_RATIO: f64 = 0.55;

/// Share of registrations that are paid
const PAID_RATIO: f64 = 0.8;

/// Share of paid attendees that showed up
const ATTENDANCE_RATIO: f64 = 0.7;

/// Registrations are spread over this many milliseconds before `now`
const REGISTRATION_WINDOW_MS: i64 = 10_000_000_000;

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Generate `count` attendees with ids `1..=count`, registered before `now`
pub fn generate<R: Rng + ?Sized>(count: u32, now: DateTime<Utc>, rng: &mut R) -> Vec<Attendee> {
    let mut attendees: Vec<Attendee> = (1..=count)
        .map(|id| {
            let gender = if rng.gen_bool(MALE_RATIO) {
                Gender::Male
            } else {
                Gender::Female
            };
            let first = match gender {
                Gender::Male => *pick(rng, MALE_NAMES),
                Gender::Female => *pick(rng, FEMALE_NAMES),
            };
            let last = *pick(rng, FAMILY_NAMES);

            // Bahraini mobile numbers: +973 3 followed by seven digits
            let phone = format!("+973 3{:07}", rng.gen_range(0..10_000_000u32));
            let email = format!("{}.{}{}@gmail.com", first.to_lowercase(), last.to_lowercase(), id);

            let ticket_type = *pick(rng, &TicketType::ALL);
            let paid = rng.gen_bool(PAID_RATIO);
            let attended = paid && rng.gen_bool(ATTENDANCE_RATIO);

            let offset = chrono::Duration::milliseconds(rng.gen_range(0..REGISTRATION_WINDOW_MS));

            Attendee {
                id,
                name: format!("{} {}", first, last),
                gender,
                email,
                phone,
                ticket_type,
                registration_date: (now - offset).date_naive(),
                source: *pick(rng, &PaymentSource::ALL),
                amount: if paid { ticket_type.price() } else { 0 },
                payment_status: if paid {
                    PaymentStatus::Paid
                } else {
                    PaymentStatus::Unpaid
                },
                attended,
            }
        })
        .collect();

    attendees.sort_by(|a, b| b.registration_date.cmp(&a.registration_date));
    attendees
}

/// Generate the process-wide snapshot from the thread-local RNG
pub fn generate_snapshot(count: u32) -> Vec<Attendee> {
    generate(count, Utc::now(), &mut rand::thread_rng())
}
