//! Deterministic attendee fixtures shared by the dashboard tests

use chrono::NaiveDate;
use roster_common::types::{Attendee, Gender, PaymentSource, PaymentStatus, TicketType};

const NAMES: &[(&str, Gender)] = &[
    ("Ahmed Al-Khalifa", Gender::Male),
    ("Fatima Hasan", Gender::Female),
    ("Ali Kanoo", Gender::Male),
    ("Zainab Fakhro", Gender::Female),
    ("Yusuf Janahi", Gender::Male),
    ("Noor Al-Alawi", Gender::Female),
    ("Khalid Nasser", Gender::Male),
];

pub(crate) fn attendee(id: u32, name: &str, status: PaymentStatus) -> Attendee {
    let paid = status == PaymentStatus::Paid;
    let email = format!("{}{}@gmail.com", name.to_lowercase().replace(' ', "."), id);

    Attendee {
        id,
        name: name.to_string(),
        gender: Gender::Female,
        email,
        phone: format!("+973 3{:07}", id * 7919),
        ticket_type: TicketType::EarlyBird,
        registration_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        source: PaymentSource::BenefitPay,
        amount: if paid { TicketType::EarlyBird.price() } else { 0 },
        payment_status: status,
        attended: false,
    }
}

/// `len` records with ids `1..=len`; every fifth record is unpaid
pub(crate) fn collection(len: u32) -> Vec<Attendee> {
    (1..=len)
        .map(|id| {
            let (name, gender) = NAMES[(id as usize - 1) % NAMES.len()];
            let status = if id % 5 == 0 {
                PaymentStatus::Unpaid
            } else {
                PaymentStatus::Paid
            };
            let ticket_type = TicketType::ALL[id as usize % TicketType::ALL.len()];

            let mut record = attendee(id, name, status);
            record.gender = gender;
            record.ticket_type = ticket_type;
            record.amount = if status == PaymentStatus::Paid {
                ticket_type.price()
            } else {
                0
            };
            record.registration_date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
                - chrono::Duration::days(i64::from(id % 9));
            record.attended = status == PaymentStatus::Paid && id % 2 == 0;
            record
        })
        .collect()
}
