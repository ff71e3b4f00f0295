//! Shared helpers for CLI end-to-end tests

#![allow(dead_code)]

use assert_cmd::Command;
use chrono::NaiveDate;
use roster_common::{
    crypto::{self, SharedSecret},
    types::{Attendee, Gender, PaymentSource, PaymentStatus, TicketType},
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const SECRET: &str = "e2e-shared-secret";

const NAMES: &[(&str, Gender)] = &[
    ("Ahmed Al-Khalifa", Gender::Male),
    ("Fatima Hasan", Gender::Female),
    ("Ali Kanoo", Gender::Male),
    ("Zainab Fakhro", Gender::Female),
    ("Yusuf Janahi", Gender::Male),
    ("Noor Al-Alawi", Gender::Female),
    ("Khalid Nasser", Gender::Male),
];

/// `len` attendees; every fifth one is unpaid
pub fn attendees(len: u32) -> Vec<Attendee> {
    (1..=len)
        .map(|id| {
            let (name, gender) = NAMES[(id as usize - 1) % NAMES.len()];
            let paid = id % 5 != 0;
            let ticket_type = TicketType::ALL[id as usize % TicketType::ALL.len()];

            Attendee {
                id,
                name: name.to_string(),
                gender,
                email: format!("{}{}@gmail.com", name.to_lowercase().replace(' ', "."), id),
                phone: format!("+973 3{:07}", 1_000_000 + id),
                ticket_type,
                registration_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
                    - chrono::Duration::days(i64::from(id % 6)),
                source: PaymentSource::ALL[id as usize % PaymentSource::ALL.len()],
                amount: if paid { ticket_type.price() } else { 0 },
                payment_status: if paid {
                    PaymentStatus::Paid
                } else {
                    PaymentStatus::Unpaid
                },
                attended: paid && id % 2 == 0,
            }
        })
        .collect()
}

/// Start a mock server whose feed is `records` encrypted under [`SECRET`]
pub async fn mock_feed(records: &[Attendee]) -> MockServer {
    let mock_server = MockServer::start().await;
    let secret = SharedSecret::new(SECRET).unwrap();
    let envelope = crypto::encrypt(records, &secret).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/attendees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&mock_server)
        .await;

    mock_server
}

/// `roster` with the server URL and secret set, logging left at defaults
pub fn roster(server_url: &str, secret: &str) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env_remove("ROSTER_SHARED_SECRET")
        .env_remove("ROSTER_SERVER_URL")
        .env_remove("LOG_LEVEL")
        .arg("--server-url")
        .arg(server_url)
        .arg("--secret")
        .arg(secret);
    cmd
}
