//! Common types used across Roster
//!
//! The attendee record is the unit that flows through the whole pipeline:
//! generated by the server, serialized and encrypted into an [`Envelope`],
//! then decrypted and queried by the CLI. Field names on the wire are
//! camelCase so the JSON matches what dashboard frontends already consume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Attendee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket tier purchased at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    #[serde(rename = "General Admission")]
    GeneralAdmission,
    #[serde(rename = "VIP Access")]
    VipAccess,
    #[serde(rename = "Early Bird")]
    EarlyBird,
    Student,
}

impl TicketType {
    /// All ticket tiers, in display order
    pub const ALL: [TicketType; 4] = [
        TicketType::GeneralAdmission,
        TicketType::VipAccess,
        TicketType::EarlyBird,
        TicketType::Student,
    ];

    /// List price in BHD
    pub fn price(self) -> u32 {
        match self {
            TicketType::VipAccess => 50,
            TicketType::Student => 10,
            TicketType::GeneralAdmission | TicketType::EarlyBird => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::GeneralAdmission => "General Admission",
            TicketType::VipAccess => "VIP Access",
            TicketType::EarlyBird => "Early Bird",
            TicketType::Student => "Student",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel the registration was paid through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentSource {
    BenefitPay,
    CrediMax,
    Manual,
    Cash,
}

impl PaymentSource {
    pub const ALL: [PaymentSource; 4] = [
        PaymentSource::BenefitPay,
        PaymentSource::CrediMax,
        PaymentSource::Manual,
        PaymentSource::Cash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentSource::BenefitPay => "BenefitPay",
            PaymentSource::CrediMax => "CrediMax",
            PaymentSource::Manual => "Manual",
            PaymentSource::Cash => "Cash",
        }
    }
}

impl std::fmt::Display for PaymentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment state of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = RosterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            _ => Err(RosterError::Config(format!("Invalid payment status: {}", s))),
        }
    }
}

/// Registration lifecycle derived from the payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Confirmed,
    Pending,
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationStatus::Confirmed => write!(f, "Confirmed"),
            RegistrationStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// One event participant's contact, payment, and attendance data.
///
/// Records are immutable once produced. Two cross-field invariants hold for
/// every valid record:
///
/// - `amount == 0` whenever `payment_status` is [`PaymentStatus::Unpaid`]
/// - `attended` implies `payment_status` is [`PaymentStatus::Paid`]
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use roster_common::types::*;
///
/// let attendee = Attendee {
///     id: 1,
///     name: "Ahmed Al-Khalifa".to_string(),
///     gender: Gender::Male,
///     email: "ahmed.al-khalifa1@gmail.com".to_string(),
///     phone: "+973 3912345".to_string(),
///     ticket_type: TicketType::VipAccess,
///     registration_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     source: PaymentSource::BenefitPay,
///     amount: 50,
///     payment_status: PaymentStatus::Paid,
///     attended: true,
/// };
///
/// assert!(attendee.validate().is_ok());
/// assert_eq!(attendee.initials(), "AA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Unique within a collection
    pub id: u32,

    /// Full display name
    pub name: String,

    pub gender: Gender,

    pub email: String,

    pub phone: String,

    pub ticket_type: TicketType,

    /// Calendar date of registration, serialized as `YYYY-MM-DD`
    pub registration_date: NaiveDate,

    pub source: PaymentSource,

    /// Amount paid in BHD; zero for unpaid registrations
    pub amount: u32,

    pub payment_status: PaymentStatus,

    pub attended: bool,
}

impl Attendee {
    /// Check the record's field and cross-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::invalid_record(self.id, "name is empty"));
        }
        if self.email.trim().is_empty() {
            return Err(RosterError::invalid_record(self.id, "email is empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(RosterError::invalid_record(self.id, "phone is empty"));
        }
        if self.payment_status == PaymentStatus::Unpaid && self.amount != 0 {
            return Err(RosterError::invalid_record(
                self.id,
                format!("unpaid registration carries amount {}", self.amount),
            ));
        }
        if self.attended && self.payment_status != PaymentStatus::Paid {
            return Err(RosterError::invalid_record(
                self.id,
                "unpaid attendee is marked as attended",
            ));
        }
        Ok(())
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    pub fn registration_status(&self) -> RegistrationStatus {
        match self.payment_status {
            PaymentStatus::Paid => RegistrationStatus::Confirmed,
            PaymentStatus::Unpaid => RegistrationStatus::Pending,
        }
    }

    /// First letter of each word of the name, e.g. "Noor Kanoo" -> "NK"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Validate every record of a collection
pub fn validate_collection(attendees: &[Attendee]) -> Result<()> {
    attendees.iter().try_for_each(Attendee::validate)
}

/// Transport wrapper carrying the encrypted attendee collection.
///
/// Serializes as `{"payload": "<base64 ciphertext>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub payload: String,
}

impl Envelope {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}
