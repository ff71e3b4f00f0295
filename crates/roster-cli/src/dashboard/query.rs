//! Search and status filtering over a decrypted collection
//!
//! All functions borrow the collection and return references in input
//! order; nothing here mutates or reorders records.

use roster_common::types::{Attendee, PaymentStatus};
use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Payment-status filter selected in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    pub fn matches(self, attendee: &Attendee) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => attendee.payment_status == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(PaymentStatus::Paid) => f.write_str("paid"),
            StatusFilter::Only(PaymentStatus::Unpaid) => f.write_str("unpaid"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<PaymentStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| {
                CliError::config(format!(
                    "Invalid status filter '{}': expected all, paid, or unpaid",
                    s
                ))
            })
    }
}

/// Combined search term and status filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendeeQuery {
    pub term: String,
    pub status: StatusFilter,
}

impl AttendeeQuery {
    pub fn new(term: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            term: term.into(),
            status,
        }
    }
}

/// Lowercased search needle; empty matches everything
struct Needle(String);

impl Needle {
    fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    fn matches(&self, attendee: &Attendee) -> bool {
        if self.0.is_empty() {
            return true;
        }
        [&attendee.name, &attendee.email, &attendee.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Records whose name, email, or phone contains `term`, ignoring case
pub fn search<'a>(collection: &'a [Attendee], term: &str) -> Vec<&'a Attendee> {
    let needle = Needle::new(term);
    collection.iter().filter(|a| needle.matches(a)).collect()
}

/// Records matching the payment-status filter
pub fn filter(collection: &[Attendee], status: StatusFilter) -> Vec<&Attendee> {
    collection.iter().filter(|a| status.matches(a)).collect()
}

/// Filter and search in one pass
pub fn apply<'a>(collection: &'a [Attendee], query: &AttendeeQuery) -> Vec<&'a Attendee> {
    let needle = Needle::new(&query.term);
    collection
        .iter()
        .filter(|a| query.status.matches(a) && needle.matches(a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::{attendee, collection};
    use proptest::prelude::*;

    fn ids(records: &[&Attendee]) -> Vec<u32> {
        records.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_search_name_ignores_case() {
        let records = vec![
            attendee(1, "Ahmed Al-Khalifa", PaymentStatus::Paid),
            attendee(2, "Fatima Hasan", PaymentStatus::Paid),
        ];

        assert_eq!(ids(&search(&records, "ahmed")), vec![1]);
        assert_eq!(ids(&search(&records, "AHMED")), vec![1]);
        assert_eq!(ids(&search(&records, "al-KHAL")), vec![1]);
    }

    #[test]
    fn test_search_phone_substring() {
        let mut records = vec![
            attendee(1, "Ahmed Al-Khalifa", PaymentStatus::Paid),
            attendee(2, "Fatima Hasan", PaymentStatus::Paid),
        ];
        records[0].phone = "+973 31234567".to_string();
        records[1].phone = "+973 39876543".to_string();

        assert_eq!(ids(&search(&records, "1234")), vec![1]);
        assert_eq!(ids(&search(&records, "+973")), vec![1, 2]);
    }

    #[test]
    fn test_search_email() {
        let records = collection(10);
        let target = records[4].email.clone();

        let found = search(&records, &target.to_uppercase());
        assert_eq!(ids(&found), vec![records[4].id]);
    }

    #[test]
    fn test_search_empty_term_is_identity() {
        let records = collection(12);
        assert_eq!(search(&records, "").len(), 12);
    }

    #[test]
    fn test_search_no_match() {
        let records = collection(12);
        assert!(search(&records, "zzz-nobody").is_empty());
    }

    #[test]
    fn test_filter_by_status() {
        let records = vec![
            attendee(1, "A One", PaymentStatus::Paid),
            attendee(2, "B Two", PaymentStatus::Unpaid),
            attendee(3, "C Three", PaymentStatus::Paid),
        ];

        assert_eq!(ids(&filter(&records, StatusFilter::All)), vec![1, 2, 3]);
        assert_eq!(
            ids(&filter(&records, StatusFilter::Only(PaymentStatus::Paid))),
            vec![1, 3]
        );
        assert_eq!(
            ids(&filter(&records, StatusFilter::Only(PaymentStatus::Unpaid))),
            vec![2]
        );
    }

    #[test]
    fn test_apply_combines_search_and_filter() {
        let records = vec![
            attendee(1, "Ahmed Hasan", PaymentStatus::Paid),
            attendee(2, "Ahmed Kanoo", PaymentStatus::Unpaid),
            attendee(3, "Noor Hasan", PaymentStatus::Unpaid),
        ];

        let query = AttendeeQuery::new("ahmed", StatusFilter::Only(PaymentStatus::Unpaid));
        assert_eq!(ids(&apply(&records, &query)), vec![2]);

        let query = AttendeeQuery::new("hasan", StatusFilter::All);
        assert_eq!(ids(&apply(&records, &query)), vec![1, 3]);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "PAID".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(PaymentStatus::Paid)
        );
        assert_eq!(
            "Unpaid".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(PaymentStatus::Unpaid)
        );
        assert!("pending".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_display_parses_back() {
        for filter in [
            StatusFilter::All,
            StatusFilter::Only(PaymentStatus::Paid),
            StatusFilter::Only(PaymentStatus::Unpaid),
        ] {
            assert_eq!(filter.to_string().parse::<StatusFilter>().unwrap(), filter);
        }
    }

    fn is_subsequence(sub: &[&Attendee], full: &[Attendee]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|s| rest.any(|f| f == *s))
    }

    proptest! {
        #[test]
        fn prop_search_is_subsequence(len in 0usize..40, term in "[a-zA-Z0-9 +.@-]{0,6}") {
            let records = collection(len as u32);
            let found = search(&records, &term);
            prop_assert!(is_subsequence(&found, &records));
        }

        #[test]
        fn prop_filter_only_keeps_matching_status(len in 0usize..40, paid in any::<bool>()) {
            let status = if paid { PaymentStatus::Paid } else { PaymentStatus::Unpaid };
            let records = collection(len as u32);
            let kept = filter(&records, StatusFilter::Only(status));
            prop_assert!(kept.iter().all(|a| a.payment_status == status));
            prop_assert!(is_subsequence(&kept, &records));
        }

        #[test]
        fn prop_apply_is_intersection(len in 0usize..40, term in "[a-z]{0,3}", paid in any::<bool>()) {
            let status = StatusFilter::Only(if paid { PaymentStatus::Paid } else { PaymentStatus::Unpaid });
            let records = collection(len as u32);
            let combined = apply(&records, &AttendeeQuery::new(term.clone(), status));
            let searched = search(&records, &term);
            let expected: Vec<&Attendee> = searched.into_iter().filter(|a| status.matches(a)).collect();
            prop_assert_eq!(combined, expected);
        }
    }
}
