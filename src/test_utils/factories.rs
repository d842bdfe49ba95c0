//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    domain::entities::waitlist_entry::WaitlistEntry, use_cases::waitlist::SubmissionInput,
};

/// Create a submission for Ada with every field present.
pub fn create_test_input(overrides: impl FnOnce(&mut SubmissionInput)) -> SubmissionInput {
    let mut input = SubmissionInput {
        name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
        user_type: Some("developer".to_string()),
        agreed_to_terms: true,
    };
    overrides(&mut input);
    input
}

/// Create a stored entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 0,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        user_type: "developer".to_string(),
        agreed_to_terms: true,
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp so ordering assertions are deterministic.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0)
        .single()
        .expect("valid test datetime")
}
