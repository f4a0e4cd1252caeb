//! Draft validation engine.
//!
//! # Responsibility
//! - Check a draft for the contact-method rule, required fields and the
//!   email/phone formats.
//! - Report failures as field-scoped messages plus at most one top-level
//!   message.
//!
//! # Invariants
//! - Pure: no I/O, no logging, same draft yields the same report.
//! - A missing contact method short-circuits every other check.
//! - Format checks only run for non-blank email/phone values.

use crate::model::draft::{Field, ProfessionalDraft};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Top-level message when neither email nor phone was entered.
pub const CONTACT_REQUIRED_MESSAGE: &str = "Either Email or Phone is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str =
    "Please enter a valid phone number (e.g., +1 234 567 8900)";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\+?[0-9]{1,4}?[-.\s]?\(?[0-9]{1,3}?\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$",
    )
    .expect("valid phone regex")
});

const REQUIRED_FIELDS: [Field; 3] = [Field::FullName, Field::CompanyName, Field::JobTitle];

/// Outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Field-scoped messages; empty together with `top_level_error` means valid.
    pub field_errors: BTreeMap<Field, String>,
    /// Cross-field message for the contact-method rule.
    pub top_level_error: Option<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.top_level_error.is_none()
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

/// Validates a draft before it is handed to the creation collaborator.
pub fn validate(draft: &ProfessionalDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    let email = draft.email.trim();
    let phone = draft.phone.trim();
    if email.is_empty() && phone.is_empty() {
        report.top_level_error = Some(CONTACT_REQUIRED_MESSAGE.to_string());
        return report;
    }

    for field in REQUIRED_FIELDS {
        if draft.value(field).trim().is_empty() {
            report
                .field_errors
                .insert(field, required_message(field));
        }
    }

    if !email.is_empty() && !is_valid_email(email) {
        report
            .field_errors
            .insert(Field::Email, INVALID_EMAIL_MESSAGE.to_string());
    }
    if !phone.is_empty() && !is_valid_phone(phone) {
        report
            .field_errors
            .insert(Field::Phone, INVALID_PHONE_MESSAGE.to_string());
    }

    report
}

/// Returns whether `value` looks like `local-part@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns whether `value` looks like a (possibly international) phone number.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Required-field message naming the field, e.g. `Full Name is required.`
pub fn required_message(field: Field) -> String {
    format!("{} is required.", field.label())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_phone};

    #[test]
    fn email_pattern_requires_alpha_tld_of_two_or_more() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub-domain.example.io"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b.c0m"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn phone_pattern_tolerates_common_separators() {
        assert!(is_valid_phone("+1 234 567 8900"));
        assert!(is_valid_phone("5551001001"));
        assert!(is_valid_phone("1 (555) 100-1001"));
        assert!(!is_valid_phone("(555) 100-1001"));
        assert!(is_valid_phone("+44 20.7946.0958"));
        assert!(!is_valid_phone("not-a-phone!!"));
        assert!(!is_valid_phone("555-abc-1001"));
        assert!(!is_valid_phone("+"));
    }
}
