//! Keystroke sanitization and submit-time validation of user fields.
//!
//! Sanitization runs before a typed value is stored, so the form never holds
//! characters a field cannot accept. Validation runs on submit and guards
//! against data that did not pass through sanitization (initial records,
//! programmatic input).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::User;
use crate::schema::{FieldName, FieldSpec, PHONE_LENGTH, USER_FORM_SCHEMA};

pub const PHONE_LENGTH_MESSAGE: &str = "Phone number must be 10 digits";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validation messages keyed by field, at most one per field.
pub type FieldErrors = BTreeMap<FieldName, String>;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

/// Clean a raw keystroke value for `field`.
///
/// Names keep ASCII letters and whitespace, the phone keeps at most
/// [`PHONE_LENGTH`] ASCII digits, the email is stored as typed.
pub fn sanitize(field: FieldName, raw: &str) -> String {
    match field {
        FieldName::FirstName | FieldName::LastName => raw.chars().filter(|c| is_name_char(*c)).collect(),
        FieldName::Phone => raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(PHONE_LENGTH)
            .collect(),
        FieldName::Email => raw.to_string(),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check one value against its schema entry.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Option<String> {
    if value.is_empty() {
        return spec.required.then(|| format!("{} is required", spec.label));
    }

    match spec.name {
        FieldName::FirstName | FieldName::LastName if !value.chars().all(is_name_char) => {
            Some(format!("{} should contain only letters", spec.label))
        }
        FieldName::Phone
            if value.chars().count() != PHONE_LENGTH
                || !value.chars().all(|c| c.is_ascii_digit()) =>
        {
            Some(PHONE_LENGTH_MESSAGE.to_string())
        }
        FieldName::Email if !is_valid_email(value) => Some(INVALID_EMAIL_MESSAGE.to_string()),
        _ => None,
    }
}

/// Validate every schema field of `user`, collecting all failures.
pub fn validate_user(user: &User) -> FieldErrors {
    USER_FORM_SCHEMA
        .iter()
        .filter_map(|spec| {
            validate_field(spec, user.field(spec.name)).map(|message| (spec.name, message))
        })
        .collect()
}
