//! Field schema for the user form.
//!
//! [`USER_FORM_SCHEMA`] is the single source of truth for which fields exist,
//! their labels and whether they are mandatory. The form renders one input
//! per entry and the validator walks the same list.

/// The editable fields of a [`crate::User`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Phone,
    Email,
}

impl FieldName {
    /// JSON / DOM key of the field.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Phone => "phone",
            FieldName::Email => "email",
        }
    }

    /// Schema entry describing this field.
    pub fn spec(self) -> &'static FieldSpec {
        let index = match self {
            FieldName::FirstName => 0,
            FieldName::LastName => 1,
            FieldName::Phone => 2,
            FieldName::Email => 3,
        };
        &USER_FORM_SCHEMA[index]
    }
}

/// One form field: how to render it and whether it may be left empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    /// HTML input type: "text", "tel" or "email".
    pub input_type: &'static str,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub max_length: Option<usize>,
}

/// Maximum number of digits in a phone number.
pub const PHONE_LENGTH: usize = 10;

pub static USER_FORM_SCHEMA: [FieldSpec; 4] = [
    FieldSpec {
        name: FieldName::FirstName,
        label: "First Name",
        input_type: "text",
        required: true,
        placeholder: Some("Enter first name"),
        max_length: None,
    },
    FieldSpec {
        name: FieldName::LastName,
        label: "Last Name",
        input_type: "text",
        required: true,
        placeholder: Some("Enter last name"),
        max_length: None,
    },
    FieldSpec {
        name: FieldName::Phone,
        label: "Phone Number",
        input_type: "tel",
        required: true,
        placeholder: Some("Enter phone number"),
        max_length: Some(PHONE_LENGTH),
    },
    FieldSpec {
        name: FieldName::Email,
        label: "Email Address",
        input_type: "email",
        required: true,
        placeholder: Some("Enter email address"),
        max_length: None,
    },
];
