//! State of the add/edit form, independent of any renderer.
//!
//! A [`FormState`] is opened either empty (add) or from an existing record
//! (edit). In edit mode the opening record is kept as a snapshot so a submit
//! that changes nothing can be refused.

use crate::models::User;
use crate::schema::{FieldName, USER_FORM_SCHEMA};
use crate::validation::{sanitize, validate_user, FieldErrors};

pub const NO_CHANGES_MESSAGE: &str = "No changes detected. Please update at least one field.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: User,
    errors: FieldErrors,
    notice: Option<String>,
    original: Option<User>,
}

impl FormState {
    /// Open the form, pre-filled from `initial` when editing.
    pub fn new(initial: Option<&User>) -> Self {
        match initial {
            Some(user) => Self {
                values: user.clone(),
                original: Some(user.clone()),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Start over for `initial`, dropping typed values, field errors and
    /// the no-changes notice.
    pub fn reset(&mut self, initial: Option<&User>) {
        *self = Self::new(initial);
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.field(field)
    }

    pub fn values(&self) -> &User {
        &self.values
    }

    /// Store a typed value after sanitizing it for `field`.
    pub fn set_value(&mut self, field: FieldName, raw: &str) {
        *self.values.field_mut(field) = sanitize(field, raw);
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Form-level warning, set when an edit is submitted unchanged.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Re-run validation and replace the current field errors.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_user(&self.values);
        self.errors.is_empty()
    }

    /// Whether any schema field differs from the opening snapshot.
    /// Always true in add mode.
    pub fn has_changes(&self) -> bool {
        let Some(original) = &self.original else {
            return true;
        };
        USER_FORM_SCHEMA
            .iter()
            .any(|spec| self.values.field(spec.name) != original.field(spec.name))
    }

    /// Validate and check for changes. Returns the record to hand to the
    /// caller, or `None` when the submit must be refused.
    pub fn submit(&mut self) -> Option<User> {
        self.notice = None;
        if !self.validate() {
            return None;
        }
        if !self.has_changes() {
            self.notice = Some(NO_CHANGES_MESSAGE.to_string());
            return None;
        }
        Some(self.values.clone())
    }
}
