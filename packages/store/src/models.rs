//! # Domain model for user records
//!
//! [`User`] is the single entity this application manages. It is
//! `Serialize + Deserialize` with camelCase keys so it matches the REST
//! backend's JSON shape exactly:
//!
//! ```json
//! { "id": 7, "firstName": "Ada", "lastName": "Lovelace", "phone": "5550100100", "email": "ada@example.com" }
//! ```
//!
//! The `id` is assigned by the backend. Records that have not been created
//! yet carry `None` and are serialized without an `id` key.
//!
//! Field access by [`FieldName`] ([`User::field`] / [`User::field_mut`]) lets
//! the form and the validator walk the field schema instead of naming every
//! field by hand.

use serde::{Deserialize, Serialize};

use crate::schema::FieldName;

/// Backend-assigned identifier of a user record.
pub type UserId = u64;

/// A user record as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the backend; `None` until the record has been created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    /// Ten ASCII digits, unique across the collection.
    pub phone: String,
    pub email: String,
}

impl User {
    /// Build a record that has not been stored yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Builder method to attach a backend id.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn field(&self, name: FieldName) -> &str {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Phone => &self.phone,
            FieldName::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Phone => &mut self.phone,
            FieldName::Email => &mut self.email,
        }
    }

    /// "First Last", used in log lines.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
