//! Edit requests and the fields they touch.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate profile values captured from the edit form.
///
/// `username` and `email` are trimmed on construction; passwords are kept
/// verbatim. An empty `password` means "leave the password alone".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl EditRequest {
    #[must_use]
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>, confirm: impl Into<String>) -> Self {
        self.password = password.into();
        self.confirm_password = confirm.into();
        self
    }

    /// The new password, if the user supplied one.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        (!self.password.is_empty()).then_some(self.password.as_str())
    }
}

// Manual Debug: passwords must not end up in logs.
impl fmt::Debug for EditRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// A remotely updatable profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Username,
    Email,
    Password,
    ProfilePic,
}

impl ProfileField {
    /// Order in which edit-form fields are submitted.
    pub const SUBMIT_ORDER: [Self; 3] = [Self::Username, Self::Email, Self::Password];

    /// Value of the `target_field` query parameter.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ProfilePic => "profile_pic",
        }
    }

    /// Key of the single-entry JSON body sent with the update.
    #[must_use]
    pub const fn body_key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ProfilePic => "profilePicID",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// An input on the edit form that can carry an inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline validation messages, at most one per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_username_and_email() {
        let request = EditRequest::new("  alice ", "\ta@b.co\n");
        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "a@b.co");
        assert_eq!(request.password(), None);
    }

    #[test]
    fn passwords_are_not_trimmed() {
        let request = EditRequest::new("alice", "a@b.co").with_password(" secret ", " secret ");
        assert_eq!(request.password(), Some(" secret "));
    }

    #[test]
    fn debug_redacts_password() {
        let request = EditRequest::new("alice", "a@b.co").with_password("hunter22", "hunter22");
        let debug = format!("{request:?}");
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn profile_pic_body_key_differs_from_wire_name() {
        assert_eq!(ProfileField::ProfilePic.wire_name(), "profile_pic");
        assert_eq!(ProfileField::ProfilePic.body_key(), "profilePicID");
    }

    #[test]
    fn field_errors_keep_one_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Email, "first");
        errors.insert(FormField::Email, "second");
        errors.insert(FormField::Username, "short");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Email), Some("second"));
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![FormField::Username, FormField::Email]);
    }
}
