use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edit::ProfileField;

/// Shown when neither the remote record nor the cache knows the username.
pub const PLACEHOLDER_USERNAME: &str = "Unknown User";

/// Shown when neither the remote record nor the cache knows the email.
pub const PLACEHOLDER_EMAIL: &str = "unknown@example.com";

/// What the client currently believes about the logged-in user.
///
/// Produced by the profile loader from the session cache and/or the remote
/// identity record. `username` and `email` are always populated; missing
/// values are replaced by [`PLACEHOLDER_USERNAME`] / [`PLACEHOLDER_EMAIL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySnapshot {
    /// Opaque user identifier. `None` when the session never learned it.
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    /// Identifier of the uploaded avatar image, if any.
    pub avatar_asset_id: Option<String>,
}

impl IdentitySnapshot {
    /// Build a snapshot, substituting placeholders for missing or empty
    /// `username` / `email`.
    #[must_use]
    pub fn with_placeholders(
        id: Option<String>,
        username: Option<String>,
        email: Option<String>,
        is_admin: bool,
        avatar_asset_id: Option<String>,
    ) -> Self {
        Self {
            id: id.filter(|v| !v.is_empty()),
            username: username
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_USERNAME.to_string()),
            email: email
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string()),
            is_admin,
            avatar_asset_id: avatar_asset_id.filter(|v| !v.is_empty()),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        if self.is_admin { Role::Admin } else { Role::Student }
    }

    /// Commit a successfully updated field into the snapshot.
    ///
    /// Passwords are never cached, so committing [`ProfileField::Password`]
    /// leaves the snapshot unchanged.
    pub fn commit(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::Username => self.username = value.to_string(),
            ProfileField::Email => self.email = value.to_string(),
            ProfileField::ProfilePic => self.avatar_asset_id = Some(value.to_string()),
            ProfileField::Password => {}
        }
    }
}

/// Role shown on the profile badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
