//! Session-store keys.
//!
//! The store is a flat string map. Keys keep the names the web client used in
//! local storage so an exported browser session reads the same way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionKey {
    #[serde(rename = "authToken")]
    AuthToken,
    #[serde(rename = "refreshToken")]
    RefreshToken,
    #[serde(rename = "userID")]
    UserId,
    #[serde(rename = "username")]
    Username,
    #[serde(rename = "userEmail")]
    UserEmail,
    #[serde(rename = "isAdmin")]
    IsAdmin,
    #[serde(rename = "profilePicID")]
    ProfilePicId,
}

impl SessionKey {
    /// Every key, in storage order.
    pub const ALL: [Self; 7] = [
        Self::AuthToken,
        Self::RefreshToken,
        Self::UserId,
        Self::Username,
        Self::UserEmail,
        Self::IsAdmin,
        Self::ProfilePicId,
    ];

    /// Keys holding cached identity fields (everything except credentials).
    pub const IDENTITY: [Self; 5] = [
        Self::UserId,
        Self::Username,
        Self::UserEmail,
        Self::IsAdmin,
        Self::ProfilePicId,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthToken => "authToken",
            Self::RefreshToken => "refreshToken",
            Self::UserId => "userID",
            Self::Username => "username",
            Self::UserEmail => "userEmail",
            Self::IsAdmin => "isAdmin",
            Self::ProfilePicId => "profilePicID",
        }
    }

    /// Whether values under this key are credentials that must never be logged.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::AuthToken | Self::RefreshToken)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSessionKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_display_for_every_key() {
        for key in SessionKey::ALL {
            assert_eq!(key.as_str().parse::<SessionKey>(), Ok(key));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "userid".parse::<SessionKey>(),
            Err(CoreError::UnknownSessionKey("userid".into()))
        );
    }

    #[test]
    fn serde_uses_storage_names() {
        let json = serde_json::to_string(&SessionKey::ProfilePicId).unwrap();
        assert_eq!(json, "\"profilePicID\"");
    }

    #[test]
    fn only_tokens_are_secret() {
        let secret: Vec<_> = SessionKey::ALL.into_iter().filter(|k| k.is_secret()).collect();
        assert_eq!(secret, vec![SessionKey::AuthToken, SessionKey::RefreshToken]);
    }
}
