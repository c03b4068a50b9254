//! Remote identity records.
//!
//! The backend serializes its user row with capitalized Go field names
//! (`Username`, `IsAdmin`, `ProfilePicID`), and nullable columns may arrive as
//! `{"String": "...", "Valid": true}` wrappers. Older endpoints used lowercase
//! names. Keys are therefore matched case-insensitively with `_` ignored.

use std::collections::HashMap;

use lectern_core::IdentitySnapshot;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A normalized identity record as returned by `GET /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RemoteIdentity {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub profile_pic_id: Option<String>,
}

impl RemoteIdentity {
    /// Convert into a snapshot; the remote record wins over any cached value.
    #[must_use]
    pub fn into_snapshot(self) -> IdentitySnapshot {
        IdentitySnapshot {
            id: self.id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
            avatar_asset_id: self.profile_pic_id,
        }
    }
}

impl TryFrom<Value> for RemoteIdentity {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err("identity record is not a JSON object".into());
        };
        let fields = normalize_keys(map);

        let username = required_string(&fields, "username")?;
        let email = required_string(&fields, "email")?;
        let is_admin = match fields.get("isadmin") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
            Some(other) => return Err(format!("isAdmin: expected boolean, got {other}")),
        };

        Ok(Self {
            id: fields.get("id").and_then(nullable_string),
            username,
            email,
            is_admin,
            profile_pic_id: fields.get("profilepicid").and_then(nullable_string),
        })
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn normalize_keys(map: Map<String, Value>) -> HashMap<String, Value> {
    map.into_iter()
        .map(|(key, value)| (normalize_key(&key), value))
        .collect()
}

fn required_string(fields: &HashMap<String, Value>, name: &str) -> Result<String, String> {
    match fields.get(name).and_then(nullable_string) {
        Some(value) => Ok(value),
        None => Err(format!("missing or empty field '{name}'")),
    }
}

/// Plain strings, numbers, and valid nullable wrappers yield a value;
/// `null`, empty strings, and invalid wrappers yield `None`.
fn nullable_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Object(wrapper) => {
            let mut valid = false;
            let mut inner = None;
            for (key, value) in wrapper {
                match normalize_key(key).as_str() {
                    "valid" => valid = value.as_bool().unwrap_or(false),
                    "string" => inner = value.as_str(),
                    _ => {}
                }
            }
            inner
                .filter(|text| valid && !text.is_empty())
                .map(str::to_string)
        }
        _ => None,
    }
}
