//! Login tokens and best-effort JWT claim decoding.
//!
//! Claims are decoded WITHOUT signature verification. They only feed local
//! display and the cached user identifier; the backend verifies every request.

use base64::Engine as _;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Body of `POST /api/login`.
#[derive(Clone, Deserialize)]
pub struct LoginTokens {
    #[serde(alias = "token", alias = "access_token")]
    pub auth_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for LoginTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginTokens")
            .field("auth_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn decode_claims(jwt: &str) -> Result<Value, ApiError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::Token("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| ApiError::Token(format!("base64 decode failed: {e}")))?;
    serde_json::from_slice(&payload).map_err(|e| ApiError::Token(format!("JSON parse failed: {e}")))
}

/// Decode the `sub` claim (the backend puts the user ID there).
///
/// # Errors
///
/// Returns [`ApiError::Token`] if the token is not a JWT or has no `sub`.
pub fn decode_subject(jwt: &str) -> Result<String, ApiError> {
    let claims = decode_claims(jwt)?;
    claims["sub"]
        .as_str()
        .filter(|sub| !sub.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Token("missing sub claim".into()))
}

/// Decode the `exp` claim.
///
/// # Errors
///
/// Returns [`ApiError::Token`] if the token is not a JWT or `exp` is missing
/// or out of range.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, ApiError> {
    let claims = decode_claims(jwt)?;
    let exp = claims["exp"]
        .as_i64()
        .ok_or_else(|| ApiError::Token("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| ApiError::Token("invalid exp timestamp".into()))
}
