//! Session lifecycle: login, logout and status.

use chrono::{DateTime, Utc};
use lectern_client::{IdentityApi, token};
use lectern_core::SessionKey;
use lectern_session::{SessionError, SessionStore};
use serde::Serialize;

use crate::error::ProfileError;
use crate::menu::MenuState;

/// Exchange credentials for tokens and store them.
///
/// Nothing is written unless the login call succeeds; on success any cached
/// identity from an earlier session is dropped first. The user id is taken
/// from the token's `sub` claim when the token is a JWT; no signature check
/// is made.
///
/// # Errors
///
/// - [`ProfileError::Login`] if the credentials are rejected
/// - [`ProfileError::Session`] if the tokens cannot be stored
pub async fn login(
    store: &impl SessionStore,
    api: &impl IdentityApi,
    email: &str,
    password: &str,
) -> Result<(), ProfileError> {
    let email = email.trim();
    let tokens = api.login(email, password).await.map_err(ProfileError::Login)?;

    let user_id = match token::decode_subject(&tokens.auth_token) {
        Ok(subject) => Some(subject),
        Err(error) => {
            tracing::debug!(%error, "token carries no user id");
            None
        }
    };

    // A previous user's cached identity must not leak into this session.
    for key in SessionKey::IDENTITY {
        store.remove(key)?;
    }
    store.set(SessionKey::AuthToken, &tokens.auth_token)?;
    match &tokens.refresh_token {
        Some(refresh) => store.set(SessionKey::RefreshToken, refresh)?,
        None => store.remove(SessionKey::RefreshToken)?,
    }
    store.set(SessionKey::UserEmail, email)?;
    if let Some(id) = &user_id {
        store.set(SessionKey::UserId, id)?;
    }
    tracing::info!(user_id = user_id.as_deref().unwrap_or("-"), "logged in");
    Ok(())
}

/// Forget credentials and cached identity.
///
/// # Errors
///
/// Returns the first [`SessionError`] raised while clearing.
pub fn logout(store: &impl SessionStore) -> Result<(), SessionError> {
    lectern_session::clear(store)?;
    tracing::info!("logged out");
    Ok(())
}

/// Snapshot of the local session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub menu: MenuState,
    pub user_id: Option<String>,
    /// Decoded without verification; `None` for opaque tokens.
    pub token_expires_at: Option<DateTime<Utc>>,
}

pub fn status(store: &impl SessionStore) -> SessionStatus {
    let token = store.get_non_empty(SessionKey::AuthToken);
    SessionStatus {
        authenticated: token.is_some(),
        menu: MenuState::from_store(store),
        user_id: store.get_non_empty(SessionKey::UserId),
        token_expires_at: token.and_then(|jwt| token::decode_expiry(&jwt).ok()),
    }
}
