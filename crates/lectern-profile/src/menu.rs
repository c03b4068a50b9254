//! Navigation-menu identity indicator.

use lectern_core::SessionKey;
use lectern_session::SessionStore;
use serde::Serialize;

/// What the menu shows about the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MenuState {
    SignedIn { username: String },
    SignedOut,
}

impl MenuState {
    /// Signed in only when both a token and a username are stored.
    pub fn from_store(store: &impl SessionStore) -> Self {
        match (
            store.get_non_empty(SessionKey::AuthToken),
            store.get_non_empty(SessionKey::Username),
        ) {
            (Some(_), Some(username)) => Self::SignedIn { username },
            _ => Self::SignedOut,
        }
    }
}

/// Externally owned widget that mirrors [`MenuState`].
pub trait IdentityIndicator: Send + Sync {
    fn refresh(&self, state: &MenuState);
}

/// Indicator for surfaces without a menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIndicator;

impl IdentityIndicator for NoopIndicator {
    fn refresh(&self, _state: &MenuState) {}
}
