//! # lectern-session
//!
//! Key-value session persistence for Lectern.
//!
//! The profile core never touches a concrete storage mechanism. It talks to a
//! [`SessionStore`] over the closed [`SessionKey`] set:
//! - [`MemoryStore`] keeps everything in a map (tests, embedding)
//! - [`FileStore`] keeps a JSON object on disk with owner-only permissions

pub mod error;
pub mod file;
pub mod memory;

pub use error::SessionError;
pub use file::FileStore;
pub use lectern_core::SessionKey;
pub use memory::MemoryStore;

/// Synchronous key-value storage for session state.
///
/// Reads never fail: an unreadable backend behaves like an empty one (and
/// logs why). Writes report failures so callers can surface them.
pub trait SessionStore: Send + Sync {
    /// Current value under `key`, if any.
    fn get(&self, key: SessionKey) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the backend cannot be written.
    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the backend cannot be written.
    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;

    /// Non-empty value under `key`.
    fn get_non_empty(&self, key: SessionKey) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

/// Return the bearer token, or [`SessionError::NotAuthenticated`] if there is none.
///
/// # Errors
///
/// Returns [`SessionError::NotAuthenticated`] when no non-empty token is stored.
pub fn require_token(store: &impl SessionStore) -> Result<String, SessionError> {
    store
        .get_non_empty(SessionKey::AuthToken)
        .ok_or(SessionError::NotAuthenticated)
}

/// Remove every session key: credentials and cached identity.
///
/// Every key is attempted even if an earlier removal fails; the first
/// failure is returned.
///
/// # Errors
///
/// Returns the first [`SessionError`] raised by the backend.
pub fn clear(store: &impl SessionStore) -> Result<(), SessionError> {
    let mut first_error = None;
    for key in SessionKey::ALL {
        if let Err(error) = store.remove(key) {
            tracing::warn!(%key, %error, "failed to clear session key");
            first_error.get_or_insert(error);
        }
    }
    first_error.map_or(Ok(()), Err)
}
