//! Profile loading: session cache first, remote record when possible.

use lectern_client::IdentityApi;
use lectern_core::{IdentitySnapshot, SessionKey};
use lectern_session::{SessionError, SessionStore};
use serde::Serialize;

use crate::error::SoftError;

/// Where a loaded snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    Remote,
    Cache,
}

/// Outcome of [`load_profile`]. Loading itself never fails.
#[derive(Debug)]
pub struct LoadedProfile {
    pub snapshot: IdentitySnapshot,
    pub source: SnapshotSource,
    /// Set when fresh data could not be obtained or cached.
    pub advisory: Option<SoftError>,
}

/// Build a snapshot from cached session values only.
pub fn cached_snapshot(store: &impl SessionStore) -> IdentitySnapshot {
    IdentitySnapshot::with_placeholders(
        store.get_non_empty(SessionKey::UserId),
        store.get_non_empty(SessionKey::Username),
        store.get_non_empty(SessionKey::UserEmail),
        store.get(SessionKey::IsAdmin).as_deref() == Some("true"),
        store.get_non_empty(SessionKey::ProfilePicId),
    )
}

/// Mirror `snapshot` into the session cache.
///
/// A snapshot without an avatar removes `profilePicID`.
///
/// # Errors
///
/// Returns the first [`SessionError`] raised by the store.
pub fn persist_snapshot(
    store: &impl SessionStore,
    snapshot: &IdentitySnapshot,
) -> Result<(), SessionError> {
    if let Some(id) = &snapshot.id {
        store.set(SessionKey::UserId, id)?;
    }
    store.set(SessionKey::Username, &snapshot.username)?;
    store.set(SessionKey::UserEmail, &snapshot.email)?;
    store.set(SessionKey::IsAdmin, if snapshot.is_admin { "true" } else { "false" })?;
    match &snapshot.avatar_asset_id {
        Some(asset_id) => store.set(SessionKey::ProfilePicId, asset_id),
        None => store.remove(SessionKey::ProfilePicId),
    }
}

/// Load the current identity.
///
/// Without a stored user id no request is made. Any remote failure falls
/// back to the cache and carries a [`SoftError`].
pub async fn load_profile(
    store: &impl SessionStore,
    api: &impl IdentityApi,
    token: &str,
) -> LoadedProfile {
    let Some(user_id) = store.get_non_empty(SessionKey::UserId) else {
        tracing::debug!("no stored user id; using cached profile");
        return LoadedProfile {
            snapshot: cached_snapshot(store),
            source: SnapshotSource::Cache,
            advisory: None,
        };
    };

    match api.fetch_identity(token, &user_id).await {
        Ok(remote) => {
            let mut snapshot = remote.into_snapshot();
            if snapshot.id.is_none() {
                snapshot.id = Some(user_id);
            }
            let advisory = persist_snapshot(store, &snapshot).err().map(|error| {
                tracing::warn!(%error, "failed to cache remote profile");
                SoftError::CacheWrite(error)
            });
            LoadedProfile {
                snapshot,
                source: SnapshotSource::Remote,
                advisory,
            }
        }
        Err(error) => {
            tracing::warn!(%error, user_id = %user_id, "profile fetch failed; using cached profile");
            LoadedProfile {
                snapshot: cached_snapshot(store),
                source: SnapshotSource::Cache,
                advisory: Some(SoftError::ProfileFetch(error)),
            }
        }
    }
}
