//! JSON-file session store.
//!
//! The file holds a flat JSON object keyed by [`SessionKey`] storage names.
//! Unknown keys are preserved on rewrite so several client versions can share
//! one file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use lectern_core::SessionKey;

use crate::{SessionError, SessionStore};

type RawEntries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recognised entries. Unknown keys are skipped.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<SessionKey, String> {
        let raw = match self.read_raw() {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(%error, "session file unreadable; treating as empty");
                return BTreeMap::new();
            }
        };
        raw.into_iter()
            .filter_map(|(name, value)| match name.parse::<SessionKey>() {
                Ok(key) => Some((key, value)),
                Err(error) => {
                    tracing::debug!(%error, "ignoring unknown session entry");
                    None
                }
            })
            .collect()
    }

    fn read_raw(&self) -> Result<RawEntries, SessionError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RawEntries::new());
            }
            Err(error) => {
                return Err(SessionError::Store(format!(
                    "read {}: {error}",
                    self.path.display()
                )));
            }
        };
        if text.trim().is_empty() {
            return Ok(RawEntries::new());
        }
        serde_json::from_str(&text).map_err(|e| SessionError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn write_raw(&self, entries: &RawEntries) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::Store(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionError::Store(format!("encode session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| SessionError::Store(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::Store(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut RawEntries)) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_raw().unwrap_or_else(|error| {
            tracing::warn!(%error, "session file unreadable; starting from empty");
            RawEntries::new()
        });
        apply(&mut entries);
        if entries.is_empty() {
            return self.delete_file();
        }
        self.write_raw(&entries)
    }

    fn delete_file(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionError::Store(format!(
                "failed to delete {}: {error}",
                self.path.display()
            ))),
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        match self.read_raw() {
            Ok(mut entries) => entries.remove(key.as_str()),
            Err(error) => {
                tracing::warn!(%key, %error, "session read failed");
                None
            }
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })?;
        if key.is_secret() {
            tracing::debug!(%key, "stored credential");
        } else {
            tracing::debug!(%key, value, "stored session value");
        }
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.remove(key.as_str());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path().join("session.json"));
        assert_eq!(store.get(SessionKey::AuthToken), None);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn whitespace_file_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "  \n ").expect("write");
        let store = FileStore::new(&path);
        assert_eq!(store.get(SessionKey::Username), None);
    }

    #[test]
    fn truncated_file_is_replaced_on_write() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, r#"{"authToken": "tok", "#).expect("write");
        let store = FileStore::new(&path);

        assert_eq!(store.get(SessionKey::AuthToken), None);
        store.set(SessionKey::AuthToken, "new").expect("set");
        assert_eq!(store.get(SessionKey::AuthToken).as_deref(), Some("new"));
    }

    #[test]
    fn corrupt_file_can_be_cleared() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "{not json").expect("write");
        let store = FileStore::new(&path);

        crate::clear(&store).expect("clear");
        assert!(!path.exists());
    }
}
