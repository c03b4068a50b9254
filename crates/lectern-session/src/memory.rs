use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lectern_core::SessionKey;

use crate::{SessionError, SessionStore};

/// In-process session store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<SessionKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with initial values.
    #[must_use]
    pub fn from_pairs<V: Into<String>>(pairs: impl IntoIterator<Item = (SessionKey, V)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Copy of everything currently stored.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<SessionKey, String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<SessionKey, String>> {
        // The map is always left consistent, so a poisoned lock is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.lock().get(&key).cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        self.lock().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.lock().remove(&key);
        Ok(())
    }
}
