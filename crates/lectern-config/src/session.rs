//! Session store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SESSION_DIR: &str = ".lectern";
const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Explicit session file path. Empty means `~/.lectern/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Resolve the session file path.
    ///
    /// Returns `None` only when no explicit path is set and the home
    /// directory cannot be determined.
    #[must_use]
    pub fn resolve_path(&self) -> Option<PathBuf> {
        if !self.path.trim().is_empty() {
            return Some(PathBuf::from(self.path.trim()));
        }
        dirs::home_dir().map(|home| home.join(SESSION_DIR).join(SESSION_FILE_NAME))
    }
}
