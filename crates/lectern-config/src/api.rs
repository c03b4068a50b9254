//! Remote API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:6767".to_string()
}

fn default_asset_path() -> String {
    "/api/files/{id}".to_string()
}

fn default_upload_category() -> String {
    "profile_pictures".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend, e.g. `https://learn.example.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Asset retrieval path; `{id}` is replaced by the asset identifier.
    #[serde(default = "default_asset_path")]
    pub asset_path: String,

    /// Destination category sent with avatar uploads.
    #[serde(default = "default_upload_category")]
    pub upload_category: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            asset_path: default_asset_path(),
            upload_category: default_upload_category(),
        }
    }
}

impl ApiConfig {
    /// Check that the values can be used to build request URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when `base_url` is empty and
    /// [`ConfigError::Invalid`] for a non-HTTP base URL, an asset path
    /// without `{id}`, or an empty upload category.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "api.base_url",
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if !self.asset_path.contains("{id}") {
            return Err(ConfigError::Invalid {
                key: "api.asset_path",
                reason: "must contain the '{id}' placeholder".into(),
            });
        }
        if self.upload_category.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "api.upload_category",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
