use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// An image file chosen by the user, read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk. No size or type checks are performed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| ApiError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("avatar")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

impl std::fmt::Debug for AvatarFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Body of a successful upload.
///
/// The identifier key has changed between backend revisions; the first of
/// `fileID`, `file_id`, `id`, `file_path` that is present wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct UploadReceipt {
    pub asset_id: Option<String>,
}

const ASSET_ID_KEYS: [&str; 4] = ["fileID", "file_id", "id", "file_path"];

impl From<Value> for UploadReceipt {
    fn from(value: Value) -> Self {
        let asset_id = ASSET_ID_KEYS.iter().find_map(|key| match value.get(key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            _ => None,
        });
        Self { asset_id }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn prefers_file_id() {
        let receipt = UploadReceipt::from(json!({ "file_path": "a/b.png", "fileID": "f-1" }));
        assert_eq!(receipt.asset_id.as_deref(), Some("f-1"));
    }

    #[test]
    fn falls_back_to_file_path() {
        let receipt = UploadReceipt::from(json!({ "file_path": "profile_pictures/u1.png" }));
        assert_eq!(receipt.asset_id.as_deref(), Some("profile_pictures/u1.png"));
    }

    #[test]
    fn empty_or_missing_identifier() {
        assert_eq!(UploadReceipt::from(json!({ "fileID": "" })).asset_id, None);
        assert_eq!(UploadReceipt::from(json!({ "ok": true })).asset_id, None);
        assert_eq!(UploadReceipt::from(json!("text")).asset_id, None);
    }

    #[tokio::test]
    async fn read_uses_file_name() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("me.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write");

        let file = AvatarFile::read(&path).await.expect("read");
        assert_eq!(file.file_name, "me.png");
        assert_eq!(file.bytes.len(), 4);
    }

    #[tokio::test]
    async fn read_missing_file_is_io_error() {
        let error = AvatarFile::read(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::Io { .. }));
    }
}
