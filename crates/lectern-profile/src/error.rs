use lectern_client::ApiError;
use lectern_core::{FieldErrors, ProfileField};
use lectern_session::SessionError;
use thiserror::Error;

/// Message shown when the stored user identifier is missing.
pub const MISSING_USER_ID: &str = "User ID not found. Please log in again.";

/// Message shown when an upload returns no asset identifier.
pub const UPLOAD_NOT_LINKED: &str = "Upload successful but failed to link to profile";

/// Advisory shown when the profile falls back to cached data.
pub const STALE_PROFILE: &str = "Failed to load fresh user profile data";

/// Hard failures: the requested change was not applied.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No session token. The caller should route to the login surface.
    #[error("not authenticated — please log in")]
    NotAuthenticated,

    #[error("{}", MISSING_USER_ID)]
    MissingUserId,

    /// The edit form failed local validation; nothing was sent.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    /// One or more field updates were rejected.
    #[error("Failed to update {}", field_list(.failures))]
    FieldUpdate { failures: Vec<FieldFailure> },

    #[error("Upload failed: {0}")]
    Upload(#[source] ApiError),

    #[error("{}", UPLOAD_NOT_LINKED)]
    UploadNotLinked,

    /// The image was uploaded but the user record still points elsewhere.
    #[error("Failed to update profile picture: {0}")]
    AvatarLink(#[source] ApiError),

    #[error("Login failed: {0}")]
    Login(#[source] ApiError),

    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for ProfileError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::NotAuthenticated => Self::NotAuthenticated,
            other => Self::Session(other),
        }
    }
}

impl ProfileError {
    /// Fields whose remote update failed, in submission order.
    #[must_use]
    pub fn failed_fields(&self) -> Vec<ProfileField> {
        match self {
            Self::FieldUpdate { failures } => failures.iter().map(|f| f.field).collect(),
            _ => Vec::new(),
        }
    }
}

/// A single rejected field update.
#[derive(Debug)]
pub struct FieldFailure {
    pub field: ProfileField,
    pub error: ApiError,
}

fn field_list(failures: &[FieldFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.field.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Recoverable failures: cached data is shown instead.
#[derive(Debug, Error)]
pub enum SoftError {
    #[error("{}: {}", STALE_PROFILE, .0)]
    ProfileFetch(#[source] ApiError),

    #[error("{}: could not cache remote profile: {}", STALE_PROFILE, .0)]
    CacheWrite(#[source] SessionError),
}

impl SoftError {
    /// Short advisory for the user; details go to the log.
    #[must_use]
    pub const fn advisory(&self) -> &'static str {
        STALE_PROFILE
    }
}
