use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not authenticated — run `lct login`")]
    NotAuthenticated,

    #[error("session store error: {0}")]
    Store(String),

    #[error("session file {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },
}
