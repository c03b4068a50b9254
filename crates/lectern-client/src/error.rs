use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-2xx status.
    #[error("{operation}: HTTP {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The request never produced a response.
    #[error("{operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be understood.
    #[error("{operation}: malformed response: {reason}")]
    Decode {
        operation: &'static str,
        reason: String,
    },

    #[error("read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("invalid token: {0}")]
    Token(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
