//! Cross-cutting error types for Lectern.
//!
//! Domain-specific errors (`SessionError`, `ApiError`, `ProfileError`) live in
//! their respective crates. They converge into `anyhow` in `lectern-cli`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A persisted key does not name a known session entry.
    #[error("unknown session key: {0}")]
    UnknownSessionKey(String),
}
