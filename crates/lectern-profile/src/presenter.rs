//! The view binding. Implementations draw; they make no decisions.

use lectern_core::{FieldErrors, ProfileView};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Success,
    Error,
}

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Receives everything the profile page shows.
pub trait ProfilePresenter: Send + Sync {
    fn show_profile(&self, view: &ProfileView);

    /// Inline messages next to the offending inputs.
    fn show_field_errors(&self, errors: &FieldErrors);

    fn clear_field_errors(&self);

    fn show_alert(&self, alert: &Alert);

    /// Busy state while a network operation is in flight.
    fn set_loading(&self, loading: bool);

    fn set_edit_surface(&self, open: bool);
}
