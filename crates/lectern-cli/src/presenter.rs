use lectern_core::{FieldErrors, ProfileView};
use lectern_profile::{Alert, AlertKind, ProfilePresenter};

use crate::cli::GlobalFlags;

/// Writes user-facing notices to stderr; command results go to stdout.
///
/// Error alerts are not printed here: the failing command returns the same
/// error and `main` reports it.
pub struct TerminalPresenter {
    quiet: bool,
}

impl TerminalPresenter {
    pub const fn new(flags: &GlobalFlags) -> Self {
        Self { quiet: flags.quiet }
    }
}

impl ProfilePresenter for TerminalPresenter {
    fn show_profile(&self, view: &ProfileView) {
        tracing::debug!(name = %view.display_name, "profile rendered");
    }

    fn show_field_errors(&self, errors: &FieldErrors) {
        for (field, message) in errors.iter() {
            eprintln!("  {}: {message}", field.as_str());
        }
    }

    fn clear_field_errors(&self) {}

    fn show_alert(&self, alert: &Alert) {
        match alert.kind {
            AlertKind::Success if !self.quiet => eprintln!("{}", alert.message),
            AlertKind::Success => {}
            AlertKind::Error => tracing::debug!(message = %alert.message, "error alert"),
        }
    }

    fn set_loading(&self, loading: bool) {
        tracing::trace!(loading, "loading state");
    }

    fn set_edit_surface(&self, _open: bool) {}
}
