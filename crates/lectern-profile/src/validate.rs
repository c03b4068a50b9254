//! Local validation of the edit form.
//!
//! Every rule is evaluated; all violations are reported together.

use std::sync::LazyLock;

use lectern_core::{EditRequest, FieldErrors, FormField};
use regex::Regex;

const MIN_USERNAME_CHARS: usize = 3;
const MIN_PASSWORD_CHARS: usize = 6;

// local@domain.tld: no whitespace or '@' in any part.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| unreachable!("email pattern: {e}"))
});

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Result of validating an [`EditRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub field_errors: FieldErrors,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }
}

#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[must_use]
pub fn validate(request: &EditRequest) -> Validation {
    let mut errors = FieldErrors::new();

    if request.username.chars().count() < MIN_USERNAME_CHARS {
        errors.insert(FormField::Username, USERNAME_TOO_SHORT);
    }

    if !is_email_shaped(&request.email) {
        errors.insert(FormField::Email, EMAIL_INVALID);
    }

    if let Some(password) = request.password() {
        if password.chars().count() < MIN_PASSWORD_CHARS {
            errors.insert(FormField::Password, PASSWORD_TOO_SHORT);
        }
        if password != request.confirm_password {
            errors.insert(FormField::ConfirmPassword, PASSWORD_MISMATCH);
        }
    }

    Validation {
        field_errors: errors,
    }
}
