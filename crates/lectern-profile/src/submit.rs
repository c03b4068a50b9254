//! Per-field remote updates for the edit form.

use std::fmt;

use lectern_client::IdentityApi;
use lectern_core::{EditRequest, IdentitySnapshot, ProfileField};

use crate::error::FieldFailure;

/// One field whose value differs from the snapshot.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: ProfileField,
    pub value: String,
}

impl fmt::Debug for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.field == ProfileField::Password {
            "<redacted>"
        } else {
            self.value.as_str()
        };
        f.debug_struct("FieldChange")
            .field("field", &self.field)
            .field("value", &value)
            .finish()
    }
}

/// Changes implied by `request`, in submission order.
///
/// Username and email count when they differ from `current`; a password
/// counts whenever one was supplied.
#[must_use]
pub fn pending_changes(current: &IdentitySnapshot, request: &EditRequest) -> Vec<FieldChange> {
    ProfileField::SUBMIT_ORDER
        .into_iter()
        .filter_map(|field| {
            let value = match field {
                ProfileField::Username => {
                    (request.username != current.username).then_some(&request.username)
                }
                ProfileField::Email => (request.email != current.email).then_some(&request.email),
                ProfileField::Password => request.password().map(|_| &request.password),
                ProfileField::ProfilePic => None,
            }?;
            Some(FieldChange {
                field,
                value: value.clone(),
            })
        })
        .collect()
}

/// What happened to each submitted change.
#[derive(Debug, Default)]
pub struct SubmitReport {
    pub committed: Vec<FieldChange>,
    pub failures: Vec<FieldFailure>,
}

impl SubmitReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Send every change, one call per field, in order.
///
/// A failure neither stops later fields nor undoes earlier ones.
pub async fn submit_changes(
    api: &impl IdentityApi,
    token: &str,
    user_id: &str,
    changes: Vec<FieldChange>,
) -> SubmitReport {
    let mut report = SubmitReport::default();
    for change in changes {
        match api.update_field(token, user_id, change.field, &change.value).await {
            Ok(()) => {
                tracing::debug!(field = %change.field, "field updated");
                report.committed.push(change);
            }
            Err(error) => {
                tracing::warn!(field = %change.field, %error, "field update failed");
                report.failures.push(FieldFailure {
                    field: change.field,
                    error,
                });
            }
        }
    }
    report
}
