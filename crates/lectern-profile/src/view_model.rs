//! The profile page controller.
//!
//! [`ProfileViewModel`] owns the current snapshot and drives every flow on
//! the page. User actions arrive as [`ProfileAction`] values; results go
//! to the [`ProfilePresenter`] and back to the caller as [`ActionOutcome`].

use lectern_client::{AvatarFile, IdentityApi};
use lectern_core::{EditRequest, IdentitySnapshot, ProfileField, ProfileView, SessionKey};
use lectern_session::{SessionStore, require_token};

use crate::account::{self, SessionStatus};
use crate::avatar;
use crate::error::{ProfileError, SoftError};
use crate::loader::{self, SnapshotSource};
use crate::menu::{IdentityIndicator, MenuState};
use crate::presenter::{Alert, ProfilePresenter};
use crate::render::{load_avatar, render};
use crate::submit::{pending_changes, submit_changes};
use crate::validate::validate;

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const AVATAR_UPDATED: &str = "Profile picture updated successfully!";

/// Everything the user can do on the profile page.
#[derive(Debug, Clone)]
pub enum ProfileAction {
    SubmitEdit(EditRequest),
    RequestLogout,
    SelectAvatarFile(AvatarFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The edit was applied. `updated` is empty when nothing changed.
    ProfileUpdated {
        view: ProfileView,
        updated: Vec<ProfileField>,
    },
    AvatarUpdated {
        view: ProfileView,
        asset_id: String,
    },
    /// The session is gone; show the login surface.
    RedirectToLogin,
}

/// Result of entering the profile page.
#[derive(Debug)]
pub struct Activation {
    pub view: ProfileView,
    pub snapshot: IdentitySnapshot,
    pub source: SnapshotSource,
    pub advisory: Option<SoftError>,
}

pub struct ProfileViewModel<S, A, P, I> {
    store: S,
    api: A,
    presenter: P,
    indicator: I,
    snapshot: Option<IdentitySnapshot>,
    edit_open: bool,
}

impl<S, A, P, I> ProfileViewModel<S, A, P, I>
where
    S: SessionStore,
    A: IdentityApi,
    P: ProfilePresenter,
    I: IdentityIndicator,
{
    pub const fn new(store: S, api: A, presenter: P, indicator: I) -> Self {
        Self {
            store,
            api,
            presenter,
            indicator,
            snapshot: None,
            edit_open: false,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn indicator(&self) -> &I {
        &self.indicator
    }

    pub const fn snapshot(&self) -> Option<&IdentitySnapshot> {
        self.snapshot.as_ref()
    }

    pub const fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    /// Enter the profile page: check the session, load and show the profile.
    ///
    /// # Errors
    ///
    /// [`ProfileError::NotAuthenticated`] when no token is stored; nothing
    /// else is attempted.
    pub async fn activate(&mut self) -> Result<Activation, ProfileError> {
        let token = require_token(&self.store)?;

        self.presenter.set_loading(true);
        let loaded = loader::load_profile(&self.store, &self.api, &token).await;
        if let Some(advisory) = &loaded.advisory {
            self.presenter.show_alert(&Alert::error(advisory.advisory()));
        }
        let view = self.display(&loaded.snapshot).await;
        self.presenter.set_loading(false);

        self.snapshot = Some(loaded.snapshot.clone());
        Ok(Activation {
            view,
            snapshot: loaded.snapshot,
            source: loaded.source,
            advisory: loaded.advisory,
        })
    }

    /// Run the core operation behind a user action.
    ///
    /// # Errors
    ///
    /// Any [`ProfileError`] from the underlying flow. Hard failures have
    /// already been shown to the presenter.
    pub async fn handle(&mut self, action: ProfileAction) -> Result<ActionOutcome, ProfileError> {
        match action {
            ProfileAction::SubmitEdit(request) => self.submit_edit(request).await,
            ProfileAction::SelectAvatarFile(file) => self.change_avatar(&file).await,
            ProfileAction::RequestLogout => self.logout(),
        }
    }

    /// Open the edit surface, prefilled from the current snapshot.
    pub fn open_edit(&mut self) -> EditRequest {
        let current = self.current();
        self.edit_open = true;
        self.presenter.set_edit_surface(true);
        EditRequest::new(&current.username, &current.email)
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.presenter.clear_field_errors();
        self.presenter.set_edit_surface(false);
    }

    /// Log in and prime the profile cache.
    ///
    /// # Errors
    ///
    /// [`ProfileError::Login`] if the credentials are rejected. Storage is
    /// untouched in that case.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Activation, ProfileError> {
        self.presenter.set_loading(true);
        let result = account::login(&self.store, &self.api, email, password).await;
        self.presenter.set_loading(false);
        if let Err(error) = result {
            return Err(self.fail(error));
        }

        let token = require_token(&self.store)?;
        let loaded = loader::load_profile(&self.store, &self.api, &token).await;
        self.refresh_menu();

        let view = render(&loaded.snapshot, &self.api);
        self.snapshot = Some(loaded.snapshot.clone());
        Ok(Activation {
            view,
            snapshot: loaded.snapshot,
            source: loaded.source,
            advisory: loaded.advisory,
        })
    }

    pub fn status(&self) -> SessionStatus {
        account::status(&self.store)
    }

    async fn submit_edit(&mut self, request: EditRequest) -> Result<ActionOutcome, ProfileError> {
        self.presenter.clear_field_errors();
        let validation = validate(&request);
        if !validation.is_valid() {
            self.presenter.show_field_errors(&validation.field_errors);
            return Err(ProfileError::Invalid(validation.field_errors));
        }

        let token = require_token(&self.store)?;
        let Some(user_id) = self.store.get_non_empty(SessionKey::UserId) else {
            return Err(self.fail(ProfileError::MissingUserId));
        };

        let mut snapshot = self.current();
        let changes = pending_changes(&snapshot, &request);
        if changes.is_empty() {
            tracing::debug!("edit has no changes");
            self.close_edit();
            let view = render(&snapshot, &self.api);
            return Ok(ActionOutcome::ProfileUpdated {
                view,
                updated: Vec::new(),
            });
        }

        self.presenter.set_loading(true);
        let report = submit_changes(&self.api, &token, &user_id, changes).await;
        self.presenter.set_loading(false);

        if !report.is_success() {
            return Err(self.fail(ProfileError::FieldUpdate {
                failures: report.failures,
            }));
        }

        for change in &report.committed {
            snapshot.commit(change.field, &change.value);
        }
        // The server already holds the new values.
        self.snapshot = Some(snapshot.clone());
        let persisted = self
            .store
            .set(SessionKey::Username, &snapshot.username)
            .and_then(|()| self.store.set(SessionKey::UserEmail, &snapshot.email));
        if let Err(error) = persisted {
            self.display(&snapshot).await;
            return Err(self.fail(error.into()));
        }

        let updated = report.committed.iter().map(|change| change.field).collect();
        let view = self.display(&snapshot).await;
        self.refresh_menu();
        self.close_edit();
        self.presenter.show_alert(&Alert::success(PROFILE_UPDATED));
        Ok(ActionOutcome::ProfileUpdated { view, updated })
    }

    async fn change_avatar(&mut self, file: &AvatarFile) -> Result<ActionOutcome, ProfileError> {
        let token = require_token(&self.store)?;
        let Some(user_id) = self.store.get_non_empty(SessionKey::UserId) else {
            return Err(self.fail(ProfileError::MissingUserId));
        };

        self.presenter.set_loading(true);
        let result = avatar::upload_and_link(&self.api, &token, &user_id, file).await;
        self.presenter.set_loading(false);
        let asset_id = result.map_err(|error| self.fail(error))?;

        let mut snapshot = self.current();
        snapshot.commit(ProfileField::ProfilePic, &asset_id);
        self.snapshot = Some(snapshot.clone());
        if let Err(error) = self.store.set(SessionKey::ProfilePicId, &asset_id) {
            self.display(&snapshot).await;
            return Err(self.fail(error.into()));
        }

        let view = self.display(&snapshot).await;
        self.refresh_menu();
        self.presenter.show_alert(&Alert::success(AVATAR_UPDATED));
        Ok(ActionOutcome::AvatarUpdated { view, asset_id })
    }

    fn logout(&mut self) -> Result<ActionOutcome, ProfileError> {
        account::logout(&self.store)?;
        self.snapshot = None;
        self.edit_open = false;
        self.refresh_menu();
        Ok(ActionOutcome::RedirectToLogin)
    }

    fn current(&self) -> IdentitySnapshot {
        self.snapshot
            .clone()
            .unwrap_or_else(|| loader::cached_snapshot(&self.store))
    }

    /// Render `snapshot`, resolve its avatar, and hand it to the presenter.
    async fn display(&self, snapshot: &IdentitySnapshot) -> ProfileView {
        let mut view = render(snapshot, &self.api);
        if let Some(asset_id) = &snapshot.avatar_asset_id {
            view.avatar = load_avatar(&self.api, asset_id).await;
        }
        self.presenter.show_profile(&view);
        view
    }

    fn refresh_menu(&self) {
        self.indicator.refresh(&MenuState::from_store(&self.store));
    }

    fn fail(&self, error: ProfileError) -> ProfileError {
        tracing::warn!(%error, "profile operation failed");
        self.presenter.show_alert(&Alert::error(error.to_string()));
        error
    }
}
