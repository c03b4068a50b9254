//! Scripted fakes for the profile view-model.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use lectern_client::{ApiError, AvatarFile, IdentityApi, LoginTokens, RemoteIdentity, UploadReceipt};
use lectern_core::{FieldErrors, ProfileField, ProfileView, SessionKey};
use lectern_profile::{Alert, IdentityIndicator, MenuState, ProfilePresenter};
use lectern_session::{MemoryStore, SessionError, SessionStore};

/// `{"sub":"u1","exp":1900000000}`, unsigned.
pub const JWT_U1: &str =
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJ1MSIsImV4cCI6MTkwMDAwMDAwMH0.c2ln";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch { user_id: String },
    Update { field: ProfileField, value: String },
    Upload { file_name: String },
    Asset { asset_id: String },
    Login { email: String },
}

fn rejected(operation: &'static str, status: u16) -> ApiError {
    ApiError::Status {
        operation,
        status,
        body: "rejected".into(),
    }
}

pub struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    /// `None` answers the read with 404.
    pub identity: Option<RemoteIdentity>,
    pub failing_fields: Vec<ProfileField>,
    pub upload_fails: bool,
    /// `None` returns a receipt without an asset id.
    pub upload_id: Option<String>,
    pub assets_available: bool,
    /// `None` rejects the login with 401.
    pub login_token: Option<String>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            identity: None,
            failing_fields: Vec::new(),
            upload_fails: false,
            upload_id: Some("pic-1".into()),
            assets_available: true,
            login_token: Some(JWT_U1.into()),
        }
    }
}

impl FakeApi {
    pub fn with_identity(identity: RemoteIdentity) -> Self {
        Self {
            identity: Some(identity),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<ProfileField> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update { field, .. } => Some(field),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl IdentityApi for FakeApi {
    async fn fetch_identity(&self, _token: &str, user_id: &str) -> Result<RemoteIdentity, ApiError> {
        self.record(Call::Fetch {
            user_id: user_id.into(),
        });
        self.identity
            .clone()
            .ok_or_else(|| rejected("fetch identity", 404))
    }

    async fn update_field(
        &self,
        _token: &str,
        _user_id: &str,
        field: ProfileField,
        value: &str,
    ) -> Result<(), ApiError> {
        self.record(Call::Update {
            field,
            value: value.into(),
        });
        if self.failing_fields.contains(&field) {
            Err(rejected("update field", 500))
        } else {
            Ok(())
        }
    }

    async fn upload_avatar(&self, _token: &str, file: &AvatarFile) -> Result<UploadReceipt, ApiError> {
        self.record(Call::Upload {
            file_name: file.file_name.clone(),
        });
        if self.upload_fails {
            return Err(rejected("upload avatar", 400));
        }
        Ok(UploadReceipt {
            asset_id: self.upload_id.clone(),
        })
    }

    async fn fetch_asset(&self, asset_id: &str) -> Result<usize, ApiError> {
        self.record(Call::Asset {
            asset_id: asset_id.into(),
        });
        if self.assets_available {
            Ok(64)
        } else {
            Err(rejected("fetch asset", 404))
        }
    }

    async fn login(&self, email: &str, _password: &str) -> Result<LoginTokens, ApiError> {
        self.record(Call::Login {
            email: email.into(),
        });
        let auth_token = self.login_token.clone().ok_or_else(|| rejected("login", 401))?;
        Ok(LoginTokens {
            auth_token,
            refresh_token: Some("refresh-1".into()),
        })
    }

    fn asset_url(&self, asset_id: &str) -> String {
        format!("http://assets.test/api/files/{asset_id}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Profile(ProfileView),
    FieldErrors(FieldErrors),
    ClearFieldErrors,
    Alert(Alert),
    Loading(bool),
    EditSurface(bool),
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub shown: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.shown()
            .into_iter()
            .filter_map(|shown| match shown {
                Shown::Alert(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    pub fn last_profile(&self) -> Option<ProfileView> {
        self.shown().into_iter().rev().find_map(|shown| match shown {
            Shown::Profile(view) => Some(view),
            _ => None,
        })
    }

    fn push(&self, shown: Shown) {
        self.shown.lock().unwrap().push(shown);
    }
}

impl ProfilePresenter for RecordingPresenter {
    fn show_profile(&self, view: &ProfileView) {
        self.push(Shown::Profile(view.clone()));
    }

    fn show_field_errors(&self, errors: &FieldErrors) {
        self.push(Shown::FieldErrors(errors.clone()));
    }

    fn clear_field_errors(&self) {
        self.push(Shown::ClearFieldErrors);
    }

    fn show_alert(&self, alert: &Alert) {
        self.push(Shown::Alert(alert.clone()));
    }

    fn set_loading(&self, loading: bool) {
        self.push(Shown::Loading(loading));
    }

    fn set_edit_surface(&self, open: bool) {
        self.push(Shown::EditSurface(open));
    }
}

#[derive(Default)]
pub struct RecordingIndicator {
    pub states: Mutex<Vec<MenuState>>,
}

impl RecordingIndicator {
    pub fn last(&self) -> Option<MenuState> {
        self.states.lock().unwrap().last().cloned()
    }
}

impl IdentityIndicator for RecordingIndicator {
    fn refresh(&self, state: &MenuState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

pub fn remote_alice() -> RemoteIdentity {
    RemoteIdentity {
        id: Some("u1".into()),
        username: "alice".into(),
        email: "a@b.co".into(),
        is_admin: false,
        profile_pic_id: None,
    }
}

/// A signed-in session for `alice` with cached identity.
pub fn signed_in_store() -> MemoryStore {
    MemoryStore::from_pairs([
        (SessionKey::AuthToken, "tok"),
        (SessionKey::UserId, "u1"),
        (SessionKey::Username, "alice"),
        (SessionKey::UserEmail, "a@b.co"),
        (SessionKey::IsAdmin, "false"),
    ])
}

/// A [`MemoryStore`] whose writes can be switched off.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub reject_writes: AtomicBool,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            reject_writes: AtomicBool::new(false),
        }
    }

    pub fn reject_writes(&self) {
        self.reject_writes.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), SessionError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            Err(SessionError::Store("disk full".into()))
        } else {
            Ok(())
        }
    }
}

impl SessionStore for FlakyStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.check()?;
        self.inner.remove(key)
    }
}
