//! # lectern-client
//!
//! Typed access to the Lectern backend.
//!
//! [`IdentityApi`] is the seam the profile view-model talks through;
//! [`ApiClient`] implements it over `reqwest`:
//! - `GET  /api/users/{id}`: identity read
//! - `PUT  /api/users?id=..&target_field=..`: single-field update
//! - `POST /api/upload?location=..`: multipart file upload
//! - `POST /api/login`: credential exchange
//! - asset retrieval at the configured `asset_path`

pub mod client;
pub mod error;
pub mod identity;
pub mod token;
pub mod upload;

use std::future::Future;

use lectern_core::ProfileField;

pub use client::ApiClient;
pub use error::ApiError;
pub use identity::RemoteIdentity;
pub use token::LoginTokens;
pub use upload::{AvatarFile, UploadReceipt};

/// Remote operations used by the profile view-model.
///
/// Every call resolves exactly once; there are no retries and no
/// cancellation.
pub trait IdentityApi: Send + Sync {
    /// Read the identity record for `user_id`.
    fn fetch_identity(
        &self,
        token: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<RemoteIdentity, ApiError>> + Send;

    /// Update a single profile field.
    fn update_field(
        &self,
        token: &str,
        user_id: &str,
        field: ProfileField,
        value: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Upload an avatar image under the configured destination category.
    fn upload_avatar(
        &self,
        token: &str,
        file: &AvatarFile,
    ) -> impl Future<Output = Result<UploadReceipt, ApiError>> + Send;

    /// Fetch an asset and return its size in bytes.
    fn fetch_asset(&self, asset_id: &str) -> impl Future<Output = Result<usize, ApiError>> + Send;

    /// Exchange credentials for tokens.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginTokens, ApiError>> + Send;

    /// Deterministic URL of an uploaded asset.
    fn asset_url(&self, asset_id: &str) -> String;
}
