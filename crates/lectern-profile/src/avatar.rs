//! Avatar replacement: upload the image, then point the user record at it.

use lectern_client::{AvatarFile, IdentityApi};
use lectern_core::ProfileField;

use crate::error::ProfileError;

/// Upload `file` and link it to `user_id`. Returns the new asset id.
///
/// # Errors
///
/// - [`ProfileError::Upload`] if the upload is rejected
/// - [`ProfileError::UploadNotLinked`] if the upload returns no asset id
/// - [`ProfileError::AvatarLink`] if the user record cannot be updated
pub async fn upload_and_link(
    api: &impl IdentityApi,
    token: &str,
    user_id: &str,
    file: &AvatarFile,
) -> Result<String, ProfileError> {
    let receipt = api
        .upload_avatar(token, file)
        .await
        .map_err(ProfileError::Upload)?;
    let asset_id = receipt.asset_id.ok_or(ProfileError::UploadNotLinked)?;
    tracing::debug!(%asset_id, file = %file.file_name, "avatar uploaded");

    api.update_field(token, user_id, ProfileField::ProfilePic, &asset_id)
        .await
        .map_err(ProfileError::AvatarLink)?;
    Ok(asset_id)
}
