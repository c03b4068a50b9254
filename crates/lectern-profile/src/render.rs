//! Projection of a snapshot onto the render model.

use lectern_client::IdentityApi;
use lectern_core::{AvatarView, Badge, BadgeStyle, IdentitySnapshot, ProfileView, Role};

/// Pure projection. An avatar, if any, is left [`AvatarView::Pending`].
pub fn render(snapshot: &IdentitySnapshot, api: &impl IdentityApi) -> ProfileView {
    let role = snapshot.role();
    ProfileView {
        display_name: snapshot.username.clone(),
        email: snapshot.email.clone(),
        badge: Badge {
            label: role.label(),
            style: match role {
                Role::Admin => BadgeStyle::Highlighted,
                Role::Student => BadgeStyle::Standard,
            },
        },
        avatar: snapshot
            .avatar_asset_id
            .as_deref()
            .map_or(AvatarView::DefaultIcon, |asset_id| AvatarView::Pending {
                url: api.asset_url(asset_id),
            }),
    }
}

/// Fetch the avatar image. Failure keeps the default icon.
pub async fn load_avatar(api: &impl IdentityApi, asset_id: &str) -> AvatarView {
    let url = api.asset_url(asset_id);
    match api.fetch_asset(asset_id).await {
        Ok(bytes) => AvatarView::Loaded { url, bytes },
        Err(error) => {
            tracing::debug!(%error, %url, "avatar unavailable; keeping default icon");
            AvatarView::DefaultIcon
        }
    }
}
