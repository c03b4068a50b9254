//! Render model for the profile page.
//!
//! The view-model computes a [`ProfileView`]; presentation layers map it onto
//! their widgets without further logic.

use serde::Serialize;

/// Everything a presentation layer needs to draw the identity panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub display_name: String,
    pub email: String,
    pub badge: Badge,
    pub avatar: AvatarView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub style: BadgeStyle,
}

/// Visual treatment of the role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Standard,
    Highlighted,
}

/// Avatar slot state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AvatarView {
    /// No avatar, or the image could not be fetched.
    DefaultIcon,
    /// An avatar exists at `url`; not yet fetched.
    Pending { url: String },
    /// The image at `url` was fetched successfully.
    Loaded { url: String, bytes: usize },
}

impl AvatarView {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::DefaultIcon => None,
            Self::Pending { url } | Self::Loaded { url, .. } => Some(url),
        }
    }
}
