//! # lectern-core
//!
//! Core types shared across all Lectern crates.
//!
//! This crate provides the foundational types for the profile client:
//! - The identity snapshot and its placeholder rules
//! - Edit requests, updatable profile fields, and inline field errors
//! - The closed set of session-store keys
//! - The render model handed to presentation layers
//! - Cross-cutting error types

pub mod edit;
pub mod errors;
pub mod identity;
pub mod keys;
pub mod view;

pub use edit::{EditRequest, FieldErrors, FormField, ProfileField};
pub use errors::CoreError;
pub use identity::{IdentitySnapshot, PLACEHOLDER_EMAIL, PLACEHOLDER_USERNAME, Role};
pub use keys::SessionKey;
pub use view::{AvatarView, Badge, BadgeStyle, ProfileView};
