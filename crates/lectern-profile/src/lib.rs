//! # lectern-profile
//!
//! The profile page of the Lectern client, independent of any UI toolkit.
//!
//! - [`loader`] merges the session cache with the remote identity record
//! - [`mod@render`] projects a snapshot onto a [`lectern_core::ProfileView`]
//! - [`mod@validate`] checks the edit form locally
//! - [`submit`] sends per-field updates in a fixed order
//! - [`avatar`] uploads and links a new profile picture
//! - [`account`] handles login, logout and session status
//! - [`view_model`] ties it together behind [`ProfileAction`]

pub mod account;
pub mod avatar;
pub mod error;
pub mod loader;
pub mod menu;
pub mod presenter;
pub mod render;
pub mod submit;
pub mod validate;
pub mod view_model;

pub use account::SessionStatus;
pub use error::{FieldFailure, ProfileError, SoftError};
pub use loader::{LoadedProfile, SnapshotSource, load_profile};
pub use menu::{IdentityIndicator, MenuState, NoopIndicator};
pub use presenter::{Alert, AlertKind, ProfilePresenter};
pub use validate::{Validation, validate};
pub use view_model::{ActionOutcome, Activation, ProfileAction, ProfileViewModel};
