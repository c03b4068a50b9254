use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in with email and password.
    Login(LoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show local session state.
    Status,
    /// View or change your profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Load and show the profile.
    Show,
    /// Change username, email or password. Omitted fields keep their value.
    Edit(ProfileEditArgs),
    /// Upload a new profile picture.
    Avatar {
        /// Image file to upload.
        file: PathBuf,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct ProfileEditArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// New password (requires --confirm-password).
    #[arg(long, requires = "confirm_password")]
    pub password: Option<String>,
    #[arg(long, requires = "password")]
    pub confirm_password: Option<String>,
}
