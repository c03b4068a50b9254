use anyhow::Context;
use lectern_profile::{ActionOutcome, ProfileAction, SnapshotSource};
use serde::Serialize;

use super::ViewModel;
use crate::cli::{GlobalFlags, LoginArgs};
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    user_id: Option<String>,
    username: String,
    email: String,
    profile_source: SnapshotSource,
}

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
}

pub async fn login(vm: &mut ViewModel, args: &LoginArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let activation = vm.login(&args.email, &args.password).await?;
    if let Some(advisory) = &activation.advisory {
        tracing::warn!(%advisory, "logged in, but the profile could not be loaded");
    }
    let snapshot = activation.snapshot;
    output(
        &LoginResponse {
            authenticated: true,
            user_id: snapshot.id,
            username: snapshot.username,
            email: snapshot.email,
            profile_source: activation.source,
        },
        flags.format,
    )
}

pub async fn logout(vm: &mut ViewModel, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = vm
        .handle(ProfileAction::RequestLogout)
        .await
        .context("failed to clear session")?;
    output(
        &LogoutResponse {
            cleared: outcome == ActionOutcome::RedirectToLogin,
        },
        flags.format,
    )
}

pub fn status(vm: &ViewModel, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&vm.status(), flags.format)
}
