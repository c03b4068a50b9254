use std::path::Path;

use lectern_client::AvatarFile;
use lectern_core::{ProfileField, ProfileView};
use lectern_profile::{ActionOutcome, ProfileAction, SnapshotSource};
use serde::Serialize;

use super::ViewModel;
use crate::cli::{GlobalFlags, ProfileCommands, ProfileEditArgs};
use crate::output::output;

#[derive(Serialize)]
struct ProfileResponse {
    user_id: Option<String>,
    #[serde(flatten)]
    view: ProfileView,
    source: SnapshotSource,
    notice: Option<&'static str>,
}

#[derive(Serialize)]
struct EditResponse {
    updated: Vec<ProfileField>,
    profile: ProfileView,
}

#[derive(Serialize)]
struct AvatarResponse {
    asset_id: String,
    profile: ProfileView,
}

/// Handle `lct profile <subcommand>`.
pub async fn handle(
    vm: &mut ViewModel,
    action: ProfileCommands,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => show(vm, flags).await,
        ProfileCommands::Edit(args) => edit(vm, args, flags).await,
        ProfileCommands::Avatar { file } => avatar(vm, &file, flags).await,
    }
}

async fn show(vm: &mut ViewModel, flags: &GlobalFlags) -> anyhow::Result<()> {
    let activation = vm.activate().await?;
    let notice = activation.advisory.as_ref().map(|advisory| {
        tracing::warn!(%advisory, "showing cached profile");
        advisory.advisory()
    });
    output(
        &ProfileResponse {
            user_id: activation.snapshot.id,
            view: activation.view,
            source: activation.source,
            notice,
        },
        flags.format,
    )
}

async fn edit(vm: &mut ViewModel, args: ProfileEditArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    vm.activate().await?;

    let mut request = vm.open_edit();
    if let Some(username) = args.username {
        request.username = username.trim().to_string();
    }
    if let Some(email) = args.email {
        request.email = email.trim().to_string();
    }
    if let Some(password) = args.password {
        request = request.with_password(password, args.confirm_password.unwrap_or_default());
    }

    match vm.handle(ProfileAction::SubmitEdit(request)).await? {
        ActionOutcome::ProfileUpdated { view, updated } => output(
            &EditResponse {
                updated,
                profile: view,
            },
            flags.format,
        ),
        other => anyhow::bail!("unexpected outcome for profile edit: {other:?}"),
    }
}

async fn avatar(vm: &mut ViewModel, file: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    vm.activate().await?;
    let file = AvatarFile::read(file).await?;

    match vm.handle(ProfileAction::SelectAvatarFile(file)).await? {
        ActionOutcome::AvatarUpdated { view, asset_id } => output(
            &AvatarResponse {
                asset_id,
                profile: view,
            },
            flags.format,
        ),
        other => anyhow::bail!("unexpected outcome for profile avatar: {other:?}"),
    }
}
