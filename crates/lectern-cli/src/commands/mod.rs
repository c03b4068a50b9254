mod auth;
mod profile;

use lectern_client::ApiClient;
use lectern_config::LecternConfig;
use lectern_profile::{NoopIndicator, ProfileViewModel};
use lectern_session::FileStore;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};
use crate::presenter::TerminalPresenter;

pub type ViewModel = ProfileViewModel<FileStore, ApiClient, TerminalPresenter, NoopIndicator>;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    config: &LecternConfig,
) -> anyhow::Result<()> {
    let mut vm = view_model(flags, config)?;
    match command {
        Commands::Login(args) => auth::login(&mut vm, &args, flags).await,
        Commands::Logout => auth::logout(&mut vm, flags).await,
        Commands::Status => auth::status(&vm, flags),
        Commands::Profile { action } => profile::handle(&mut vm, action, flags).await,
    }
}

fn view_model(flags: &GlobalFlags, config: &LecternConfig) -> anyhow::Result<ViewModel> {
    let store = bootstrap::open_session(config)?;
    Ok(ProfileViewModel::new(
        store,
        ApiClient::new(&config.api),
        TerminalPresenter::new(flags),
        NoopIndicator,
    ))
}
