use anyhow::Context;
use lectern_config::LecternConfig;
use lectern_session::FileStore;

pub fn load_config() -> anyhow::Result<LecternConfig> {
    LecternConfig::load_with_dotenv().context("failed to load lectern configuration")
}

pub fn open_session(config: &LecternConfig) -> anyhow::Result<FileStore> {
    let path = config
        .session
        .resolve_path()
        .context("cannot locate a home directory for the session file; set LECTERN_SESSION__PATH")?;
    tracing::debug!(path = %path.display(), "using session file");
    Ok(FileStore::new(path))
}
