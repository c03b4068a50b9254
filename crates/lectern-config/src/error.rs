use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or environment variable could not be parsed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("api.base_url is empty; set it in config.toml or LECTERN_API__BASE_URL")]
    MissingBaseUrl,

    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
