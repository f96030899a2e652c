#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("cloud name cannot be empty")]
    EmptyCloudName,
    #[error("upload preset cannot be empty")]
    EmptyUploadPreset,
    #[error("at least one upload source is required")]
    NoSources,
    #[error("unknown upload source '{0}'")]
    UnknownSource(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("upload widget factory unavailable")]
    FactoryUnavailable,
    #[error("upload widget creation failed: {0}")]
    Create(String),
    #[error("upload widget failed to open: {0}")]
    Open(String),
    #[error("no upload widget attached")]
    NotAttached,
    #[error("invalid upload widget config: {0}")]
    Config(#[from] ConfigError),
}
