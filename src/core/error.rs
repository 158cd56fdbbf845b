use thiserror::Error;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("No battle in progress: call start_new_game first")]
    NotStarted,

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BattleError>;
