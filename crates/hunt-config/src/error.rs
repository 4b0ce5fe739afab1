use hunt_core::HuntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target list parse error: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("duplicate target id {0:?}")]
    DuplicateTarget(String),

    #[error(transparent)]
    Core(#[from] HuntError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
