use hunt_config::ConfigError;
use hunt_core::GeoPoint;
use thiserror::Error;

use crate::Visibility;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("no target with id {0:?}")]
    UnknownTarget(String),

    #[error("target {id:?} cannot be found while {state}")]
    NotVisible {
        id:    String,
        state: Visibility,
    },

    #[error("target {0:?} was already found")]
    AlreadyFound(String),

    #[error("rejected fix with non-finite coordinates {0}")]
    InvalidFix(GeoPoint),

    #[error("positioning is unavailable for this session")]
    PositioningDisabled,

    #[error("tracker configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
