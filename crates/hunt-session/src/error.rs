use hunt_config::ConfigError;
use hunt_tracker::TrackerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("tracker rejected event: {0}")]
    Tracker(#[from] TrackerError),

    #[error("position source error: {0}")]
    Source(String),
}

impl SessionError {
    /// `true` for errors that reject a single event and leave the session
    /// usable.
    pub fn is_rejection(&self) -> bool {
        match self {
            SessionError::Tracker(TrackerError::Config(_)) => false,
            SessionError::Tracker(_) => true,
            SessionError::Config(_) | SessionError::Source(_) => false,
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
