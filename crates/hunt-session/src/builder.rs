//! Fluent builder for constructing a [`Session`].

use hunt_config::{HuntConfig, Target};
use hunt_core::{HuntClock, Tick};
use hunt_tracker::{ProximityTracker, TrackerError};

use crate::{Session, SessionError, SessionResult, TimerQueue};

/// Fluent builder for [`Session`].
///
/// # Required inputs
///
/// - the target list (from code or [`hunt_config::load_targets_csv`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                  |
/// |----------------|--------------------------|
/// | `.config(c)`   | `HuntConfig::default()`  |
/// | `.start_at(t)` | `Tick::ZERO`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(targets)
///     .config(HuntConfig::with_threshold(5.0))
///     .build()?;
/// session.run(&mut feed, &mut NoopObserver)?;
/// ```
pub struct SessionBuilder {
    targets:  Vec<Target>,
    config:   Option<HuntConfig>,
    start_at: Tick,
}

impl SessionBuilder {
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            targets,
            config:   None,
            start_at: Tick::ZERO,
        }
    }

    /// Override the threshold and presentation timings.
    pub fn config(mut self, config: HuntConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start the session clock at `tick` instead of zero.
    ///
    /// Useful when replaying a recorded feed whose timestamps do not begin
    /// at zero.
    pub fn start_at(mut self, tick: Tick) -> Self {
        self.start_at = tick;
        self
    }

    /// Validate inputs and return a ready-to-run [`Session`].
    pub fn build(self) -> SessionResult<Session> {
        let config = self.config.unwrap_or_default();
        let tracker = ProximityTracker::new(self.targets, config).map_err(|e| match e {
            TrackerError::Config(e) => SessionError::Config(e),
            other => SessionError::Tracker(other),
        })?;

        let mut clock = HuntClock::new();
        clock.advance_to(self.start_at);

        Ok(Session {
            tracker,
            clock,
            timers:    TimerQueue::new(),
            last_hint: None,
            started:   false,
        })
    }
}
