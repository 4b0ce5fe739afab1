//! Presentation observer trait — the outbound side of the engine.

use hunt_config::Target;
use hunt_core::Tick;
use hunt_tracker::{FoundReport, Hint, MarkerState};

/// Callbacks invoked by [`Session`][crate::Session] whenever the
/// presentation layer has something to do.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The observer never sees tracker
/// internals; every call carries the resolved [`Target`].
///
/// # Example — hint printer
///
/// ```rust,ignore
/// struct HintPrinter;
///
/// impl HuntObserver for HintPrinter {
///     fn report_nearest(&mut self, hint: &Hint, nearest: Option<&Target>) {
///         if let (Some(n), Some(t)) = (hint.nearest, nearest) {
///             println!("{} is {:.0} m {}", t.id, n.distance_m, n.compass);
///         }
///     }
/// }
/// ```
pub trait HuntObserver {
    /// Called once when the session starts, before any event.
    fn on_session_start(&mut self, _targets: &[Target]) {}

    /// Change the marker for `target` (show, hide, hide instantly, found).
    fn set_marker_state(&mut self, _target: &Target, _state: MarkerState) {}

    /// The hint panel changed.  `nearest` is the target named by
    /// `hint.nearest`, or `None` when the hunt is complete.
    fn report_nearest(&mut self, _hint: &Hint, _nearest: Option<&Target>) {}

    /// A target was discovered; show the success notification.
    fn report_found(&mut self, _target: &Target, _report: &FoundReport) {}

    /// The found notification for `target` has been on screen long enough.
    fn dismiss_found(&mut self, _target: &Target) {}

    /// Positioning failed for good; show the fallback marker.
    fn report_gps_unavailable(&mut self) {}

    /// Called once after the event source is exhausted or stopped.
    fn on_session_end(&mut self, _at: Tick) {}
}

/// A [`HuntObserver`] that does nothing.
pub struct NoopObserver;

impl HuntObserver for NoopObserver {}
