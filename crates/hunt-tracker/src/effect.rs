//! Effects — the side-effect requests the tracker hands to the presentation
//! layer.

use hunt_core::TargetIdx;

/// What the presentation layer should do with one marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerState {
    /// Make the marker visible and play the entrance animation.
    Show,
    /// Play the exit animation, then hide the marker.
    Hide,
    /// Hide immediately with no animation.
    Hidden,
    /// Play the discovery exit animation; the marker never returns.
    Found,
}

impl MarkerState {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerState::Show   => "show",
            MarkerState::Hide   => "hide",
            MarkerState::Hidden => "hidden",
            MarkerState::Found  => "found",
        }
    }
}

impl std::fmt::Display for MarkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request produced by [`ProximityTracker`][crate::ProximityTracker].
///
/// Effects are returned in the order they should be applied.  The tracker
/// never performs them itself; the session forwards them to its observer
/// and owns every timer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Change a marker's presentation state.
    SetMarker {
        target: TargetIdx,
        state:  MarkerState,
    },

    /// Call [`ProximityTracker::settle`][crate::ProximityTracker::settle]
    /// with `(target, generation)` after `after_ms` milliseconds.
    ScheduleSettle {
        target:     TargetIdx,
        generation: u32,
        after_ms:   u32,
    },

    /// A target was discovered.
    ReportFound(FoundReport),

    /// Positioning failed permanently; show the fallback marker.
    ReportGpsUnavailable,
}

/// Result of a successful [`on_found`][crate::ProximityTracker::on_found].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundReport {
    pub target:     TargetIdx,
    /// Distance from the last fix to the target at the moment of the tap.
    pub distance_m: f64,
    /// Targets still undiscovered after this one.
    pub remaining:  usize,
}

impl FoundReport {
    /// The effects that announce this discovery.
    pub fn effects(&self) -> Vec<Effect> {
        vec![
            Effect::SetMarker { target: self.target, state: MarkerState::Found },
            Effect::ReportFound(*self),
        ]
    }
}
