//! `Recorder` — keeps every outbound call for later inspection.

use hunt_config::Target;
use hunt_core::Tick;
use hunt_session::HuntObserver;
use hunt_tracker::{FoundReport, Hint, MarkerState};

/// One observer call, with targets reduced to their ids.
#[derive(Clone, Debug, PartialEq)]
pub enum OutboundCall {
    SessionStart { targets: usize },
    Marker { target: String, state: MarkerState },
    Nearest { hint: Hint, target: Option<String> },
    Found { target: String, report: FoundReport },
    DismissFound { target: String },
    GpsUnavailable,
    SessionEnd { at: Tick },
}

/// A [`HuntObserver`] that records calls in order.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<OutboundCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker changes for `target_id`, oldest first.
    pub fn marker_states(&self, target_id: &str) -> Vec<MarkerState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OutboundCall::Marker { target, state } if target == target_id => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// The most recent hint, if any was reported.
    pub fn last_hint(&self) -> Option<&Hint> {
        self.calls.iter().rev().find_map(|c| match c {
            OutboundCall::Nearest { hint, .. } => Some(hint),
            _ => None,
        })
    }

    /// Ids of discovered targets, in discovery order.
    pub fn found(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OutboundCall::Found { target, .. } => Some(target.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl HuntObserver for Recorder {
    fn on_session_start(&mut self, targets: &[Target]) {
        self.calls.push(OutboundCall::SessionStart { targets: targets.len() });
    }

    fn set_marker_state(&mut self, target: &Target, state: MarkerState) {
        self.calls.push(OutboundCall::Marker { target: target.id.clone(), state });
    }

    fn report_nearest(&mut self, hint: &Hint, nearest: Option<&Target>) {
        self.calls.push(OutboundCall::Nearest {
            hint:   *hint,
            target: nearest.map(|t| t.id.clone()),
        });
    }

    fn report_found(&mut self, target: &Target, report: &FoundReport) {
        self.calls.push(OutboundCall::Found { target: target.id.clone(), report: *report });
    }

    fn dismiss_found(&mut self, target: &Target) {
        self.calls.push(OutboundCall::DismissFound { target: target.id.clone() });
    }

    fn report_gps_unavailable(&mut self) {
        self.calls.push(OutboundCall::GpsUnavailable);
    }

    fn on_session_end(&mut self, at: Tick) {
        self.calls.push(OutboundCall::SessionEnd { at });
    }
}
