//! The proximity engine: turns position fixes and taps into marker
//! transitions.

use hunt_config::{HuntConfig, Target, validate_targets};
use hunt_core::{Compass, GeoPoint, TargetIdx};

use crate::{
    Effect, FoundReport, Hint, MarkerState, Nearest, TrackerError, TrackerResult, TrackerStore,
    Visibility,
};

/// Positioning state of the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GpsStatus {
    /// No fix has arrived yet.
    #[default]
    Waiting,
    /// At least one fix has arrived.
    Enabled,
    /// The platform reported a permanent failure.  Terminal.
    Unavailable,
}

/// Owns the target list and all per-target state for one session.
///
/// Every mutation goes through [`on_fix`][Self::on_fix],
/// [`settle`][Self::settle], [`on_found`][Self::on_found] or
/// [`on_gps_unavailable`][Self::on_gps_unavailable].  Each call returns the
/// [`Effect`]s the presentation layer should apply, in order.
pub struct ProximityTracker {
    targets:       Vec<Target>,
    config:        HuntConfig,
    store:         TrackerStore,
    user_position: Option<GeoPoint>,
    gps:           GpsStatus,
}

impl ProximityTracker {
    /// Configure a tracker with a fixed target list.
    ///
    /// The target list and config are validated here; see
    /// [`validate_targets`] and [`HuntConfig::validate`].
    pub fn new(targets: Vec<Target>, config: HuntConfig) -> TrackerResult<Self> {
        validate_targets(&targets)?;
        config.validate()?;
        Ok(Self {
            store: TrackerStore::new(targets.len()),
            targets,
            config,
            user_position: None,
            gps: GpsStatus::Waiting,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn target(&self, idx: TargetIdx) -> &Target {
        &self.targets[idx.index()]
    }

    /// Resolve a target's string id.
    pub fn lookup(&self, id: &str) -> Option<TargetIdx> {
        self.targets
            .iter()
            .position(|t| t.id == id)
            .map(|i| TargetIdx(i as u16))
    }

    pub fn config(&self) -> &HuntConfig {
        &self.config
    }

    pub fn store(&self) -> &TrackerStore {
        &self.store
    }

    pub fn visibility(&self, idx: TargetIdx) -> Visibility {
        self.store.visibility(idx)
    }

    pub fn is_found(&self, idx: TargetIdx) -> bool {
        self.store.is_found(idx)
    }

    pub fn found_count(&self) -> usize {
        self.store.found_count()
    }

    pub fn remaining(&self) -> usize {
        self.store.remaining()
    }

    pub fn user_position(&self) -> Option<GeoPoint> {
        self.user_position
    }

    pub fn gps_status(&self) -> GpsStatus {
        self.gps
    }

    /// `true` once a fix has arrived and positioning has not since failed.
    pub fn gps_enabled(&self) -> bool {
        self.gps == GpsStatus::Enabled
    }

    /// `true` when `distance_m` counts as in range.  Strict: a target at
    /// exactly the threshold is out of range.
    #[inline]
    pub fn in_range(&self, distance_m: f64) -> bool {
        distance_m < self.config.threshold_m
    }

    /// Distance from the current fix to `idx`, if a fix exists.
    pub fn distance_to(&self, idx: TargetIdx) -> Option<f64> {
        self.user_position
            .map(|p| p.distance_m(self.targets[idx.index()].position))
    }

    /// The nearest undiscovered target relative to the current fix.
    ///
    /// Returns `None` before the first fix.  Ties go to the target listed
    /// first.  Pure query: no state changes.
    pub fn nearest(&self) -> Option<Hint> {
        let here = self.user_position?;

        let mut best: Option<(TargetIdx, f64)> = None;
        for idx in self.store.undiscovered() {
            let d = here.distance_m(self.targets[idx.index()].position);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((idx, d));
            }
        }

        let nearest = best.map(|(target, distance_m)| {
            let bearing_deg = here.bearing_deg(self.targets[target.index()].position);
            Nearest {
                target,
                distance_m,
                bearing_deg,
                compass: Compass::from_bearing(bearing_deg),
            }
        });

        Some(Hint {
            nearest,
            found_count: self.store.found_count(),
            total_count: self.targets.len(),
        })
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Process one position fix.
    ///
    /// Non-finite fixes are rejected before any state changes.  After
    /// [`on_gps_unavailable`][Self::on_gps_unavailable] every fix is
    /// rejected.  Re-running with an unchanged in-range picture yields no
    /// effects.
    pub fn on_fix(&mut self, position: GeoPoint) -> TrackerResult<Vec<Effect>> {
        if self.gps == GpsStatus::Unavailable {
            return Err(TrackerError::PositioningDisabled);
        }
        if !position.is_finite() {
            return Err(TrackerError::InvalidFix(position));
        }
        if self.gps == GpsStatus::Waiting {
            log::info!("first position fix at {position}");
            self.gps = GpsStatus::Enabled;
        }
        self.user_position = Some(position);

        let mut effects = Vec::new();
        for i in 0..self.targets.len() {
            let idx = TargetIdx(i as u16);
            if self.store.is_found(idx) {
                continue;
            }

            let distance = position.distance_m(self.targets[i].position);
            let shown = self.store.visibility(idx).is_requested_visible();

            match (shown, self.in_range(distance)) {
                (false, true) => {
                    let generation = self.store.transition(idx, Visibility::Appearing);
                    log::debug!("{} appearing at {distance:.1} m", self.targets[i].id);
                    effects.push(Effect::SetMarker { target: idx, state: MarkerState::Show });
                    effects.push(Effect::ScheduleSettle {
                        target: idx,
                        generation,
                        after_ms: self.config.entrance_ms,
                    });
                }
                (true, false) => {
                    let generation = self.store.transition(idx, Visibility::Disappearing);
                    log::debug!("{} disappearing at {distance:.1} m", self.targets[i].id);
                    effects.push(Effect::SetMarker { target: idx, state: MarkerState::Hide });
                    effects.push(Effect::ScheduleSettle {
                        target: idx,
                        generation,
                        after_ms: self.config.exit_ms,
                    });
                }
                _ => {}
            }
        }
        Ok(effects)
    }

    /// Complete the animation scheduled for `(target, generation)`.
    ///
    /// Appearing settles to Visible and Disappearing to Hidden.  Returns
    /// `false` when the request is stale: the target has transitioned again,
    /// been found, or is already at rest.
    pub fn settle(&mut self, target: TargetIdx, generation: u32) -> bool {
        if target.index() >= self.targets.len()
            || self.store.is_found(target)
            || self.store.generation(target) != generation
        {
            return false;
        }
        let current = self.store.visibility(target);
        if !current.is_transient() {
            return false;
        }
        self.store.visibility[target.index()] = current.settled();
        log::debug!("{} settled {}", self.targets[target.index()].id, current.settled());
        true
    }

    /// Record a tap on the target with string id `id`.
    ///
    /// Only a Visible, undiscovered target can be found; any other call is
    /// rejected and leaves state untouched.
    pub fn on_found(&mut self, id: &str) -> TrackerResult<FoundReport> {
        let target = self
            .lookup(id)
            .ok_or_else(|| TrackerError::UnknownTarget(id.to_string()))?;

        if self.store.is_found(target) {
            return Err(TrackerError::AlreadyFound(id.to_string()));
        }
        let state = self.store.visibility(target);
        if state != Visibility::Visible {
            return Err(TrackerError::NotVisible { id: id.to_string(), state });
        }

        let distance_m = self.distance_to(target).unwrap_or_default();
        self.store.mark_found(target);
        let remaining = self.store.remaining();
        log::info!("found {id} at {distance_m:.1} m, {remaining} remaining");

        Ok(FoundReport { target, distance_m, remaining })
    }

    /// Switch to degraded mode after a permanent positioning failure.
    ///
    /// Geofenced markers that are showing are hidden immediately and the
    /// failure is reported.  Only the first call has any effect.
    pub fn on_gps_unavailable(&mut self) -> Vec<Effect> {
        if self.gps == GpsStatus::Unavailable {
            return Vec::new();
        }
        log::warn!("positioning unavailable; switching to fallback marker");
        self.gps = GpsStatus::Unavailable;

        let mut effects = Vec::new();
        for i in 0..self.targets.len() {
            let idx = TargetIdx(i as u16);
            if !self.store.is_found(idx) && self.store.visibility(idx).is_requested_visible() {
                self.store.transition(idx, Visibility::Hidden);
                effects.push(Effect::SetMarker { target: idx, state: MarkerState::Hidden });
            }
        }
        effects.push(Effect::ReportGpsUnavailable);
        effects
    }
}
