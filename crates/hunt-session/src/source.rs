//! Inbound events and the position-watch abstraction.

use std::collections::VecDeque;

use hunt_core::{FixRng, GeoPoint, Tick};

use crate::{SessionError, SessionResult};

/// Why the platform could not deliver a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionError {
    /// The user refused location access.
    PermissionDenied,
    /// The device or browser has no positioning capability.
    Unsupported,
    /// No fix arrived within the platform's timeout.
    Timeout,
}

impl PositionError {
    /// Permission and capability failures never recover within a session.
    pub fn is_permanent(self) -> bool {
        !matches!(self, PositionError::Timeout)
    }
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PositionError::PermissionDenied => "permission denied",
            PositionError::Unsupported      => "positioning unsupported",
            PositionError::Timeout          => "position timeout",
        })
    }
}

/// One inbound event for the session.
#[derive(Clone, Debug, PartialEq)]
pub enum HuntEvent {
    /// A position fix (initial or from the watch).
    Fix(GeoPoint),
    /// The platform reported a positioning failure.
    PositionError(PositionError),
    /// The user tapped the marker of the target with this id.
    Tap(String),
}

/// An event stamped with the tick it occurred at.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedEvent {
    pub at:    Tick,
    pub event: HuntEvent,
}

/// A controllable stream of inbound events (the platform's position watch
/// plus user taps).
///
/// A source yields nothing until [`start`][Self::start] is called and
/// nothing after [`stop`][Self::stop].  Events must come out in
/// non-decreasing tick order.
pub trait EventSource {
    /// Begin delivering events.
    fn start(&mut self) -> SessionResult<()>;

    /// Stop delivering events.  Idempotent.
    fn stop(&mut self);

    fn is_active(&self) -> bool;

    /// Tick of the next event without consuming it.
    fn peek_tick(&self) -> Option<Tick>;

    /// Consume the next event, or `None` when exhausted or stopped.
    fn next_event(&mut self) -> Option<TimedEvent>;
}

// ── ScriptedFeed ──────────────────────────────────────────────────────────────

/// An [`EventSource`] that replays a fixed script.
///
/// Used by tests and the demo in place of a platform location API.  With
/// [`with_jitter`][Self::with_jitter] every fix is displaced by a seeded
/// random offset to imitate GPS wander.
pub struct ScriptedFeed {
    events: VecDeque<TimedEvent>,
    active: bool,
    jitter: Option<(FixRng, f64)>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
            active: false,
            jitter: None,
        }
    }

    /// Build a feed from pre-made events.  They are sorted by tick; events
    /// sharing a tick keep their relative order.
    pub fn from_events(mut events: Vec<TimedEvent>) -> Self {
        events.sort_by_key(|e| e.at);
        Self {
            events: events.into(),
            ..Self::new()
        }
    }

    /// Displace every fix by up to `radius_m` metres using `rng`.
    pub fn with_jitter(mut self, rng: FixRng, radius_m: f64) -> Self {
        self.jitter = Some((rng, radius_m));
        self
    }

    fn push(&mut self, event: TimedEvent) {
        // Keep the queue ordered even if the script is written out of order.
        let pos = self.events.partition_point(|e| e.at <= event.at);
        self.events.insert(pos, event);
    }

    pub fn fix_at(mut self, at: Tick, position: GeoPoint) -> Self {
        self.push(TimedEvent { at, event: HuntEvent::Fix(position) });
        self
    }

    pub fn tap_at(mut self, at: Tick, target_id: impl Into<String>) -> Self {
        self.push(TimedEvent { at, event: HuntEvent::Tap(target_id.into()) });
        self
    }

    pub fn error_at(mut self, at: Tick, error: PositionError) -> Self {
        self.push(TimedEvent { at, event: HuntEvent::PositionError(error) });
        self
    }

    /// Append `steps` fixes walking in a straight line from `from` to `to`,
    /// one every `interval_ms` starting at `start`.  The last fix lands on
    /// `to`.
    pub fn walk(
        mut self,
        from:        GeoPoint,
        to:          GeoPoint,
        steps:       u32,
        start:       Tick,
        interval_ms: u64,
    ) -> Self {
        let bearing = from.bearing_deg(to);
        let total = from.distance_m(to);
        for step in 1..=steps {
            let fraction = step as f64 / steps as f64;
            let position = if step == steps {
                to
            } else {
                from.destination(bearing, total * fraction)
            };
            let at = start.offset(interval_ms * (step as u64 - 1));
            self.push(TimedEvent { at, event: HuntEvent::Fix(position) });
        }
        self
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Default for ScriptedFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for ScriptedFeed {
    fn start(&mut self) -> SessionResult<()> {
        if self.active {
            return Err(SessionError::Source("feed already started".into()));
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn peek_tick(&self) -> Option<Tick> {
        if !self.active {
            return None;
        }
        self.events.front().map(|e| e.at)
    }

    fn next_event(&mut self) -> Option<TimedEvent> {
        if !self.active {
            return None;
        }
        let mut event = self.events.pop_front()?;
        if let (HuntEvent::Fix(position), Some((rng, radius))) = (&mut event.event, &mut self.jitter) {
            *position = rng.jitter(*position, *radius);
        }
        Some(event)
    }
}
