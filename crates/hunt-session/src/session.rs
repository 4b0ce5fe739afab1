//! The `Session` struct and its event loop.

use hunt_core::{GeoPoint, HuntClock, TargetIdx, Tick};
use hunt_tracker::{Effect, FoundReport, Hint, MarkerState, ProximityTracker};

use crate::{
    EventSource, HuntEvent, HuntObserver, PositionError, SessionResult, TimedEvent, Timer,
    TimerQueue,
};

/// The single owner of a hunt's state.
///
/// `Session` serialises every inbound event onto the [`ProximityTracker`],
/// forwards the resulting effects to a [`HuntObserver`], and owns the
/// presentation timers:
///
/// 1. **Clock**: before an event is handled the clock advances to the
///    event's tick, firing every timer that falls due on the way, each at
///    its own tick.
/// 2. **Event**: fixes go to `on_fix`, taps to `on_found`, positioning
///    failures to `on_gps_unavailable`.
/// 3. **Effects**: marker changes and reports go to the observer; settle and
///    dismiss requests become timers.
/// 4. **Hint**: after fixes and discoveries the nearest-target hint is
///    recomputed and reported only if it changed.
///
/// All methods take `&mut self`, so there is never more than one mutation in
/// flight.  Hosts with multi-threaded callback delivery wrap the session in
/// a `Mutex` or drive it from a single task.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session {
    /// Proximity state machine.
    pub tracker: ProximityTracker,

    /// Session clock, advanced by events and [`advance_to`][Self::advance_to].
    pub clock: HuntClock,

    /// Pending settle and dismiss timers.
    pub timers: TimerQueue,

    /// Last hint handed to the observer, for change detection.
    pub(crate) last_hint: Option<Hint>,

    pub(crate) started: bool,
}

impl Session {
    // ── Public API ────────────────────────────────────────────────────────

    /// Announce the session to `observer`: every marker starts hidden.
    ///
    /// Called automatically by [`run`][Self::run]; calling it again is a
    /// no-op.
    pub fn start<O: HuntObserver>(&mut self, observer: &mut O) {
        if self.started {
            return;
        }
        self.started = true;
        log::info!("hunt started with {} targets", self.tracker.targets().len());
        observer.on_session_start(self.tracker.targets());
        for target in self.tracker.targets() {
            observer.set_marker_state(target, MarkerState::Hidden);
        }
    }

    /// Drive the session from `source` until it is exhausted.
    ///
    /// Starts the source, handles every event in order, fires the timers
    /// still pending after the last event, then stops the source.  Events
    /// the tracker rejects are logged and skipped.
    pub fn run<S: EventSource, O: HuntObserver>(
        &mut self,
        source:   &mut S,
        observer: &mut O,
    ) -> SessionResult<()> {
        self.drive(source, None, observer)
    }

    /// Like [`run`][Self::run] but stops the source before the first event
    /// later than `deadline`.  Timers due by `deadline` still fire; later
    /// ones stay pending.
    pub fn run_until<S: EventSource, O: HuntObserver>(
        &mut self,
        source:   &mut S,
        deadline: Tick,
        observer: &mut O,
    ) -> SessionResult<()> {
        self.drive(source, Some(deadline), observer)
    }

    /// Handle one event: advance the clock, then dispatch.
    pub fn handle<O: HuntObserver>(
        &mut self,
        event:    TimedEvent,
        observer: &mut O,
    ) -> SessionResult<()> {
        self.advance_to(event.at, observer);
        match event.event {
            HuntEvent::Fix(position) => self.fix(position, observer),
            HuntEvent::Tap(id) => self.tap(&id, observer).map(|_| ()),
            HuntEvent::PositionError(error) => {
                self.position_error(error, observer);
                Ok(())
            }
        }
    }

    /// Advance the clock to `at`, firing due timers in tick order.
    pub fn advance_to<O: HuntObserver>(&mut self, at: Tick, observer: &mut O) {
        while let Some((tick, timers)) = self.timers.pop_due(at) {
            self.clock.advance_to(tick);
            for timer in timers {
                self.fire(timer, observer);
            }
        }
        self.clock.advance_to(at);
    }

    /// Apply a position fix at the current tick.
    pub fn fix<O: HuntObserver>(
        &mut self,
        position: GeoPoint,
        observer: &mut O,
    ) -> SessionResult<()> {
        let effects = self.tracker.on_fix(position)?;
        self.apply(effects, observer);
        self.publish_hint(observer);
        Ok(())
    }

    /// Apply a tap on the target with id `target_id` at the current tick.
    pub fn tap<O: HuntObserver>(
        &mut self,
        target_id: &str,
        observer:  &mut O,
    ) -> SessionResult<FoundReport> {
        let report = self.tracker.on_found(target_id)?;
        self.apply(report.effects(), observer);
        self.publish_hint(observer);
        Ok(report)
    }

    /// Handle a positioning failure reported by the platform.
    ///
    /// Permanent failures, and a timeout before any fix has arrived, switch
    /// the tracker to degraded mode.  A timeout once fixes are flowing is
    /// transient and only logged.
    pub fn position_error<O: HuntObserver>(&mut self, error: PositionError, observer: &mut O) {
        if !error.is_permanent() && self.tracker.gps_enabled() {
            log::warn!("transient positioning error: {error}");
            return;
        }
        log::warn!("positioning failed: {error}");
        let effects = self.tracker.on_gps_unavailable();
        self.apply(effects, observer);
    }

    /// Current tick.
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn drive<S, O>(
        &mut self,
        source:   &mut S,
        deadline: Option<Tick>,
        observer: &mut O,
    ) -> SessionResult<()>
    where
        S: EventSource,
        O: HuntObserver,
    {
        source.start()?;
        self.start(observer);

        while let Some(at) = source.peek_tick() {
            if deadline.is_some_and(|d| at > d) {
                break;
            }
            let Some(event) = source.next_event() else { break };
            if let Err(e) = self.handle(event, observer) {
                if e.is_rejection() {
                    log::warn!("{e}");
                    continue;
                }
                source.stop();
                return Err(e);
            }
        }

        source.stop();
        match deadline {
            Some(d) => self.advance_to(d, observer),
            None => {
                if let Some(last) = self.timers.last_tick() {
                    self.advance_to(last, observer);
                }
            }
        }
        observer.on_session_end(self.clock.now());
        Ok(())
    }

    fn apply<O: HuntObserver>(&mut self, effects: Vec<Effect>, observer: &mut O) {
        let now = self.clock.now();
        for effect in effects {
            match effect {
                Effect::SetMarker { target, state } => {
                    observer.set_marker_state(self.tracker.target(target), state);
                }
                Effect::ScheduleSettle { target, generation, after_ms } => {
                    self.timers.push(now.offset(after_ms as u64), Timer::Settle { target, generation });
                }
                Effect::ReportFound(report) => {
                    observer.report_found(self.tracker.target(report.target), &report);
                    let dismiss_at = now.offset(self.tracker.config().notification_ms as u64);
                    self.timers.push(dismiss_at, Timer::DismissFound(report.target));
                }
                Effect::ReportGpsUnavailable => observer.report_gps_unavailable(),
            }
        }
    }

    fn fire<O: HuntObserver>(&mut self, timer: Timer, observer: &mut O) {
        match timer {
            Timer::Settle { target, generation } => {
                self.tracker.settle(target, generation);
            }
            Timer::DismissFound(target) => {
                observer.dismiss_found(self.tracker.target(target));
            }
        }
    }

    fn publish_hint<O: HuntObserver>(&mut self, observer: &mut O) {
        let Some(hint) = self.tracker.nearest() else { return };
        if self.last_hint == Some(hint) {
            return;
        }
        let nearest = hint.nearest.map(|n| self.tracker.target(n.target));
        observer.report_nearest(&hint, nearest);
        self.last_hint = Some(hint);
    }

    /// Target index for `id`, if configured.
    pub fn lookup(&self, id: &str) -> Option<TargetIdx> {
        self.tracker.lookup(id)
    }
}
