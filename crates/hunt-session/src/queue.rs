//! `TimerQueue` — presentation timers keyed by the tick they fire at.
//!
//! The tracker never schedules anything itself.  It returns
//! `Effect::ScheduleSettle` with a duration, and the session converts that
//! (plus the found-notification dismissal) into an absolute tick here.  The
//! session drains due timers whenever its clock moves, so a fake clock in
//! tests fires them exactly.
//!
//! `BTreeMap` keeps due timers in tick order; timers sharing a tick fire in
//! insertion order.

use std::collections::BTreeMap;

use hunt_core::{TargetIdx, Tick};

/// Something the session must do at a later tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Timer {
    /// Finish the animation started by the transition with this generation.
    Settle { target: TargetIdx, generation: u32 },
    /// Hide the found notification for `target`.
    DismissFound(TargetIdx),
}

/// Pending timers, earliest first.
#[derive(Default)]
pub struct TimerQueue {
    inner: BTreeMap<Tick, Vec<Timer>>,
    /// Cached total timer count for O(1) `len()`.
    total: usize,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `timer` to fire at `tick`.
    pub fn push(&mut self, tick: Tick, timer: Timer) {
        self.inner.entry(tick).or_default().push(timer);
        self.total += 1;
    }

    /// Remove and return the earliest batch of timers due at or before `now`.
    ///
    /// Returns `None` when nothing is due.  Callers loop until `None` so that
    /// each batch is handled at its own tick.
    pub fn pop_due(&mut self, now: Tick) -> Option<(Tick, Vec<Timer>)> {
        let tick = *self.inner.keys().next()?;
        if tick > now {
            return None;
        }
        let timers = self.inner.remove(&tick)?;
        self.total -= timers.len();
        Some((tick, timers))
    }

    /// The earliest tick with at least one pending timer.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// The latest tick with a pending timer.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    /// Total number of pending timers.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
