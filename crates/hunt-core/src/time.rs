//! Session time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counting milliseconds since the
//! session started.  Nothing in the engine reads the wall clock: the session
//! owns a `HuntClock` and moves it forward as events arrive, so animation
//! settles and notification timeouts are exact and replayable in tests.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Milliseconds since session start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Tick {
        Tick(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn from_secs(secs: u64) -> Tick {
        Tick(secs * 1_000)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0 / 1_000, self.0 % 1_000)
    }
}

// ── HuntClock ─────────────────────────────────────────────────────────────────

/// Manually advanced session clock.
///
/// The clock never moves backwards: advancing to an earlier tick is a no-op,
/// which lets position sources with slightly out-of-order timestamps feed the
/// session without corrupting timer ordering.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntClock {
    current: Tick,
}

impl HuntClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.current
    }

    /// Move to `tick` if it is later than the current tick.
    ///
    /// Returns the (possibly unchanged) current tick.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) -> Tick {
        if tick > self.current {
            self.current = tick;
        }
        self.current
    }

    /// Move forward by `ms` milliseconds.
    #[inline]
    pub fn advance_by(&mut self, ms: u64) -> Tick {
        self.current = self.current.offset(ms);
        self.current
    }
}

impl fmt::Display for HuntClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.current)
    }
}
