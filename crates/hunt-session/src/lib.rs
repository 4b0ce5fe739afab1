//! `hunt-session` — single-owner event loop for a running hunt.
//!
//! # Event loop
//!
//! ```text
//! for event in source (non-decreasing tick order):
//!   ① Timers   — fire every settle / dismiss timer due before the event,
//!                each at its own tick.
//!   ② Dispatch — Fix            → ProximityTracker::on_fix
//!                Tap(id)        → ProximityTracker::on_found
//!                PositionError  → on_gps_unavailable (permanent, or a
//!                                 timeout before the first fix)
//!   ③ Apply    — SetMarker          → observer.set_marker_state
//!                ScheduleSettle     → TimerQueue
//!                ReportFound        → observer.report_found + dismiss timer
//!                ReportGpsUnavailable → observer.report_gps_unavailable
//!   ④ Hint     — recompute nearest; report only when it changed.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`builder`]  | `SessionBuilder`                                       |
//! | [`session`]  | `Session` — the event loop                             |
//! | [`source`]   | `EventSource`, `ScriptedFeed`, `HuntEvent`             |
//! | [`observer`] | `HuntObserver` — presentation callbacks                |
//! | [`queue`]    | `TimerQueue` — pending settle / dismiss timers         |
//! | [`error`]    | `SessionError`, `SessionResult<T>`                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hunt_config::{HuntConfig, Target};
//! use hunt_core::{GeoPoint, Tick};
//! use hunt_session::{NoopObserver, ScriptedFeed, SessionBuilder};
//!
//! let targets = vec![Target::new("box1", 6.985462, 81.073448)];
//! let mut session = SessionBuilder::new(targets).build()?;
//! let mut feed = ScriptedFeed::new()
//!     .fix_at(Tick::ZERO, GeoPoint::new(6.985462, 81.073448))
//!     .tap_at(Tick::from_secs(2), "box1");
//! session.run(&mut feed, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod session;
pub mod source;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use observer::{HuntObserver, NoopObserver};
pub use queue::{Timer, TimerQueue};
pub use session::Session;
pub use source::{EventSource, HuntEvent, PositionError, ScriptedFeed, TimedEvent};
