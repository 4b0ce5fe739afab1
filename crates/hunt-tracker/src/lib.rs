//! `hunt-tracker` — proximity state machine, discovery, and direction hints.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `Visibility` — per-target marker state                            |
//! | [`store`]   | `TrackerStore` — parallel per-target arrays + found order         |
//! | [`effect`]  | `Effect`, `MarkerState` — requests for the presentation layer     |
//! | [`hint`]    | `Hint`, `Nearest` — nearest-undiscovered-target query result      |
//! | [`engine`]  | `ProximityTracker` — `on_fix` / `on_found` / `on_gps_unavailable` |
//! | [`error`]   | `TrackerError`, `TrackerResult<T>`                                |
//!
//! # State machine (per target, independent)
//!
//! ```text
//! Hidden  --(dist <  threshold)--> Appearing    --(settle)--> Visible
//! Visible --(dist >= threshold)--> Disappearing --(settle)--> Hidden
//! Visible --(tap)--> found (terminal, never re-evaluated)
//! ```
//!
//! Decisions only distinguish *requested visible* (Appearing, Visible) from
//! *requested hidden* (Hidden, Disappearing).  The buffer states exist so the
//! presentation layer can finish its animation; the tracker emits an
//! [`Effect::ScheduleSettle`] carrying the animation length and the session
//! calls [`ProximityTracker::settle`] when it elapses.  The tracker itself
//! never reads a clock.

pub mod effect;
pub mod engine;
pub mod error;
pub mod hint;
pub mod state;
pub mod store;


pub use effect::{Effect, FoundReport, MarkerState};
pub use engine::{GpsStatus, ProximityTracker};
pub use error::{TrackerError, TrackerResult};
pub use hint::{Hint, Nearest};
pub use state::Visibility;
pub use store::TrackerStore;
