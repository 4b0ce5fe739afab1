//! `hunt-core` — foundational types for the `geohunt` proximity engine.
//!
//! This crate is a dependency of every other `hunt-*` crate.  It has no
//! `hunt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TargetIdx`                                           |
//! | [`geo`]         | `GeoPoint`, haversine distance, initial bearing       |
//! | [`compass`]     | `Compass` eight-point direction labels                |
//! | [`time`]        | `Tick` (milliseconds), `HuntClock`                    |
//! | [`rng`]         | `FixRng` (deterministic GPS jitter)                   |
//! | [`error`]       | `HuntError`, `HuntResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod compass;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compass::Compass;
pub use error::{HuntError, HuntResult};
pub use geo::{GeoPoint, bearing_deg, distance_m};
pub use ids::TargetIdx;
pub use rng::FixRng;
pub use time::{HuntClock, Tick};
