//! `hunt-config` — hunt configuration and target definitions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`target`]  | `Target` — immutable geofenced marker definition           |
//! | [`config`]  | `HuntConfig` — threshold and animation/notification timing |
//! | [`loader`]  | CSV target loading (`load_targets_csv`, `load_targets_reader`) |
//! | [`error`]   | `ConfigError`, `ConfigResult<T>`                           |
//!
//! Both `Target` lists and `HuntConfig` are validated once, at configuration
//! time; the tracker relies on that validation and never re-checks them.

pub mod config;
pub mod error;
pub mod loader;
pub mod target;

#[cfg(test)]
mod tests;

pub use config::HuntConfig;
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_targets_csv, load_targets_reader};
pub use target::{Target, validate_targets};
