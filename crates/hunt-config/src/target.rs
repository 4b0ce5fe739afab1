//! Geofenced target definitions.

use std::collections::HashSet;

use hunt_core::{GeoPoint, HuntError, TargetIdx};

use crate::{ConfigError, ConfigResult};

/// A fixed geographic point associated with one AR marker.
///
/// Targets are created at configuration time and never mutated.  `color`
/// is passed through to the presentation layer and plays no part in the
/// proximity logic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Unique, human-readable identifier (e.g. `"box1"`).
    pub id:       String,
    pub position: GeoPoint,
    /// Display colour, e.g. `"#4CC3D9"`.
    pub color:    Option<String>,
}

impl Target {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id:       id.into(),
            position: GeoPoint::new(lat, lon),
            color:    None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.id, self.position)
    }
}

/// Check a target list before it is handed to the tracker.
///
/// Rejects an empty list, more targets than `TargetIdx` can address, empty
/// or duplicate ids, and non-finite coordinates.
pub fn validate_targets(targets: &[Target]) -> ConfigResult<()> {
    if targets.is_empty() {
        return Err(ConfigError::Invalid("target list is empty".into()));
    }
    if TargetIdx::try_from(targets.len() - 1).is_err() {
        return Err(ConfigError::Invalid(format!(
            "{} targets exceeds the supported maximum",
            targets.len()
        )));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(targets.len());
    for target in targets {
        if target.id.trim().is_empty() {
            return Err(ConfigError::Invalid("target id must not be empty".into()));
        }
        if !seen.insert(target.id.as_str()) {
            return Err(ConfigError::DuplicateTarget(target.id.clone()));
        }
        if !target.position.is_finite() {
            return Err(HuntError::NonFiniteCoordinate(target.position).into());
        }
    }
    Ok(())
}
