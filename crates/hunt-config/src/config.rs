//! Top-level hunt configuration.

use crate::{ConfigError, ConfigResult};

/// Proximity threshold and presentation timing, set once per session.
///
/// The durations only decide when the Appearing/Disappearing buffer states
/// settle and when the found notification is dismissed; they never affect
/// the in-range decision itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HuntConfig {
    /// A target is in range when its distance is strictly below this value.
    pub threshold_m: f64,

    /// Length of the marker entrance animation (Appearing → Visible).
    pub entrance_ms: u32,

    /// Length of the marker exit animation (Disappearing → Hidden).
    pub exit_ms: u32,

    /// How long the found notification stays on screen.
    pub notification_ms: u32,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            threshold_m:     25.0,
            entrance_ms:     800,
            exit_ms:         500,
            notification_ms: 3_500,
        }
    }
}

impl HuntConfig {
    /// Default timings with a custom threshold.
    pub fn with_threshold(threshold_m: f64) -> Self {
        Self { threshold_m, ..Self::default() }
    }

    /// Reject thresholds that would make every comparison meaningless.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.threshold_m.is_finite() || self.threshold_m <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "threshold must be a positive number of metres, got {}",
                self.threshold_m
            )));
        }
        Ok(())
    }
}
