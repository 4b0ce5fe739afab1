//! Direction hint: the nearest undiscovered target from the current fix.

use hunt_core::{Compass, TargetIdx};

/// Where the nearest undiscovered target lies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nearest {
    pub target:      TargetIdx,
    pub distance_m:  f64,
    pub bearing_deg: f64,
    pub compass:     Compass,
}

/// Hint panel contents.  `nearest` is `None` once every target is found.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    pub nearest:     Option<Nearest>,
    pub found_count: usize,
    pub total_count: usize,
}

impl Hint {
    /// `true` when nothing is left to find.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.nearest.is_none()
    }
}
