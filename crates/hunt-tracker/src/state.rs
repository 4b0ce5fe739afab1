//! Per-target marker visibility.

/// Where a target's marker is in its show/hide cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Hidden,
    /// Entrance animation running; settles to `Visible`.
    Appearing,
    Visible,
    /// Exit animation running; settles to `Hidden`.
    Disappearing,
}

impl Visibility {
    /// `true` for the two states in which the marker has been asked to show.
    #[inline]
    pub fn is_requested_visible(self) -> bool {
        matches!(self, Visibility::Appearing | Visibility::Visible)
    }

    /// `true` while an animation is in flight.
    #[inline]
    pub fn is_transient(self) -> bool {
        matches!(self, Visibility::Appearing | Visibility::Disappearing)
    }

    /// The resting state a transient state settles into.  Resting states
    /// settle into themselves.
    #[inline]
    pub fn settled(self) -> Visibility {
        match self {
            Visibility::Appearing    => Visibility::Visible,
            Visibility::Disappearing => Visibility::Hidden,
            other                    => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Hidden       => "hidden",
            Visibility::Appearing    => "appearing",
            Visibility::Visible      => "visible",
            Visibility::Disappearing => "disappearing",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
