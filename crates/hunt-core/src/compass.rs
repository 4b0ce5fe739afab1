//! Eight-point compass labels used by the direction hint.

/// One of eight compass sectors.
///
/// The sectors are not centred on their winds: North spans 67.5° and
/// Northwest 22.5°, so that 44.9° still reads North and 337.5° reads North.
/// See [`from_bearing`][Self::from_bearing] for the exact ranges.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    #[default]
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Compass {
    /// Clockwise order starting at north.
    pub const ALL: [Compass; 8] = [
        Compass::North,
        Compass::Northeast,
        Compass::East,
        Compass::Southeast,
        Compass::South,
        Compass::Southwest,
        Compass::West,
        Compass::Northwest,
    ];

    /// Label for a bearing in `[0, 360)`.
    ///
    /// North wraps through zero and covers `[337.5, 360) ∪ [0, 45)`.  Every
    /// other label owns the half-open range starting at its own wind and
    /// running 45° clockwise (`[45, 90)` is Northeast, `[90, 135)` East, …),
    /// except Northwest which stops at 337.5.  Bearings outside `[0, 360)`
    /// must be normalised by the caller.
    pub fn from_bearing(bearing: f64) -> Compass {
        if bearing >= 337.5 || bearing < 45.0 {
            return Compass::North;
        }
        let sector = (bearing / 45.0) as usize;
        Self::ALL[sector.min(7)]
    }

    /// Abbreviation shown in the hint panel (`"NE"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Compass::North     => "N",
            Compass::Northeast => "NE",
            Compass::East      => "E",
            Compass::Southeast => "SE",
            Compass::South     => "S",
            Compass::Southwest => "SW",
            Compass::West      => "W",
            Compass::Northwest => "NW",
        }
    }

    /// Full name (`"Northeast"`).
    pub fn long_name(self) -> &'static str {
        match self {
            Compass::North     => "North",
            Compass::Northeast => "Northeast",
            Compass::East      => "East",
            Compass::Southeast => "Southeast",
            Compass::South     => "South",
            Compass::Southwest => "Southwest",
            Compass::West      => "West",
            Compass::Northwest => "Northwest",
        }
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
