//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Targets sit a few metres apart
//! and the proximity threshold is typically 5–25 m, so single precision
//! (~1 m at the equator) would be too coarse for the in-range decision.
//!
//! All functions take degrees and assume a spherical Earth of radius
//! [`EARTH_RADIUS_M`].  There is no range validation: callers that accept
//! untrusted input check [`GeoPoint::is_finite`] first.

use crate::Compass;

/// Mean Earth radius in metres used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance in metres between two lat/lon pairs.
pub fn distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial great-circle bearing from point 1 to point 2, in `[0, 360)`.
///
/// 0 is north, 90 east.  For coincident points the result is 0 and carries
/// no meaning.
pub fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let y = d_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();

    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    // -1e-15 + 360 rounds to 360.0 exactly.
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        distance_m(self.lat, self.lon, other.lat, other.lon)
    }

    /// Initial bearing from `self` towards `other`, in `[0, 360)`.
    #[inline]
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        bearing_deg(self.lat, self.lon, other.lat, other.lon)
    }

    /// Eight-point compass direction from `self` towards `other`.
    #[inline]
    pub fn direction_to(self, other: GeoPoint) -> Compass {
        Compass::from_bearing(self.bearing_deg(other))
    }

    /// `false` if either component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// The point `distance` metres away along `bearing` degrees.
    ///
    /// Used to build synthetic walks and test fixtures at known offsets.
    pub fn destination(self, bearing: f64, distance: f64) -> GeoPoint {
        let delta = distance / EARTH_RADIUS_M;
        let theta = bearing.to_radians();
        let phi1 = self.lat.to_radians();
        let lambda1 = self.lon.to_radians();

        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos())
                .atan2(delta.cos() - phi1.sin() * phi2.sin());

        GeoPoint::new(phi2.to_degrees(), lambda2.to_degrees())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
