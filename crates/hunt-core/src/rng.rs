//! Deterministic RNG for simulated position noise.
//!
//! Real GPS fixes wander by several metres even when the device is still.
//! Scripted walks use `FixRng` to reproduce that wander so the proximity
//! hysteresis can be exercised; the same seed always yields the same walk.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GeoPoint;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded jitter generator for synthetic fixes.
pub struct FixRng(SmallRng);

impl FixRng {
    pub fn new(seed: u64) -> Self {
        FixRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream, e.g. one per scripted walker.
    pub fn child(&mut self, offset: u64) -> FixRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        FixRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Displace `point` by up to `radius_m` metres in a uniformly random
    /// direction.  A non-positive or non-finite radius returns `point`
    /// unchanged.
    pub fn jitter(&mut self, point: GeoPoint, radius_m: f64) -> GeoPoint {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return point;
        }
        let bearing = self.0.gen_range(0.0..360.0);
        let distance = self.0.gen_range(0.0..=radius_m);
        point.destination(bearing, distance)
    }
}
