//! The campus course: target list and a scripted walk through it.

use hunt_config::Target;
use hunt_core::{FixRng, GeoPoint, Tick};
use hunt_session::ScriptedFeed;

// id,lat,lon,color.  box1 sits by the old mystery-box spot at the main gate.
pub const TARGETS_CSV: &str = "\
id,lat,lon,color\n\
box1,6.985462148939262,81.0734485580701,#e74c3c\n\
box2,6.986110000000000,81.0741200000000,#3498db\n\
box3,6.984720000000000,81.0739600000000,\n\
";

/// Where the walk begins: the library steps, ~90 m south-west of box1.
pub const START: GeoPoint = GeoPoint { lat: 6.98488, lon: 81.07297 };

const FIX_INTERVAL_MS: u64 = 1_000;
/// Fixes per leg of the walk.
const LEG_STEPS: u32 = 12;
/// Time spent standing on a target before tapping it; longer than the
/// entrance animation.
const DWELL_MS: u64 = 2_000;

/// Walk from [`START`] to each target in order, tapping it on arrival.
///
/// With `jitter` set every fix is displaced by up to that many metres using
/// a generator seeded with `seed`.
pub fn scripted_walk(targets: &[Target], seed: u64, jitter: Option<f64>) -> ScriptedFeed {
    let mut feed = ScriptedFeed::new();
    let mut here = START;
    let mut at = Tick::ZERO;

    for target in targets {
        feed = feed.walk(here, target.position, LEG_STEPS, at, FIX_INTERVAL_MS);
        at = at.offset(FIX_INTERVAL_MS * (LEG_STEPS as u64 - 1));

        // Stand still long enough for the marker to settle, then tap.
        feed = feed
            .fix_at(at.offset(DWELL_MS / 2), target.position)
            .tap_at(at.offset(DWELL_MS), target.id.clone());

        here = target.position;
        at = at.offset(DWELL_MS + FIX_INTERVAL_MS);
    }

    match jitter {
        Some(radius_m) => feed.with_jitter(FixRng::new(seed), radius_m),
        None => feed,
    }
}
