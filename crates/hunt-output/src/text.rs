//! Text renderings of the hint panel and notifications.

use hunt_config::Target;
use hunt_tracker::{FoundReport, Hint};

/// Fallback message shown when positioning is unavailable.
pub const GPS_UNAVAILABLE: &str = "GPS unavailable: showing the fallback marker";

/// Hint panel line, e.g. `box2: 35 m NE (1/3 found)`.
///
/// Distances under 1 km are rounded to whole metres, longer ones shown in
/// kilometres with one decimal.
pub fn hint_line(hint: &Hint, nearest: Option<&Target>) -> String {
    let progress = format!("({}/{} found)", hint.found_count, hint.total_count);
    match (hint.nearest, nearest) {
        (Some(n), Some(target)) => {
            format!("{}: {} {} {progress}", target.id, distance_label(n.distance_m), n.compass)
        }
        _ => format!("All targets found! {progress}"),
    }
}

/// Found notification line.
pub fn found_line(target: &Target, report: &FoundReport) -> String {
    match report.remaining {
        0 => format!("You found {}! That was the last one.", target.id),
        1 => format!("You found {}! 1 target left.", target.id),
        n => format!("You found {}! {n} targets left.", target.id),
    }
}

pub fn distance_label(distance_m: f64) -> String {
    if distance_m < 1_000.0 {
        format!("{distance_m:.0} m")
    } else {
        format!("{:.1} km", distance_m / 1_000.0)
    }
}
