//! Integration tests for hunt-output.

use hunt_config::{HuntConfig, Target};
use hunt_core::{Compass, GeoPoint, TargetIdx, Tick};
use hunt_session::{HuntObserver, ScriptedFeed, Session, SessionBuilder};
use hunt_tracker::{FoundReport, Hint, MarkerState, Nearest};

const T_LAT: f64 = 6.985161867439368;
const T_LON: f64 = 81.07362372073608;

fn target(id: &str) -> Target {
    Target::new(id, T_LAT, T_LON)
}

fn hint(distance_m: f64, found_count: usize) -> Hint {
    Hint {
        nearest: Some(Nearest {
            target:      TargetIdx(1),
            distance_m,
            bearing_deg: 50.0,
            compass:     Compass::Northeast,
        }),
        found_count,
        total_count: 3,
    }
}

fn session() -> Session {
    SessionBuilder::new(vec![target("T")])
        .config(HuntConfig::with_threshold(5.0))
        .build()
        .unwrap()
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::text;

    #[test]
    fn hint_line_names_target_distance_and_direction() {
        let line = text::hint_line(&hint(35.4, 1), Some(&target("box2")));
        assert_eq!(line, "box2: 35 m NE (1/3 found)");
    }

    #[test]
    fn hint_line_switches_to_kilometres() {
        let line = text::hint_line(&hint(1_260.0, 0), Some(&target("box2")));
        assert_eq!(line, "box2: 1.3 km NE (0/3 found)");
    }

    #[test]
    fn sub_kilometre_distances_stay_in_metres() {
        assert_eq!(text::distance_label(999.4), "999 m");
        assert_eq!(text::distance_label(1_000.0), "1.0 km");
    }

    #[test]
    fn complete_hint_line() {
        let done = Hint { nearest: None, found_count: 3, total_count: 3 };
        assert_eq!(text::hint_line(&done, None), "All targets found! (3/3 found)");
    }

    #[test]
    fn found_line_counts_remaining() {
        let t = target("box1");
        let report = |remaining| FoundReport { target: TargetIdx(0), distance_m: 2.0, remaining };
        assert_eq!(text::found_line(&t, &report(2)), "You found box1! 2 targets left.");
        assert_eq!(text::found_line(&t, &report(1)), "You found box1! 1 target left.");
        assert_eq!(text::found_line(&t, &report(0)), "You found box1! That was the last one.");
    }
}

// ── ConsolePresenter ──────────────────────────────────────────────────────────

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::ConsolePresenter;

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn prints_a_short_hunt() {
        let mut s = session();
        let mut feed = ScriptedFeed::new()
            .fix_at(Tick(0), GeoPoint::new(T_LAT, T_LON))
            .tap_at(Tick(1_000), "T");
        let mut presenter = ConsolePresenter::new(Vec::new());
        s.run(&mut feed, &mut presenter).unwrap();

        assert!(presenter.take_error().is_none());
        let out = lines(presenter.into_writer());
        assert_eq!(out[0], "Hunt started: 1 targets to find");
        assert_eq!(out[1], "T: 0 m N (0/1 found)");
        assert_eq!(out[2], "You found T! That was the last one.");
        assert_eq!(out[3], "All targets found! (1/1 found)");
        assert_eq!(out[4], "Hunt ended at 4.500s");
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn verbose_prints_marker_changes() {
        let mut presenter = ConsolePresenter::new(Vec::new()).verbose(true);
        presenter.set_marker_state(&target("T"), MarkerState::Show);
        presenter.dismiss_found(&target("T"));
        let out = lines(presenter.into_writer());
        assert_eq!(out, ["  [T] show", "  [T] notification dismissed"]);
    }

    #[test]
    fn quiet_skips_marker_changes() {
        let mut presenter = ConsolePresenter::new(Vec::new());
        presenter.set_marker_state(&target("T"), MarkerState::Show);
        presenter.report_gps_unavailable();
        let out = lines(presenter.into_writer());
        assert_eq!(out, [crate::text::GPS_UNAVAILABLE]);
    }

    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_stored() {
        let mut presenter = ConsolePresenter::new(FailingWriter);
        presenter.report_gps_unavailable();
        presenter.report_gps_unavailable();
        assert!(presenter.take_error().is_some());
        assert!(presenter.take_error().is_none());
    }
}

// ── Recorder ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod recorder_tests {
    use super::*;
    use crate::{OutboundCall, Recorder};

    #[test]
    fn records_a_full_session() {
        let mut s = session();
        let mut feed = ScriptedFeed::new()
            .fix_at(Tick(0), GeoPoint::new(T_LAT, T_LON))
            .fix_at(Tick(100), GeoPoint::new(T_LAT, T_LON))
            .tap_at(Tick(1_000), "T");
        let mut rec = Recorder::new();
        s.run(&mut feed, &mut rec).unwrap();

        assert_eq!(rec.calls[0], OutboundCall::SessionStart { targets: 1 });
        assert_eq!(
            rec.marker_states("T"),
            [MarkerState::Hidden, MarkerState::Show, MarkerState::Found]
        );
        assert_eq!(rec.found(), ["T"]);
        assert!(rec.last_hint().unwrap().is_complete());
        assert!(rec.calls.contains(&OutboundCall::DismissFound { target: "T".into() }));
        assert_eq!(rec.calls.last(), Some(&OutboundCall::SessionEnd { at: Tick(4_500) }));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut rec = Recorder::new();
        rec.report_gps_unavailable();
        rec.clear();
        assert!(rec.calls.is_empty());
        assert!(rec.last_hint().is_none());
    }
}
