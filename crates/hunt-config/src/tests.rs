//! Unit tests for hunt-config.

use std::io::Cursor;

use hunt_core::GeoPoint;

use crate::{ConfigError, HuntConfig, Target, load_targets_reader, validate_targets};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn two_targets() -> Vec<Target> {
    vec![
        Target::new("box1", 6.985161867439368, 81.07362372073608),
        Target::new("box2", 6.985462148939262, 81.0734485580701).with_color("#EF2D5E"),
    ]
}

// ── Target validation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn accepts_valid_list() {
        assert!(validate_targets(&two_targets()).is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(validate_targets(&[]), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut targets = two_targets();
        targets[1].id = "box1".into();
        match validate_targets(&targets) {
            Err(ConfigError::DuplicateTarget(id)) => assert_eq!(id, "box1"),
            other => panic!("expected DuplicateTarget, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_id() {
        let targets = vec![Target::new("  ", 0.0, 0.0)];
        assert!(validate_targets(&targets).is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let targets = vec![Target::new("bad", f64::NAN, 81.0)];
        assert!(matches!(validate_targets(&targets), Err(ConfigError::Core(_))));
    }

    #[test]
    fn target_display() {
        let t = Target::new("box1", 1.0, 2.0);
        assert_eq!(t.to_string(), "box1 @ (1.000000, 2.000000)");
    }
}

// ── HuntConfig ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hunt_config {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = HuntConfig::default();
        assert_eq!(cfg.threshold_m, 25.0);
        assert_eq!(cfg.notification_ms, 3_500);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn custom_threshold_keeps_timings() {
        let cfg = HuntConfig::with_threshold(5.0);
        assert_eq!(cfg.threshold_m, 5.0);
        assert_eq!(cfg.entrance_ms, HuntConfig::default().entrance_ms);
    }

    #[test]
    fn rejects_bad_thresholds() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(HuntConfig::with_threshold(t).validate().is_err(), "threshold {t}");
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_rows_in_order() {
        let csv = "\
id,lat,lon,color\n\
box1,6.985161867439368,81.07362372073608,#4CC3D9\n\
box2,6.985462148939262,81.0734485580701,\n\
";
        let targets = load_targets_reader(Cursor::new(csv)).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].id, "box1");
        assert_eq!(targets[0].color.as_deref(), Some("#4CC3D9"));
        assert_eq!(targets[1].position, GeoPoint::new(6.985462148939262, 81.0734485580701));
        assert_eq!(targets[1].color, None);
    }

    #[test]
    fn color_column_optional() {
        let csv = "id,lat,lon\nonly,1.0,2.0\n";
        let targets = load_targets_reader(Cursor::new(csv)).unwrap();
        assert_eq!(targets[0].color, None);
    }

    #[test]
    fn whitespace_trimmed() {
        let csv = "id, lat, lon\n box1 , 1.0 , 2.0\n";
        let targets = load_targets_reader(Cursor::new(csv)).unwrap();
        assert_eq!(targets[0].id, "box1");
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "id,lat,lon\nbox1,north,2.0\n";
        let err = load_targets_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn duplicate_rows_rejected() {
        let csv = "id,lat,lon\nbox1,1.0,2.0\nbox1,1.5,2.5\n";
        assert!(matches!(
            load_targets_reader(Cursor::new(csv)),
            Err(ConfigError::DuplicateTarget(_))
        ));
    }

    #[test]
    fn nan_rejected() {
        let csv = "id,lat,lon\nbox1,NaN,2.0\n";
        assert!(load_targets_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn header_only_is_empty_error() {
        let csv = "id,lat,lon,color\n";
        assert!(matches!(
            load_targets_reader(Cursor::new(csv)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_targets_csv(std::path::Path::new("/nonexistent/targets.csv"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
