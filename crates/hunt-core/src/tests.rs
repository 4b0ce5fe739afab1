//! Unit tests for hunt-core primitives.

#[cfg(test)]
mod ids {
    use crate::TargetIdx;

    #[test]
    fn index_roundtrip() {
        let id = TargetIdx(4);
        assert_eq!(id.index(), 4);
        assert_eq!(TargetIdx::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn too_large_index_rejected() {
        assert!(TargetIdx::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TargetIdx(2).to_string(), "TargetIdx(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, bearing_deg, distance_m};

    const HOME: GeoPoint = GeoPoint { lat: 6.985161867439368, lon: 81.07362372073608 };

    #[test]
    fn zero_distance() {
        assert_eq!(HOME.distance_m(HOME), 0.0);
        assert_eq!(distance_m(-33.9, 151.2, -33.9, 151.2), 0.0);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on the 6371 km sphere
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (HOME, GeoPoint::new(6.9855, 81.0735)),
            (GeoPoint::new(51.5, -0.12), GeoPoint::new(40.7, -74.0)),
            (GeoPoint::new(-45.0, 170.0), GeoPoint::new(-44.0, -179.5)),
        ];
        for (p, q) in pairs {
            let d1 = p.distance_m(q);
            let d2 = q.distance_m(p);
            assert!((d1 - d2).abs() <= 1e-6 * d1.max(1.0), "{d1} vs {d2}");
        }
    }

    #[test]
    fn monotonic_along_bearing() {
        let mut last = 0.0;
        for step in 1..=50 {
            let q = HOME.destination(63.0, step as f64 * 20.0);
            let d = HOME.distance_m(q);
            assert!(d > last, "step {step}: {d} <= {last}");
            last = d;
        }
    }

    #[test]
    fn destination_matches_distance() {
        let q = HOME.destination(200.0, 100.0);
        assert!((HOME.distance_m(q) - 100.0).abs() < 1e-6);
        assert!((HOME.bearing_deg(q) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn cardinal_bearings() {
        let o = GeoPoint::new(0.0, 0.0);
        assert!((o.bearing_deg(GeoPoint::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((o.bearing_deg(GeoPoint::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((o.bearing_deg(GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((o.bearing_deg(GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_always_in_range() {
        for i in 0..360 {
            for r in [0.5, 10.0, 5_000.0] {
                let q = HOME.destination(i as f64 + 0.25, r);
                let b = bearing_deg(HOME.lat, HOME.lon, q.lat, q.lon);
                assert!((0.0..360.0).contains(&b), "bearing {b}");
            }
        }
        // Coincident points: defined, in range, not meaningful.
        let b = HOME.bearing_deg(HOME);
        assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn finiteness() {
        assert!(HOME.is_finite());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod compass {
    use crate::{Compass, GeoPoint};

    #[test]
    fn north_boundaries() {
        assert_eq!(Compass::from_bearing(0.0), Compass::North);
        assert_eq!(Compass::from_bearing(44.9), Compass::North);
        assert_eq!(Compass::from_bearing(337.5), Compass::North);
        // Sectors start at their wind rather than straddling it.
        assert_eq!(Compass::from_bearing(80.0), Compass::Northeast);
        assert_eq!(Compass::from_bearing(330.0), Compass::Northwest);
        assert_eq!(Compass::from_bearing(359.999), Compass::North);
    }

    #[test]
    fn sectors_start_at_their_wind() {
        assert_eq!(Compass::from_bearing(45.0), Compass::Northeast);
        assert_eq!(Compass::from_bearing(89.9), Compass::Northeast);
        assert_eq!(Compass::from_bearing(90.0), Compass::East);
        assert_eq!(Compass::from_bearing(135.0), Compass::Southeast);
        assert_eq!(Compass::from_bearing(180.0), Compass::South);
        assert_eq!(Compass::from_bearing(225.0), Compass::Southwest);
        assert_eq!(Compass::from_bearing(270.0), Compass::West);
        assert_eq!(Compass::from_bearing(315.0), Compass::Northwest);
        assert_eq!(Compass::from_bearing(337.4), Compass::Northwest);
    }

    #[test]
    fn direction_between_points() {
        let o = GeoPoint::new(0.0, 0.0);
        assert_eq!(o.direction_to(GeoPoint::new(-0.0003, 0.001)), Compass::East);
        assert_eq!(o.direction_to(GeoPoint::new(-0.001, -0.0002)), Compass::South);
        assert_eq!(o.direction_to(GeoPoint::new(0.001, -0.0001)), Compass::North);
    }

    #[test]
    fn labels() {
        assert_eq!(Compass::Northeast.to_string(), "NE");
        assert_eq!(Compass::Southwest.long_name(), "Southwest");
    }
}

#[cfg(test)]
mod time {
    use crate::{HuntClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(1_000);
        assert_eq!(t + 500, Tick(1_500));
        assert_eq!(t.offset(250), Tick(1_250));
        assert_eq!(Tick(1_500).since(Tick(1_000)), 500);
        assert_eq!(Tick(10).since(Tick(20)), 0);
        assert_eq!(Tick::from_secs(3), Tick(3_000));
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut clock = HuntClock::new();
        assert_eq!(clock.advance_to(Tick(800)), Tick(800));
        assert_eq!(clock.advance_to(Tick(300)), Tick(800));
        assert_eq!(clock.advance_by(200), Tick(1_000));
        assert_eq!(clock.now(), Tick(1_000));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3_500).to_string(), "3.500s");
        let mut clock = HuntClock::new();
        clock.advance_by(42);
        assert_eq!(clock.to_string(), "t=0.042s");
    }
}

#[cfg(test)]
mod rng {
    use crate::{FixRng, GeoPoint};

    #[test]
    fn deterministic_same_seed() {
        let p = GeoPoint::new(6.98, 81.07);
        let mut r1 = FixRng::new(12345);
        let mut r2 = FixRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.jitter(p, 5.0), r2.jitter(p, 5.0));
        }
    }

    #[test]
    fn jitter_bounded() {
        let p = GeoPoint::new(6.98, 81.07);
        let mut rng = FixRng::new(7);
        for _ in 0..1000 {
            let q = rng.jitter(p, 3.0);
            assert!(p.distance_m(q) <= 3.0 + 1e-6);
        }
    }

    #[test]
    fn zero_radius_is_identity() {
        let p = GeoPoint::new(1.0, 2.0);
        assert_eq!(FixRng::new(0).jitter(p, 0.0), p);
    }

    #[test]
    fn non_finite_radius_is_identity() {
        let p = GeoPoint::new(1.0, 2.0);
        let mut rng = FixRng::new(0);
        assert_eq!(rng.jitter(p, f64::INFINITY), p);
        assert_eq!(rng.jitter(p, f64::NAN), p);
    }

    #[test]
    fn children_differ() {
        let mut root = FixRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }
}
