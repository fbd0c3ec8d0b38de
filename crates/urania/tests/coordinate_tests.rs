use urania::coordinates::{
    angle_difference, normalize_degrees, separation, CoordinateTransformer, EclipticCoords,
    EquatorialCoords, HorizontalCoords,
};
use urania::time::J2000;

#[test]
fn test_normalization_idempotent() {
    let mut a = -1000.0;
    while a < 1000.0 {
        let n = normalize_degrees(a);
        assert!((0.0..360.0).contains(&n));
        assert_eq!(normalize_degrees(n), n);
        a += 7.3;
    }
}

#[test]
fn test_difference_and_separation_ranges() {
    for a in (0..360).step_by(17) {
        for b in (0..360).step_by(23) {
            let d = angle_difference(a as f64, b as f64);
            assert!(d > -180.0 && d <= 180.0);
            let s = separation(a as f64, b as f64);
            assert!((0.0..=180.0).contains(&s));
            assert!((s - d.abs()).abs() < 1e-12);
        }
    }
}

#[test]
fn test_ecliptic_equatorial_round_trip() {
    for obliquity in [0.0, 10.0, 23.4392911, 45.0, 80.0] {
        let tr = CoordinateTransformer::with_obliquity(obliquity);
        for lon in (0..360).step_by(15) {
            for lat in [-80.0, -45.0, -10.0, 0.0, 5.0, 33.3, 89.0] {
                let ec = EclipticCoords::new(lon as f64, lat, 2.5);
                let back = tr.equatorial_to_ecliptic(&tr.ecliptic_to_equatorial(&ec));
                assert!(
                    separation(back.longitude, ec.longitude) < 1e-3,
                    "lon {} lat {} eps {} -> {}",
                    lon,
                    lat,
                    obliquity,
                    back.longitude
                );
                assert!((back.latitude - lat).abs() < 1e-3);
                assert_eq!(back.distance, 2.5);
            }
        }
    }
}

#[test]
fn test_equatorial_ecliptic_round_trip() {
    for obliquity in [0.0, 23.4392911, 60.0, 89.9] {
        let tr = CoordinateTransformer::with_obliquity(obliquity);
        let mut ra = 0.5;
        while ra < 360.0 {
            for dec in [-89.99, -60.0, -23.0, 0.0, 12.5, 60.0, 89.99] {
                let eq = EquatorialCoords::new(ra, dec, 1.25);
                let back = tr.ecliptic_to_equatorial(&tr.equatorial_to_ecliptic(&eq));
                assert!(
                    separation(back.right_ascension, ra) < 1e-3,
                    "ra {} dec {} eps {} -> {}",
                    ra,
                    dec,
                    obliquity,
                    back.right_ascension
                );
                assert!((back.declination - dec).abs() < 1e-3);
                assert!(tr.angular_separation(&back, &eq) < 1e-3);
                assert_eq!(back.distance, 1.25);
            }
            ra += 7.0;
        }
    }
}

#[test]
fn test_horizontal_round_trip() {
    let tr = CoordinateTransformer::for_time(J2000);
    let lst = 123.4;
    for latitude in [-60.0, -20.0, 0.0, 35.0, 64.0] {
        for ra in (0..360).step_by(30) {
            for dec in [-50.0, -10.0, 0.0, 20.0, 70.0] {
                let eq = EquatorialCoords::new(ra as f64, dec, 0.0);
                let hz = tr.equatorial_to_horizontal(&eq, lst, latitude);
                let back = tr.horizontal_to_equatorial(&hz, lst, latitude);
                assert!(separation(back.right_ascension, eq.right_ascension) < 1e-6 || dec.abs() > 89.0);
                assert!((back.declination - dec).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn test_object_due_south_transits() {
    // On the meridian south of a northern observer: azimuth 180.
    let tr = CoordinateTransformer::new();
    let hz = tr.equatorial_to_horizontal(&EquatorialCoords::new(80.0, 0.0, 0.0), 80.0, 40.0);
    assert!((hz.azimuth - 180.0).abs() < 1e-9);
    assert!((hz.altitude - 50.0).abs() < 1e-9);
}

#[test]
fn test_separation_across_frames_agrees() {
    let tr = CoordinateTransformer::new();
    let a = EclipticCoords::new(10.0, 2.0, 1.0);
    let b = EclipticCoords::new(75.0, -3.0, 1.0);
    let ea = tr.ecliptic_to_equatorial(&a);
    let eb = tr.ecliptic_to_equatorial(&b);
    assert!((tr.angular_separation(&a, &b) - tr.angular_separation(&ea, &eb)).abs() < 1e-9);
}

#[test]
fn test_horizon_point_display() {
    let hz = HorizontalCoords::new(90.0, 0.0);
    assert_eq!(hz.to_string(), "Az: 90.0000°, Alt: 0.0000°");
}
