//! Greenwich and local mean sidereal time.

use crate::coordinates::normalize_degrees;
use crate::time::julian::JulianDay;

/// Greenwich mean sidereal time in degrees, normalized to [0, 360).
pub fn sidereal_time(t: JulianDay) -> f64 {
    let d = t.days_since_j2000();
    let c = t.centuries_since_j2000();

    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * c * c
        - c * c * c / 38_710_000.0;

    normalize_degrees(gmst)
}

/// Local mean sidereal time for an observer at `east_longitude` degrees.
pub fn local_sidereal_time(t: JulianDay, east_longitude: f64) -> f64 {
    normalize_degrees(sidereal_time(t) + east_longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::julian::J2000;

    #[test]
    fn test_gmst_at_j2000() {
        assert!((sidereal_time(J2000) - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn test_gmst_advances_one_sidereal_day() {
        // One solar day moves GMST by roughly 0.9856 degrees past a full turn.
        let s0 = sidereal_time(J2000);
        let s1 = sidereal_time(J2000 + 1.0);
        let step = normalize_degrees(s1 - s0);
        assert!((step - 0.985_647).abs() < 1e-4);
    }

    #[test]
    fn test_local_sidereal_time_wraps() {
        let lst = local_sidereal_time(J2000, 100.0);
        assert!((0.0..360.0).contains(&lst));
        assert!((lst - 20.460_618_37).abs() < 1e-9);
    }
}
