//! Rotations between equatorial, ecliptic and horizontal frames.

use crate::coordinates::angle::{acos_clamped, asin_clamped, clamp_latitude, normalize_degrees};
use crate::coordinates::types::{EclipticCoords, EquatorialCoords, HorizontalCoords, Spherical};
use crate::time::JulianDay;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const J2000_OBLIQUITY: f64 = 23.439_291_1;

/// Mean obliquity of the ecliptic for an instant (IAU 1980 polynomial), degrees.
pub fn mean_obliquity(t: JulianDay) -> f64 {
    let c = t.centuries_since_j2000();
    let arcsec = 21.448 - 46.8150 * c - 0.000_59 * c * c + 0.001_813 * c * c * c;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// Coordinate frame transformer bound to one obliquity value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformer {
    obliquity: f64,
}

impl CoordinateTransformer {
    /// Transformer using the J2000.0 obliquity.
    pub fn new() -> Self {
        Self::with_obliquity(J2000_OBLIQUITY)
    }

    pub fn with_obliquity(obliquity: f64) -> Self {
        Self { obliquity }
    }

    /// Transformer using the mean obliquity at `t`.
    pub fn for_time(t: JulianDay) -> Self {
        Self::with_obliquity(mean_obliquity(t))
    }

    pub fn obliquity(&self) -> f64 {
        self.obliquity
    }

    pub fn equatorial_to_ecliptic(&self, eq: &EquatorialCoords) -> EclipticCoords {
        let eps = self.obliquity.to_radians();
        let ra = eq.right_ascension.to_radians();
        let dec = eq.declination.to_radians();

        let lon = (ra.sin() * eps.cos() + dec.tan() * eps.sin()).atan2(ra.cos());
        let lat = asin_clamped(dec.sin() * eps.cos() - dec.cos() * eps.sin() * ra.sin());

        EclipticCoords {
            longitude: normalize_degrees(lon.to_degrees()),
            latitude: clamp_latitude(lat.to_degrees()),
            distance: eq.distance,
        }
    }

    pub fn ecliptic_to_equatorial(&self, ec: &EclipticCoords) -> EquatorialCoords {
        let eps = self.obliquity.to_radians();
        let lon = ec.longitude.to_radians();
        let lat = ec.latitude.to_radians();

        let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
        let dec = asin_clamped(lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin());

        EquatorialCoords {
            right_ascension: normalize_degrees(ra.to_degrees()),
            declination: clamp_latitude(dec.to_degrees()),
            distance: ec.distance,
        }
    }

    /// Equatorial to horizontal for an observer at `latitude` with local
    /// sidereal time `lst` (degrees).
    pub fn equatorial_to_horizontal(
        &self,
        eq: &EquatorialCoords,
        lst: f64,
        latitude: f64,
    ) -> HorizontalCoords {
        let h = (lst - eq.right_ascension).to_radians();
        let dec = eq.declination.to_radians();
        let phi = latitude.to_radians();

        let alt = asin_clamped(dec.sin() * phi.sin() + dec.cos() * phi.cos() * h.cos());
        let az = (-h.sin()).atan2(dec.tan() * phi.cos() - phi.sin() * h.cos());

        HorizontalCoords {
            azimuth: normalize_degrees(az.to_degrees()),
            altitude: clamp_latitude(alt.to_degrees()),
        }
    }

    pub fn horizontal_to_equatorial(
        &self,
        hz: &HorizontalCoords,
        lst: f64,
        latitude: f64,
    ) -> EquatorialCoords {
        let az = hz.azimuth.to_radians();
        let alt = hz.altitude.to_radians();
        let phi = latitude.to_radians();

        let dec = asin_clamped(alt.sin() * phi.sin() + alt.cos() * phi.cos() * az.cos());
        let h = (-az.sin()).atan2(alt.tan() * phi.cos() - phi.sin() * az.cos());

        EquatorialCoords {
            right_ascension: normalize_degrees(lst - h.to_degrees()),
            declination: clamp_latitude(dec.to_degrees()),
            distance: 0.0,
        }
    }

    /// Great-circle distance between two points, degrees in [0, 180].
    pub fn angular_separation<P: Spherical, Q: Spherical>(&self, p: &P, q: &Q) -> f64 {
        let (l1, b1) = (p.lon().to_radians(), p.lat().to_radians());
        let (l2, b2) = (q.lon().to_radians(), q.lat().to_radians());

        let cos_d = b1.sin() * b2.sin() + b1.cos() * b2.cos() * (l1 - l2).cos();
        acos_clamped(cos_d).to_degrees()
    }

    /// Bearing of `q` as seen from `p`, measured from north through east.
    pub fn position_angle<P: Spherical, Q: Spherical>(&self, p: &P, q: &Q) -> f64 {
        let b1 = p.lat().to_radians();
        let b2 = q.lat().to_radians();
        let dl = (q.lon() - p.lon()).to_radians();

        let pa = dl.sin().atan2(b1.cos() * b2.tan() - b1.sin() * dl.cos());
        normalize_degrees(pa.to_degrees())
    }
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new()
    }
}
