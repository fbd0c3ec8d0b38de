use crate::coordinates::normalize_degrees;
use crate::ephemeris::elements::{OrbitalElements, ORBITAL_ELEMENTS};
use crate::ephemeris::kepler::{orbit_vector, to_spherical};
use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::types::{Body, EphemerisError, Position};
use crate::time::JulianDay;
use std::collections::HashMap;

const KM_PER_AU: f64 = 149_597_870.7;

/// Low-precision analytic ephemeris.
///
/// Sun and Moon come from short periodic series; the planets from Keplerian
/// elements, re-centred on the Earth for [`PositionProvider::position`].
#[derive(Debug, Clone)]
pub struct OrbitalPositionCalculator {
    elements: HashMap<Body, OrbitalElements>,
}

impl OrbitalPositionCalculator {
    /// Calculator over the built-in element table
    pub fn new() -> Self {
        Self::with_elements(ORBITAL_ELEMENTS.clone())
    }

    /// Calculator over a caller-supplied element table
    pub fn with_elements(elements: HashMap<Body, OrbitalElements>) -> Self {
        Self { elements }
    }

    pub fn elements(&self, body: Body) -> Result<&OrbitalElements, EphemerisError> {
        self.elements
            .get(&body)
            .ok_or(EphemerisError::BodyNotFound { body })
    }

    /// Raw Keplerian output for `body`, centred on the orbit's focus.
    pub fn heliocentric(&self, body: Body, t: JulianDay) -> Result<Position, EphemerisError> {
        let el = self.elements(body)?;
        let (lon, lat, dist) = to_spherical(orbit_vector(el, t));
        Ok(Position {
            body,
            time: t,
            longitude: normalize_degrees(lon),
            latitude: lat,
            distance: dist,
        })
    }

    /// Geocentric ecliptic position.
    pub fn calculate(&self, body: Body, t: JulianDay) -> Result<Position, EphemerisError> {
        let el = self.elements(body)?;
        let (longitude, latitude, distance) = match body {
            Body::Sun => sun_series(t),
            Body::Moon => moon_series(t),
            _ => {
                let planet = orbit_vector(el, t);
                let sun = sun_vector(t);
                // Earth's heliocentric vector is the negated geocentric Sun.
                to_spherical([planet[0] + sun[0], planet[1] + sun[1], planet[2] + sun[2]])
            }
        };

        log::trace!("{} at {}: lon {:.4}", body, t, longitude);

        Ok(Position {
            body,
            time: t,
            longitude: normalize_degrees(longitude),
            latitude,
            distance,
        })
    }
}

impl Default for OrbitalPositionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionProvider for OrbitalPositionCalculator {
    fn position(&self, body: Body, time: JulianDay) -> Result<Position, EphemerisError> {
        self.calculate(body, time)
    }
}

/// Geocentric Sun: (longitude, latitude, distance AU).
fn sun_series(t: JulianDay) -> (f64, f64, f64) {
    let c = t.centuries_since_j2000();
    let l0 = 280.466_46 + 36_000.769_83 * c + 0.000_303_2 * c * c;
    let m = (357.529_11 + 35_999.050_29 * c - 0.000_153_7 * c * c).to_radians();

    let center = (1.914_602 - 0.004_817 * c - 0.000_014 * c * c) * m.sin()
        + (0.019_993 - 0.000_101 * c) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let distance = 1.000_001_018 * (1.0 - 0.016_711_23 * m.cos() - 0.000_14 * (2.0 * m).cos());

    (normalize_degrees(l0 + center), 0.0, distance)
}

fn sun_vector(t: JulianDay) -> [f64; 3] {
    let (lon, _, dist) = sun_series(t);
    let (s, c) = lon.to_radians().sin_cos();
    [dist * c, dist * s, 0.0]
}

/// Geocentric Moon: (longitude, latitude, distance AU).
fn moon_series(t: JulianDay) -> (f64, f64, f64) {
    let c = t.centuries_since_j2000();
    let lp = 218.316_447_7 + 481_267.881_234_21 * c;
    let d = (297.850_192_1 + 445_267.111_403_4 * c).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * c).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * c).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * c).to_radians();

    let lon = lp + 6.289 * mp.sin() + 1.274 * (2.0 * d - mp).sin() + 0.658 * (2.0 * d).sin()
        + 0.214 * (2.0 * mp).sin()
        - 0.186 * m.sin()
        - 0.114 * (2.0 * f).sin();
    let lat = 5.128 * f.sin() + 0.281 * (mp + f).sin() + 0.278 * (mp - f).sin()
        + 0.173 * (2.0 * d - f).sin();
    let km = 385_001.0 - 20_905.0 * mp.cos() - 3_699.0 * (2.0 * d - mp).cos()
        - 2_956.0 * (2.0 * d).cos();

    (normalize_degrees(lon), lat, km / KM_PER_AU)
}
