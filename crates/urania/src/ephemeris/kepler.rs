//! Kepler's equation and the orbit-plane to ecliptic rotation.

use crate::ephemeris::elements::OrbitalElements;
use crate::time::JulianDay;
use std::f64::consts::TAU;

pub const KEPLER_TOLERANCE: f64 = 1e-10;
pub const KEPLER_MAX_ITERATIONS: usize = 10;

/// Solve `E - e sin E = M` by Newton-Raphson (radians).
///
/// Starts from `E = M` and stops once the correction drops below
/// [`KEPLER_TOLERANCE`] or after [`KEPLER_MAX_ITERATIONS`] steps, returning
/// the last iterate either way.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (e_anom - eccentricity * e_anom.sin() - mean_anomaly)
            / (1.0 - eccentricity * e_anom.cos());
        e_anom -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return e_anom;
        }
    }
    log::debug!(
        "Kepler solve hit iteration ceiling (M = {}, e = {})",
        mean_anomaly,
        eccentricity
    );
    e_anom
}

/// True anomaly from eccentric anomaly (radians).
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Ecliptic rectangular position (AU) of the orbiting body at `t`.
pub fn orbit_vector(el: &OrbitalElements, t: JulianDay) -> [f64; 3] {
    let m = (el.mean_anomaly + el.daily_motion * t.days_since_j2000())
        .to_radians()
        .rem_euclid(TAU);
    let e_anom = solve_kepler(m, el.eccentricity);
    let v = true_anomaly(e_anom, el.eccentricity);
    let r = el.semi_major_axis * (1.0 - el.eccentricity * e_anom.cos());

    // In-plane position, then rotate by periapsis, inclination, node.
    let u = v + el.periapsis.to_radians();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = el.inclination.to_radians().sin_cos();
    let (sin_node, cos_node) = el.ascending_node.to_radians().sin_cos();

    [
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * sin_u * sin_i,
    ]
}

/// Spherical (longitude, latitude, distance) of a rectangular vector.
pub fn to_spherical(v: [f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = v;
    let lon = y.atan2(x).to_degrees();
    let lat = z.atan2(x.hypot(y)).to_degrees();
    let dist = (x * x + y * y + z * z).sqrt();
    (lon, lat, dist)
}
