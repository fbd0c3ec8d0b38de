//! Mean orbital elements at J2000.0 for the supported bodies.

use crate::ephemeris::types::Body;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keplerian elements of one orbit. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (AU)
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    /// Longitude of the ascending node
    pub ascending_node: f64,
    /// Argument of periapsis
    pub periapsis: f64,
    /// Mean anomaly at J2000.0
    pub mean_anomaly: f64,
    /// Mean motion (degrees/day)
    pub daily_motion: f64,
}

impl OrbitalElements {
    const fn new(a: f64, e: f64, i: f64, node: f64, peri: f64, m0: f64, n: f64) -> Self {
        Self {
            semi_major_axis: a,
            eccentricity: e,
            inclination: i,
            ascending_node: node,
            periapsis: peri,
            mean_anomaly: m0,
            daily_motion: n,
        }
    }
}

const ELEMENT_TABLE: &[(Body, OrbitalElements)] = &[
    (Body::Sun, OrbitalElements::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.9856)),
    (Body::Moon, OrbitalElements::new(0.00257, 0.0549, 5.145, 125.1228, 318.0634, 115.3654, 13.1764)),
    (Body::Mercury, OrbitalElements::new(0.3871, 0.2056, 7.005, 48.331, 29.124, 174.796, 4.0923)),
    (Body::Venus, OrbitalElements::new(0.7233, 0.0067, 3.395, 76.680, 54.884, 50.115, 1.6021)),
    (Body::Mars, OrbitalElements::new(1.5237, 0.0934, 1.850, 49.558, 286.502, 19.373, 0.5240)),
    (Body::Jupiter, OrbitalElements::new(5.2026, 0.0484, 1.303, 100.464, 273.867, 20.020, 0.0831)),
    (Body::Saturn, OrbitalElements::new(9.5549, 0.0555, 2.485, 113.665, 339.392, 317.020, 0.0334)),
    (Body::Uranus, OrbitalElements::new(19.2184, 0.0463, 0.773, 74.006, 96.998, 142.238, 0.0117)),
    (Body::Neptune, OrbitalElements::new(30.1104, 0.0095, 1.770, 131.784, 276.336, 256.228, 0.0060)),
    (Body::Pluto, OrbitalElements::new(39.4821, 0.2488, 17.16, 110.299, 113.834, 14.882, 0.0040)),
];

lazy_static! {
    /// Default element set, one record per body.
    pub static ref ORBITAL_ELEMENTS: HashMap<Body, OrbitalElements> =
        ELEMENT_TABLE.iter().copied().collect();
}

/// Look up the default elements for a body
pub fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    ORBITAL_ELEMENTS.get(&body)
}
