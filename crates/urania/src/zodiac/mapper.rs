use crate::coordinates::{angle_difference, normalize_degrees, separation};
use crate::ephemeris::Body;
use crate::zodiac::signs::{Sign, SIGN_SPAN};
use serde::{Deserialize, Serialize};

/// Placement of a longitude within the zodiac
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: Sign,
    /// Degrees into the sign, [0, 30)
    pub degree: f64,
    /// Absolute ecliptic longitude, [0, 360)
    pub longitude: f64,
}

/// Retrograde thresholds (degrees/day) per body
const RETROGRADE_THRESHOLDS: &[(Body, f64)] = &[
    (Body::Mercury, -0.5),
    (Body::Venus, -0.3),
    (Body::Mars, -0.2),
    (Body::Jupiter, -0.1),
    (Body::Saturn, -0.05),
    (Body::Uranus, -0.02),
    (Body::Neptune, -0.01),
    (Body::Pluto, -0.008),
];

const DEFAULT_RETROGRADE_THRESHOLD: f64 = -0.1;

/// Maps ecliptic longitudes onto the tropical zodiac
pub struct ZodiacMapper;

impl ZodiacMapper {
    pub fn new() -> Self {
        Self
    }

    /// Sign and in-sign degree for a longitude (any real value).
    pub fn sign_for(&self, longitude: f64) -> ZodiacPosition {
        let longitude = normalize_degrees(longitude);
        let index = ((longitude / SIGN_SPAN).floor() as usize).min(11);
        ZodiacPosition {
            sign: Sign::from_index(index),
            degree: longitude - index as f64 * SIGN_SPAN,
            longitude,
        }
    }

    /// Absolute longitude of a zodiac position
    pub fn to_longitude(&self, position: &ZodiacPosition) -> f64 {
        normalize_degrees(position.sign.start_degree() + position.degree)
    }

    pub fn sign_by_name(&self, name: &str) -> Option<Sign> {
        name.parse().ok()
    }

    /// Shortest arc between two placements, [0, 180]
    pub fn aspect_angle(&self, a: &ZodiacPosition, b: &ZodiacPosition) -> f64 {
        separation(a.longitude, b.longitude)
    }

    /// Point halfway along the shorter arc between two longitudes
    pub fn midpoint(&self, a: f64, b: f64) -> f64 {
        normalize_degrees(a + angle_difference(a, b) / 2.0)
    }

    pub fn retrograde_threshold(&self, body: Body) -> f64 {
        RETROGRADE_THRESHOLDS
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, t)| *t)
            .unwrap_or(DEFAULT_RETROGRADE_THRESHOLD)
    }

    /// Whether apparent motion between two sampled longitudes `dt` days
    /// apart falls below the body's retrograde threshold.
    pub fn is_retrograde(&self, body: Body, lon0: f64, lon1: f64, dt: f64) -> bool {
        if dt == 0.0 || !dt.is_finite() {
            return false;
        }
        let motion = angle_difference(lon0, lon1) / dt;
        motion < self.retrograde_threshold(body)
    }

    /// Heuristic compatibility score between two signs, from the first
    /// sign's point of view (the quality relation is directed).
    pub fn compatibility(&self, a: Sign, b: Sign) -> u32 {
        let element_score = if a.element() == b.element() {
            40
        } else if a.element().complements(b.element()) {
            30
        } else {
            10
        };

        let quality_score = if a.quality() == b.quality() {
            20
        } else if a.quality().complements(b.quality()) {
            25
        } else {
            15
        };

        let steps = (a.index() as i32 - b.index() as i32).rem_euclid(12);
        let angle = steps.min(12 - steps) * 30;
        let angle_score = match angle {
            0 | 60 | 120 => 35,
            90 | 180 => 15,
            _ => 25,
        };

        element_score + quality_score + angle_score
    }
}

impl Default for ZodiacMapper {
    fn default() -> Self {
        Self::new()
    }
}
