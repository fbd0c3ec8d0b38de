use crate::coordinates::normalize_degrees;
use crate::ephemeris::types::{Body, EphemerisError, Position};
use crate::time::JulianDay;

/// Source of body positions.
///
/// The built-in [`OrbitalPositionCalculator`](crate::ephemeris::OrbitalPositionCalculator)
/// implements this; a higher-precision ephemeris can be slotted in behind it.
pub trait PositionProvider: Send + Sync {
    fn position(&self, body: Body, time: JulianDay) -> Result<Position, EphemerisError>;

    /// Positions for several bodies at one instant. Fails on the first error.
    fn positions(&self, bodies: &[Body], time: JulianDay) -> Result<Vec<Position>, EphemerisError> {
        bodies.iter().map(|&b| self.position(b, time)).collect()
    }
}

/// Positions fixed at an epoch, advancing linearly at a given daily motion.
///
/// Useful for synthetic charts and tests where a full ephemeris is not wanted.
#[derive(Debug, Clone)]
pub struct StaticPositions {
    epoch: JulianDay,
    entries: Vec<(Body, f64, f64)>,
}

impl StaticPositions {
    pub fn new(epoch: JulianDay) -> Self {
        Self {
            epoch,
            entries: Vec::new(),
        }
    }

    /// Add (or replace) a body at `longitude` moving `daily_motion` degrees/day.
    pub fn with(mut self, body: Body, longitude: f64, daily_motion: f64) -> Self {
        self.entries.retain(|(b, _, _)| *b != body);
        self.entries.push((body, longitude, daily_motion));
        self
    }

    pub fn bodies(&self) -> Vec<Body> {
        self.entries.iter().map(|(b, _, _)| *b).collect()
    }
}

impl PositionProvider for StaticPositions {
    fn position(&self, body: Body, time: JulianDay) -> Result<Position, EphemerisError> {
        let &(_, longitude, motion) = self
            .entries
            .iter()
            .find(|(b, _, _)| *b == body)
            .ok_or(EphemerisError::BodyNotFound { body })?;
        Ok(Position {
            body,
            time,
            longitude: normalize_degrees(longitude + motion * (time - self.epoch)),
            latitude: 0.0,
            distance: 1.0,
        })
    }
}
