//! Chart assembly: positions, zodiac placement, aspects, patterns and houses
//! for one instant and location.

pub mod data;
pub mod settings;
pub mod synastry;

pub use data::{ElementBalance, LunarPhase, Placement, QualityBalance};
pub use settings::ChartSettings;
pub use synastry::synastry;

use crate::aspects::{detect_patterns, Aspect, AspectCalculator, AspectPattern, AspectSet};
use crate::coordinates::{angle_difference, mean_obliquity, normalize_degrees};
use crate::ephemeris::{Body, EphemerisError, GeoLocation, Position, PositionProvider};
use crate::houses::{angles, Angles, House, HouseSystemCalculator};
use crate::time::{from_julian_day, local_sidereal_time, to_julian_day, JulianDay, TimeError};
use crate::zodiac::{sign_ruler, ZodiacMapper};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// A computed chart
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub datetime: DateTime<Utc>,
    pub julian_day: JulianDay,
    pub location: GeoLocation,
    pub sidereal_time: f64,
    pub obliquity: f64,
    pub angles: Angles,
    pub placements: Vec<Placement>,
    pub aspects: AspectSet,
    pub patterns: Vec<AspectPattern>,
    pub houses: Vec<House>,
}

impl Chart {
    pub fn compute(
        provider: &dyn PositionProvider,
        datetime: DateTime<Utc>,
        location: GeoLocation,
        settings: &ChartSettings,
    ) -> Result<Chart, ChartError> {
        let t = to_julian_day(datetime);
        Self::build(provider, datetime, t, location, settings)
    }

    /// As [`Chart::compute`], for an instant given as a Julian day.
    pub fn compute_at(
        provider: &dyn PositionProvider,
        t: JulianDay,
        location: GeoLocation,
        settings: &ChartSettings,
    ) -> Result<Chart, ChartError> {
        let datetime = from_julian_day(t)?;
        Self::build(provider, datetime, t, location, settings)
    }

    fn build(
        provider: &dyn PositionProvider,
        datetime: DateTime<Utc>,
        t: JulianDay,
        location: GeoLocation,
        settings: &ChartSettings,
    ) -> Result<Chart, ChartError> {
        let obliquity = mean_obliquity(t);
        let sidereal_time = local_sidereal_time(t, location.longitude);
        let angles = angles(sidereal_time, location.latitude, obliquity);

        let positions = provider.positions(&settings.bodies, t)?;

        let house_calc = HouseSystemCalculator::new(settings.house_system);
        let houses = house_calc.houses(angles.ascendant, angles.midheaven, location.latitude);
        let houses = house_calc.assign_bodies(&houses, &positions);

        let mapper = ZodiacMapper::new();
        let mut placements = Vec::with_capacity(positions.len());
        for position in &positions {
            let before = provider.position(position.body, t - 0.5)?;
            let after = provider.position(position.body, t + 0.5)?;
            let zodiac = mapper.sign_for(position.longitude);
            placements.push(Placement {
                position: *position,
                zodiac,
                house: house_calc.assign_body(position.longitude, &houses),
                daily_motion: angle_difference(before.longitude, after.longitude),
                retrograde: mapper.is_retrograde(
                    position.body,
                    before.longitude,
                    after.longitude,
                    1.0,
                ),
                ruler: sign_ruler(zodiac.sign, settings.modern_rulers),
            });
        }

        let calculator = AspectCalculator::with_settings(settings.aspects.clone());
        let aspects = calculator.calculate_all(&positions);
        let patterns = detect_patterns(&aspects, &positions);

        log::debug!(
            "Chart at {}: {} placements, {} aspects, {} patterns",
            t,
            placements.len(),
            aspects.len(),
            patterns.len()
        );

        Ok(Chart {
            datetime,
            julian_day: t,
            location,
            sidereal_time,
            obliquity,
            angles,
            placements,
            aspects: AspectSet::new(aspects),
            patterns,
            houses,
        })
    }

    pub fn placement(&self, body: Body) -> Option<&Placement> {
        self.placements.iter().find(|p| p.body() == body)
    }

    pub fn positions(&self) -> Vec<Position> {
        self.placements.iter().map(|p| p.position).collect()
    }

    pub fn aspects_between(&self, a: Body, b: Body) -> Option<&Aspect> {
        self.aspects.between(a, b)
    }

    pub fn aspects_for(&self, body: Body) -> Vec<&Aspect> {
        self.aspects.for_body(body)
    }

    pub fn element_balance(&self) -> ElementBalance {
        let mut balance = ElementBalance::default();
        for p in &self.placements {
            balance.add(p.sign().element());
        }
        balance
    }

    pub fn quality_balance(&self) -> QualityBalance {
        let mut balance = QualityBalance::default();
        for p in &self.placements {
            balance.add(p.sign().quality());
        }
        balance
    }

    /// Moon's elongation east of the Sun, [0, 360)
    pub fn lunar_elongation(&self) -> Option<f64> {
        let sun = self.placement(Body::Sun)?;
        let moon = self.placement(Body::Moon)?;
        Some(normalize_degrees(
            moon.position.longitude - sun.position.longitude,
        ))
    }

    pub fn lunar_phase(&self) -> Option<LunarPhase> {
        self.lunar_elongation().map(LunarPhase::from_elongation)
    }

    /// Bodies in house `number` (1-12)
    pub fn bodies_in_house(&self, number: u8) -> Vec<Body> {
        self.houses
            .iter()
            .find(|h| h.number == number)
            .map(|h| h.bodies.clone())
            .unwrap_or_default()
    }
}
