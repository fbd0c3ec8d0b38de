//! Time conversions: calendar instants, Julian days, sidereal time, delta T.

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::delta_t;
pub use julian::{from_julian_day, to_julian_day, JulianDay, TimeError, DAYS_PER_CENTURY, J2000};
pub use sidereal::{local_sidereal_time, sidereal_time};

use chrono::{DateTime, Utc};

/// Facade bundling the time conversions behind one value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeConverter;

impl TimeConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_julian_day(&self, dt: DateTime<Utc>) -> JulianDay {
        to_julian_day(dt)
    }

    pub fn from_julian_day(&self, t: JulianDay) -> Result<DateTime<Utc>, TimeError> {
        from_julian_day(t)
    }

    pub fn centuries_since_j2000(&self, t: JulianDay) -> f64 {
        t.centuries_since_j2000()
    }

    pub fn sidereal_time(&self, t: JulianDay) -> f64 {
        sidereal_time(t)
    }

    pub fn local_sidereal_time(&self, t: JulianDay, east_longitude: f64) -> f64 {
        local_sidereal_time(t, east_longitude)
    }

    pub fn delta_t(&self, year: f64) -> f64 {
        delta_t(year)
    }
}
