//! Continuous day count (Julian Day) and the calendar conversions around it.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// J2000.0 epoch: 2000-01-01 12:00:00 UTC.
pub const J2000: JulianDay = JulianDay(2_451_545.0);

/// Errors from time conversions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Julian day {jd} cannot be represented as a calendar date")]
    OutOfRange { jd: f64 },
}

/// Real-valued day count anchored at the Julian epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(pub f64);

impl JulianDay {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0 (negative before the epoch).
    pub fn days_since_j2000(self) -> f64 {
        self - J2000
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }
}

impl Add<f64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: f64) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub<f64> for JulianDay {
    type Output = JulianDay;

    fn sub(self, days: f64) -> JulianDay {
        JulianDay(self.0 - days)
    }
}

/// Difference between two instants, in days.
impl Sub for JulianDay {
    type Output = f64;

    fn sub(self, other: JulianDay) -> f64 {
        self.0 - other.0
    }
}

impl From<f64> for JulianDay {
    fn from(value: f64) -> Self {
        JulianDay(value)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// Convert a UTC instant to a Julian Day.
///
/// Gregorian calendar algorithm (Meeus, ch. 7): January and February count
/// as months 13 and 14 of the previous year, then the integer day number is
/// built from the year and month terms plus the Gregorian century
/// correction. Time of day, including sub-second precision, is added as a
/// fractional day.
pub fn to_julian_day(dt: DateTime<Utc>) -> JulianDay {
    let mut year = dt.year();
    let mut month = dt.month() as i32;

    let seconds = dt.hour() as f64 * 3600.0
        + dt.minute() as f64 * 60.0
        + dt.second() as f64
        + dt.nanosecond() as f64 / 1e9;
    let day = dt.day() as f64 + seconds / SECONDS_PER_DAY;

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    let jd = (365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        + day
        + b as f64
        - 1524.5;

    JulianDay(jd)
}

/// Convert a Julian Day back to a UTC instant.
///
/// Inverse of [`to_julian_day`]. The Gregorian correction is applied for
/// every date so the pair round-trips on the proleptic calendar. Time of
/// day is rounded to the nearest microsecond.
pub fn from_julian_day(t: JulianDay) -> Result<DateTime<Utc>, TimeError> {
    let out_of_range = || TimeError::OutOfRange { jd: t.0 };
    if !t.0.is_finite() {
        return Err(out_of_range());
    }

    let jd = t.0 + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    if year.abs() > i32::MAX as f64 {
        return Err(out_of_range());
    }

    let midnight = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(out_of_range)?;

    // Rounding can carry the time of day into the next date; Duration
    // addition handles the rollover.
    let micros = (f * MICROS_PER_DAY).round() as i64;
    let naive = midnight
        .checked_add_signed(Duration::microseconds(micros))
        .ok_or_else(out_of_range)?;

    Ok(Utc.from_utc_datetime(&naive))
}
