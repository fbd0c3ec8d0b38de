use crate::coordinates::EclipticCoords;
use crate::time::JulianDay;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during position calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("No orbital elements available for body: {body}")]
    BodyNotFound { body: Body },
    #[error("Unknown body name: {name}")]
    UnknownBody { name: String },
}

/// Bodies the calculator knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
            Body::Pluto => "♇",
        }
    }

    /// Rank by mean apparent speed, 0 = fastest (Moon).
    pub fn speed_rank(&self) -> u8 {
        match self {
            Body::Moon => 0,
            Body::Sun => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
        }
    }

    /// Sun and Moon
    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemerisError::UnknownBody {
                name: s.to_string(),
            })
    }
}

/// Geographic location; longitude is positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Ecliptic position of a body at an instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub body: Body,
    pub time: JulianDay,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance in AU
    pub distance: f64,
}

impl Position {
    pub fn ecliptic(&self) -> EclipticCoords {
        EclipticCoords::new(self.longitude, self.latitude, self.distance)
    }
}
