use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on a sphere expressed as (longitude-like, latitude-like) degrees.
pub trait Spherical {
    /// Angle along the fundamental plane (RA or ecliptic longitude).
    fn lon(&self) -> f64;
    /// Angle off the fundamental plane (declination or ecliptic latitude).
    fn lat(&self) -> f64;
}

/// Equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoords {
    /// Right ascension in degrees [0, 360)
    pub right_ascension: f64,
    /// Declination in degrees [-90, 90]
    pub declination: f64,
    /// Distance in AU (0 when unknown)
    pub distance: f64,
}

/// Ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoords {
    /// Longitude in degrees [0, 360)
    pub longitude: f64,
    /// Latitude in degrees [-90, 90]
    pub latitude: f64,
    /// Distance in AU (0 when unknown)
    pub distance: f64,
}

/// Horizontal (alt-az) coordinates. Azimuth is measured from north through east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoords {
    pub azimuth: f64,
    pub altitude: f64,
}

impl EquatorialCoords {
    pub fn new(right_ascension: f64, declination: f64, distance: f64) -> Self {
        Self {
            right_ascension,
            declination,
            distance,
        }
    }
}

impl EclipticCoords {
    pub fn new(longitude: f64, latitude: f64, distance: f64) -> Self {
        Self {
            longitude,
            latitude,
            distance,
        }
    }
}

impl HorizontalCoords {
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }
}

impl Spherical for EquatorialCoords {
    fn lon(&self) -> f64 {
        self.right_ascension
    }
    fn lat(&self) -> f64 {
        self.declination
    }
}

impl Spherical for EclipticCoords {
    fn lon(&self) -> f64 {
        self.longitude
    }
    fn lat(&self) -> f64 {
        self.latitude
    }
}

impl Spherical for HorizontalCoords {
    fn lon(&self) -> f64 {
        self.azimuth
    }
    fn lat(&self) -> f64 {
        self.altitude
    }
}

impl fmt::Display for EquatorialCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA: {:.4}°, Dec: {:.4}°, Dist: {:.6} AU",
            self.right_ascension, self.declination, self.distance
        )
    }
}

impl fmt::Display for EclipticCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lon: {:.4}°, Lat: {:.4}°, Dist: {:.6} AU",
            self.longitude, self.latitude, self.distance
        )
    }
}

impl fmt::Display for HorizontalCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Az: {:.4}°, Alt: {:.4}°", self.azimuth, self.altitude)
    }
}
