//! Astrological and celestial-mechanics core: time scales, coordinate
//! frames, a low-precision analytic ephemeris, and the zodiac, aspect and
//! house layers built on top of it.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod coordinates;
pub mod demo;
pub mod ephemeris;
pub mod houses;
pub mod time;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectDetector, AspectKind, AspectSettings};
pub use chart::{Chart, ChartError, ChartSettings};
pub use coordinates::CoordinateTransformer;
pub use ephemeris::{Body, GeoLocation, OrbitalPositionCalculator, Position, PositionProvider};
pub use houses::{HouseSystem, HouseSystemCalculator};
pub use time::{JulianDay, TimeConverter};
pub use zodiac::{Sign, ZodiacMapper};
