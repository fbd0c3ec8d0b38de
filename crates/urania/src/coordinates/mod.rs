//! Coordinate frames and angle arithmetic.

pub mod angle;
pub mod transform;
pub mod types;

pub use angle::{angle_difference, clamp_latitude, normalize_degrees, separation};
pub use transform::{mean_obliquity, CoordinateTransformer, J2000_OBLIQUITY};
pub use types::{EclipticCoords, EquatorialCoords, HorizontalCoords, Spherical};
