pub mod calculator;
pub mod elements;
pub mod kepler;
pub mod provider;
pub mod types;

pub use calculator::OrbitalPositionCalculator;
pub use elements::{elements_for, OrbitalElements, ORBITAL_ELEMENTS};
pub use kepler::{solve_kepler, true_anomaly};
pub use provider::{PositionProvider, StaticPositions};
pub use types::{Body, EphemerisError, GeoLocation, Position};
