use crate::aspects::AspectSettings;
use crate::ephemeris::Body;
use crate::houses::HouseSystem;
use serde::{Deserialize, Serialize};

/// What a chart computation includes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Bodies to place, in output order
    pub bodies: Vec<Body>,
    pub house_system: HouseSystem,
    pub aspects: AspectSettings,
    /// Use modern (outer planet) rulerships when reporting sign rulers
    pub modern_rulers: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bodies: Body::ALL.to_vec(),
            house_system: HouseSystem::default(),
            aspects: AspectSettings::default(),
            modern_rulers: true,
        }
    }
}
