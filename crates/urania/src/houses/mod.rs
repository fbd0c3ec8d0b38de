//! House systems, chart angles and body-to-house assignment.

pub mod angles;
pub mod calculator;
pub mod types;

pub use angles::{angles, ascendant, midheaven, Angles};
pub use calculator::HouseSystemCalculator;
pub use types::{House, HouseError, HouseInfo, HouseSystem, HOUSE_INFO};
