pub mod calculator;
pub mod catalogue;
pub mod patterns;
pub mod types;

pub use calculator::AspectCalculator;
pub use catalogue::{AspectDefinition, ASPECT_CATALOGUE};
pub use patterns::detect_patterns;
pub use types::{
    Aspect, AspectKind, AspectNature, AspectPattern, AspectSet, AspectSettings, PatternKind,
};

/// Detector name used across the chart API
pub type AspectDetector = AspectCalculator;
