//! Aspect catalogue: exact angles, default orbs and natures.

use crate::aspects::types::{AspectKind, AspectNature};
use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub name: &'static str,
    pub angle: f64,
    pub orb: f64,
    pub nature: AspectNature,
    pub symbol: &'static str,
    pub description: &'static str,
}

const fn def(
    kind: AspectKind,
    name: &'static str,
    angle: f64,
    orb: f64,
    nature: AspectNature,
    symbol: &'static str,
    description: &'static str,
) -> AspectDefinition {
    AspectDefinition {
        kind,
        name,
        angle,
        orb,
        nature,
        symbol,
        description,
    }
}

lazy_static! {
    /// Ordered catalogue; earlier entries win ties.
    pub static ref ASPECT_CATALOGUE: Vec<AspectDefinition> = vec![
        def(AspectKind::Conjunction, "Conjunction", 0.0, 8.0, AspectNature::Neutral, "☌",
            "Union of energies, intensity, new beginnings"),
        def(AspectKind::Sextile, "Sextile", 60.0, 6.0, AspectNature::Harmonious, "⚹",
            "Opportunity, cooperation, creative potential"),
        def(AspectKind::Square, "Square", 90.0, 8.0, AspectNature::Challenging, "□",
            "Tension, conflict, catalyst for growth"),
        def(AspectKind::Trine, "Trine", 120.0, 8.0, AspectNature::Harmonious, "△",
            "Flow, ease, natural talent, harmony"),
        def(AspectKind::Opposition, "Opposition", 180.0, 8.0, AspectNature::Challenging, "☍",
            "Polarity, awareness, balance needed"),
        def(AspectKind::Semisextile, "Semisextile", 30.0, 2.0, AspectNature::Minor, "⚺",
            "Mild connection, subtle influence"),
        def(AspectKind::Semisquare, "Semisquare", 45.0, 2.0, AspectNature::Minor, "∠",
            "Mild friction, minor irritation"),
        def(AspectKind::Sesquiquadrate, "Sesquiquadrate", 135.0, 2.0, AspectNature::Minor, "⚼",
            "Adjustment needed, minor challenge"),
        def(AspectKind::Quincunx, "Quincunx", 150.0, 2.0, AspectNature::Minor, "⚻",
            "Adjustment, adaptation, awkward energy"),
        def(AspectKind::Quintile, "Quintile", 72.0, 1.0, AspectNature::Minor, "Q",
            "Creativity, special talent, artistic expression"),
        def(AspectKind::Biquintile, "Biquintile", 144.0, 1.0, AspectNature::Minor, "bQ",
            "Enhanced creativity, artistic mastery"),
    ];
}

impl AspectKind {
    pub const ALL: [AspectKind; 11] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
        AspectKind::Semisextile,
        AspectKind::Semisquare,
        AspectKind::Sesquiquadrate,
        AspectKind::Quincunx,
        AspectKind::Quintile,
        AspectKind::Biquintile,
    ];

    pub fn definition(self) -> &'static AspectDefinition {
        // Catalogue rows are in enum order.
        &ASPECT_CATALOGUE[self as usize]
    }

    pub fn angle(self) -> f64 {
        self.definition().angle
    }

    pub fn default_orb(self) -> f64 {
        self.definition().orb
    }

    pub fn nature(self) -> AspectNature {
        self.definition().nature
    }

    pub fn symbol(self) -> &'static str {
        self.definition().symbol
    }

    pub fn description(self) -> &'static str {
        self.definition().description
    }

    pub fn is_major(self) -> bool {
        self.nature() != AspectNature::Minor
    }

    pub fn from_name(name: &str) -> Option<AspectKind> {
        let wanted = name.trim();
        AspectKind::ALL
            .iter()
            .copied()
            .find(|k| k.definition().name.eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_enum() {
        for (i, kind) in AspectKind::ALL.iter().enumerate() {
            assert_eq!(ASPECT_CATALOGUE[i].kind, *kind);
        }
    }

    #[test]
    fn test_every_kind_has_description() {
        for kind in AspectKind::ALL {
            assert!(!kind.description().is_empty(), "{:?}", kind);
        }
        assert_eq!(AspectKind::Square.description(), "Tension, conflict, catalyst for growth");
    }

    #[test]
    fn test_major_aspects() {
        let majors: Vec<_> = AspectKind::ALL.iter().filter(|k| k.is_major()).collect();
        assert_eq!(majors.len(), 5);
        assert!(!AspectKind::Quincunx.is_major());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AspectKind::from_name("trine"), Some(AspectKind::Trine));
        assert_eq!(AspectKind::from_name("Sesquiquadrate"), Some(AspectKind::Sesquiquadrate));
        assert_eq!(AspectKind::from_name("septile"), None);
    }
}
