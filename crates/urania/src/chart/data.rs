use crate::coordinates::normalize_degrees;
use crate::ephemeris::{Body, Position};
use crate::zodiac::{Element, Quality, Sign, ZodiacPosition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One body as placed in a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub zodiac: ZodiacPosition,
    /// House number 1-12
    pub house: Option<u8>,
    /// Apparent motion in longitude (degrees/day)
    pub daily_motion: f64,
    pub retrograde: bool,
    pub ruler: Body,
}

impl Placement {
    pub fn body(&self) -> Body {
        self.position.body
    }

    pub fn sign(&self) -> Sign {
        self.zodiac.sign
    }
}

/// Count of placements per element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub fire: usize,
    pub earth: usize,
    pub air: usize,
    pub water: usize,
}

impl ElementBalance {
    pub fn add(&mut self, element: Element) {
        match element {
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Air => self.air += 1,
            Element::Water => self.water += 1,
        }
    }

    pub fn get(&self, element: Element) -> usize {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    /// Element with the most placements; ties go to the earlier element.
    pub fn dominant(&self) -> Option<Element> {
        let total = self.fire + self.earth + self.air + self.water;
        if total == 0 {
            return None;
        }
        crate::zodiac::ELEMENTS
            .iter()
            .copied()
            .fold(None, |best: Option<Element>, e| match best {
                Some(b) if self.get(b) >= self.get(e) => Some(b),
                _ => Some(e),
            })
    }
}

/// Count of placements per quality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBalance {
    pub cardinal: usize,
    pub fixed: usize,
    pub mutable: usize,
}

impl QualityBalance {
    pub fn add(&mut self, quality: Quality) {
        match quality {
            Quality::Cardinal => self.cardinal += 1,
            Quality::Fixed => self.fixed += 1,
            Quality::Mutable => self.mutable += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LunarPhase {
    New,
    Waxing,
    Full,
    Waning,
}

impl LunarPhase {
    /// Phase from the Moon's elongation east of the Sun (degrees).
    pub fn from_elongation(elongation: f64) -> LunarPhase {
        let e = normalize_degrees(elongation);
        if e < 45.0 || e >= 315.0 {
            LunarPhase::New
        } else if e < 135.0 {
            LunarPhase::Waxing
        } else if e < 225.0 {
            LunarPhase::Full
        } else {
            LunarPhase::Waning
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LunarPhase::New => "New Moon",
            LunarPhase::Waxing => "Waxing Moon",
            LunarPhase::Full => "Full Moon",
            LunarPhase::Waning => "Waning Moon",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunar_phase_bands() {
        assert_eq!(LunarPhase::from_elongation(10.0), LunarPhase::New);
        assert_eq!(LunarPhase::from_elongation(350.0), LunarPhase::New);
        assert_eq!(LunarPhase::from_elongation(90.0), LunarPhase::Waxing);
        assert_eq!(LunarPhase::from_elongation(180.0), LunarPhase::Full);
        assert_eq!(LunarPhase::from_elongation(270.0), LunarPhase::Waning);
        assert_eq!(LunarPhase::from_elongation(-90.0), LunarPhase::Waning);
    }

    #[test]
    fn test_dominant_element() {
        let mut balance = ElementBalance::default();
        assert_eq!(balance.dominant(), None);
        balance.add(Element::Water);
        balance.add(Element::Air);
        balance.add(Element::Water);
        assert_eq!(balance.dominant(), Some(Element::Water));
        balance.add(Element::Air);
        assert_eq!(balance.dominant(), Some(Element::Air));
    }
}
