use crate::ephemeris::Body;
use crate::zodiac::rulers::{modern_ruler, traditional_ruler};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZodiacError {
    #[error("Unknown zodiac sign: {name}")]
    UnknownSign { name: String },
}

/// Width of every sign in degrees
pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Element cycle starting at Aries
pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

/// Quality cycle starting at Aries
pub const QUALITIES: [Quality; 3] = [Quality::Cardinal, Quality::Fixed, Quality::Mutable];

impl Element {
    /// Fire pairs with Air, Earth with Water.
    pub fn complements(self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Fire, Element::Air)
                | (Element::Air, Element::Fire)
                | (Element::Earth, Element::Water)
                | (Element::Water, Element::Earth)
        )
    }
}

impl Quality {
    /// Directed relation: Fixed accepts either other quality, Cardinal and
    /// Mutable only accept each other.
    pub fn complements(self, other: Quality) -> bool {
        matches!(
            (self, other),
            (Quality::Cardinal, Quality::Mutable)
                | (Quality::Fixed, Quality::Cardinal)
                | (Quality::Fixed, Quality::Mutable)
                | (Quality::Mutable, Quality::Cardinal)
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The twelve tropical signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign at ordinal `index`, wrapping past Pisces.
    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Static record for this sign
    pub fn info(self) -> &'static ZodiacSign {
        &ZODIAC_SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn element(self) -> Element {
        ELEMENTS[self.index() % 4]
    }

    pub fn quality(self) -> Quality {
        QUALITIES[self.index() % 3]
    }

    pub fn start_degree(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }

    pub fn opposite(self) -> Sign {
        Sign::from_index(self.index() + 6)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ZodiacError::UnknownSign {
                name: s.to_string(),
            })
    }
}

/// Static description of one sign
#[derive(Debug, Clone, Serialize)]
pub struct ZodiacSign {
    pub sign: Sign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub quality: Quality,
    pub traditional_ruler: Body,
    pub modern_ruler: Body,
    pub start_degree: f64,
    pub span: f64,
}

const SIGN_NAMES: &[(&str, &str)] = &[
    ("Aries", "♈"),
    ("Taurus", "♉"),
    ("Gemini", "♊"),
    ("Cancer", "♋"),
    ("Leo", "♌"),
    ("Virgo", "♍"),
    ("Libra", "♎"),
    ("Scorpio", "♏"),
    ("Sagittarius", "♐"),
    ("Capricorn", "♑"),
    ("Aquarius", "♒"),
    ("Pisces", "♓"),
];

lazy_static! {
    /// All twelve signs in zodiacal order
    pub static ref ZODIAC_SIGNS: Vec<ZodiacSign> = SIGN_NAMES
        .iter()
        .enumerate()
        .map(|(i, &(name, symbol))| ZodiacSign {
            sign: Sign::ALL[i],
            name,
            symbol,
            element: ELEMENTS[i % 4],
            quality: QUALITIES[i % 3],
            traditional_ruler: traditional_ruler(Sign::ALL[i]),
            modern_ruler: modern_ruler(Sign::ALL[i]),
            start_degree: i as f64 * SIGN_SPAN,
            span: SIGN_SPAN,
        })
        .collect();
}
