//! Sign rulers.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::ephemeris::Body;
use crate::zodiac::signs::Sign;

/// Traditional rulerships, Aries through Pisces
const TRADITIONAL_RULERS: &[Body] = &[
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius
    Body::Jupiter, // Pisces
];

/// Modern rulerships include the outer planets
const MODERN_RULERS: &[Body] = &[
    Body::Mars,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Pluto,   // Scorpio
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,  // Aquarius
    Body::Neptune, // Pisces
];

pub fn traditional_ruler(sign: Sign) -> Body {
    TRADITIONAL_RULERS[sign.index()]
}

pub fn modern_ruler(sign: Sign) -> Body {
    MODERN_RULERS[sign.index()]
}

/// Get sign ruler, choosing the rulership scheme
pub fn sign_ruler(sign: Sign, modern: bool) -> Body {
    if modern {
        modern_ruler(sign)
    } else {
        traditional_ruler(sign)
    }
}

/// Signs ruled by `body` under the chosen scheme
pub fn ruled_signs(body: Body, modern: bool) -> Vec<Sign> {
    Sign::ALL
        .iter()
        .copied()
        .filter(|&sign| sign_ruler(sign, modern) == body)
        .collect()
}
