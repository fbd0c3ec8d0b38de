//! Chart angles from local sidereal time.

use crate::coordinates::normalize_degrees;
use serde::{Deserialize, Serialize};

/// The four chart angles, in degrees of ecliptic longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
}

/// Ecliptic longitude culminating on the local meridian.
///
/// `lst` is the local sidereal time (RAMC) in degrees.
pub fn midheaven(lst: f64, obliquity: f64) -> f64 {
    let ramc = lst.to_radians();
    let mc = ramc.sin().atan2(ramc.cos() * obliquity.to_radians().cos());
    normalize_degrees(mc.to_degrees())
}

/// Ecliptic longitude rising on the eastern horizon.
pub fn ascendant(lst: f64, latitude: f64, obliquity: f64) -> f64 {
    let ramc = lst.to_radians();
    let eps = obliquity.to_radians();
    let phi = latitude.to_radians();
    let asc = ramc
        .cos()
        .atan2(-(ramc.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_degrees(asc.to_degrees())
}

pub fn angles(lst: f64, latitude: f64, obliquity: f64) -> Angles {
    let ascendant = ascendant(lst, latitude, obliquity);
    let midheaven = midheaven(lst, obliquity);
    Angles {
        ascendant,
        midheaven,
        descendant: normalize_degrees(ascendant + 180.0),
        imum_coeli: normalize_degrees(midheaven + 180.0),
    }
}
