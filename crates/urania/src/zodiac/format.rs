//! Degree/minute/second rendering of zodiac placements.

use crate::zodiac::mapper::ZodiacPosition;

/// Largest in-sign value that can be rendered, 29°59'59".
const MAX_SIGN_SECONDS: i64 = 30 * 3600 - 1;

/// Split an in-sign degree into whole degrees, minutes and rounded seconds.
pub fn to_dms(degree: f64) -> (u32, u32, u32) {
    let total = ((degree * 3600.0).round() as i64).clamp(0, MAX_SIGN_SECONDS);
    ((total / 3600) as u32, ((total % 3600) / 60) as u32, (total % 60) as u32)
}

/// Format as `15°30'0" Aries`.
pub fn format_dms(position: &ZodiacPosition) -> String {
    let (d, m, s) = to_dms(position.degree);
    format!("{}°{}'{}\" {}", d, m, s, position.sign.name())
}
