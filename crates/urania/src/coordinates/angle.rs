//! Degree-based angle helpers shared across the crate.

/// Normalize an angle to [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let n = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Signed shortest arc from `from` to `to`, in (-180, 180].
pub fn angle_difference(from: f64, to: f64) -> f64 {
    let d = normalize_degrees(to - from);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Unsigned shortest arc between two longitudes, in [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    angle_difference(a, b).abs()
}

/// Clamp a latitude-like angle to [-90, 90].
pub fn clamp_latitude(angle: f64) -> f64 {
    angle.clamp(-90.0, 90.0)
}

/// `asin` with its argument clamped to [-1, 1] to absorb rounding noise.
pub(crate) fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `acos` with its argument clamped to [-1, 1].
pub(crate) fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
