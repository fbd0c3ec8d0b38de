//! Difference between terrestrial and universal time (delta T).
//!
//! Piecewise polynomial fits over year ranges. The segments are not joined
//! smoothly, so values jump at the 1620, 1900 and 2000 boundaries.

/// Delta T in seconds for a (fractional) calendar year.
pub fn delta_t(year: f64) -> f64 {
    if year < 1620.0 {
        let t = (year - 1600.0) / 100.0;
        120.0 - 0.9808 * t - 2.532 * t.powi(2) + 0.1427 * t.powi(3) - 0.0288 * t.powi(4)
    } else if year < 1900.0 {
        let t = (year - 1900.0) / 100.0;
        -2.79 + 149.4119 * t - 598.939 * t.powi(2) + 6196.6 * t.powi(3) - 19700.0 * t.powi(4)
    } else if year < 2000.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year <= 2100.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        let t = (year - 2000.0) / 100.0;
        -20.0 + 32.0 * t.powi(2)
    }
}
