//! Shared angular utility functions for Tajika calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Minimal angular separation of two longitudes, in [0, 180].
pub fn arc_distance(a: f64, b: f64) -> f64 {
    normalize_to_pm180(a - b).abs()
}
