//! Angle normalization helpers.
//!
//! Every longitude comparison in the engine goes through these; they are
//! total functions with no failure modes.

/// Normalize an angle to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 when deg is a tiny negative number
    if d >= 360.0 { d - 360.0 } else { d }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Minimal angular separation of two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_deg(a - b);
    if diff > 180.0 { 360.0 - diff } else { diff }
}
