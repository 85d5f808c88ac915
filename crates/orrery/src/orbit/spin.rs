//! Self-rotation bookkeeping.

/// Degrees of self-rotation applied per simulation tick.
///
/// One full turn every `rotation_period` ticks; a negative period spins
/// retrograde. The result is not wrapped — see [`wrap_degrees`].
pub fn spin_angle_delta(rotation_period: f64) -> f64 {
    360.0 / rotation_period
}

/// Wrap an accumulated angle into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
