//! Angle constants and wrapping helpers

use core::f64::consts::{PI, TAU};

/// Mathematical constants
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Wrap an angle in radians into the half-open interval (-π, π].
///
/// Uses the truncating float remainder, so any finite input is accepted.
/// An exact -π result is reported as π since both name the same heading.
///
/// # Example
/// ```
/// use absolute_sensor::wrap_to_pi;
/// use core::f64::consts::PI;
///
/// assert!((wrap_to_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// assert_eq!(wrap_to_pi(-PI), PI);
/// ```
pub fn wrap_to_pi(angle: f64) -> f64 {
    let mut wrapped = (angle + PI) % TAU;
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    wrapped -= PI;

    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}
