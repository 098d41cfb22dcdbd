//! # Angle Normalization Module
//!
//! Degree/radian conversion and wrap-around helpers used by sun-position
//! solvers. Every function here is pure and total over finite inputs;
//! non-finite inputs propagate through ordinary IEEE-754 arithmetic.
//!
//! ## Ranges
//!
//! - [`unwind_angle`] maps any angle onto a bearing in `[0, 360)`
//! - [`quadrant_shift_angle`] maps any angle onto the signed range `[-180, 180]`
//!
//! ## Tie-breaking
//!
//! [`quadrant_shift_angle`] rounds `angle / 360` with ties going toward
//! positive infinity (`floor(x + 0.5)`), not `f64::round`, which sends ties
//! away from zero. Inputs that land exactly on `180 + 360k` therefore shift
//! to `-180` on both sides of zero:
//!
//! ```rust
//! use miqat::angles::quadrant_shift_angle;
//!
//! assert_eq!(quadrant_shift_angle(540.0), -180.0);
//! assert_eq!(quadrant_shift_angle(-540.0), -180.0);
//! ```

use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG};
use std::f64::consts::PI;

/// Converts an angle in degrees to radians
///
/// ```rust
/// use miqat::angles::degrees_to_radians;
///
/// assert_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
/// ```
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees * PI) / 180.0
}

/// Converts an angle in radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians * 180.0) / PI
}

/// Floor-based modulo returning a value in `[0, max)`
///
/// Unlike the `%` operator, negative inputs wrap onto the positive range:
/// `normalize_to_scale(-10.0, 360.0)` is `350.0`.
///
/// # Arguments
///
/// * `value` - The value to normalize
/// * `max` - The scale; must be positive, other values are not supported
///
/// # Examples
///
/// ```rust
/// use miqat::angles::normalize_to_scale;
///
/// assert_eq!(normalize_to_scale(-10.0, 360.0), 350.0);
/// assert_eq!(normalize_to_scale(25.0, 24.0), 1.0);
/// ```
pub fn normalize_to_scale(value: f64, max: f64) -> f64 {
    value - max * (value / max).floor()
}

/// Wraps an angle in degrees onto a bearing in `[0, 360)`
pub fn unwind_angle(angle: f64) -> f64 {
    normalize_to_scale(angle, FULL_CIRCLE_DEG)
}

/// Shifts an angle in degrees onto the signed range `[-180, 180]`
///
/// Angles already inside `[-180, 180]` are returned untouched so that
/// canonical inputs never pick up rounding drift. Anything else has the
/// nearest multiple of 360 removed, with ties resolved toward positive
/// infinity (see the module docs).
///
/// # Examples
///
/// ```rust
/// use miqat::angles::quadrant_shift_angle;
///
/// assert_eq!(quadrant_shift_angle(180.0), 180.0);
/// assert_eq!(quadrant_shift_angle(270.0), -90.0);
/// assert_eq!(quadrant_shift_angle(-190.0), 170.0);
/// ```
pub fn quadrant_shift_angle(angle: f64) -> f64 {
    if (-HALF_CIRCLE_DEG..=HALF_CIRCLE_DEG).contains(&angle) {
        return angle;
    }
    angle - FULL_CIRCLE_DEG * round_half_up(angle / FULL_CIRCLE_DEG)
}

// Ties go toward +inf: 1.5 -> 2, -1.5 -> -1.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
