//! # Degree-based trigonometry and angle reduction
//!
//! The whole engine works in **degrees** (and hours for right ascension displays), while the
//! standard library trigonometry works in radians. The helpers below wrap the native functions
//! once so that every formula in the ephemeris and visibility code can be written in the
//! degree form in which it is usually published.
//!
//! ## See also
//! ------------
//! * [`scale_to_360`] – Reduction of any finite angle into `[0, 360)`.
//! * [`compass_direction`] – 8-point label of an azimuth.

use crate::constants::{Degree, Hour, DEGRAD, DEG_TO_HOURS, HOURS_TO_DEG, RADEG};

/// Sine of an angle expressed in degrees.
#[inline]
pub fn sind(x: Degree) -> f64 {
    (x * RADEG).sin()
}

/// Cosine of an angle expressed in degrees.
#[inline]
pub fn cosd(x: Degree) -> f64 {
    (x * RADEG).cos()
}

/// Arc sine returning degrees. The argument is clamped to `[-1, 1]` so that rounding noise
/// just above 1 does not produce `NaN`.
#[inline]
pub fn asind(x: f64) -> Degree {
    x.clamp(-1.0, 1.0).asin() * DEGRAD
}

/// Arc cosine returning degrees, with the same clamping as [`asind`].
#[inline]
pub fn acosd(x: f64) -> Degree {
    x.clamp(-1.0, 1.0).acos() * DEGRAD
}

/// Four-quadrant arc tangent returning degrees in `(-180, 180]`.
#[inline]
pub fn atan2d(y: f64, x: f64) -> Degree {
    y.atan2(x) * DEGRAD
}

/// Reduce an angle in degrees to the interval `[0, 360)`.
///
/// Negative inputs are brought back by whole turns before the modulo, so `scale_to_360(-30.0)`
/// is `330.0`. The function is idempotent on its own output.
///
/// Arguments
/// ---------
/// * `x`: any finite angle in degrees.
///
/// Return
/// ------
/// * The equivalent angle in `[0, 360)`, or `NaN` for a non-finite input.
pub fn scale_to_360(x: Degree) -> Degree {
    if !x.is_finite() {
        return f64::NAN;
    }
    let v = x.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if v >= 360.0 {
        0.0
    } else {
        v
    }
}

/// Degrees of right ascension → hours.
#[inline]
pub fn deg_to_hours(x: Degree) -> Hour {
    x * DEG_TO_HOURS
}

/// Hours of right ascension → degrees.
#[inline]
pub fn hours_to_deg(x: Hour) -> Degree {
    x * HOURS_TO_DEG
}

/// Eight-point compass label of an azimuth measured from North through East.
///
/// Each label covers a 45° sector centred on its direction, so `N` spans `[337.5, 22.5)`.
pub fn compass_direction(azimuth: Degree) -> &'static str {
    const LABELS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = ((scale_to_360(azimuth) + 22.5) / 45.0).floor() as usize % 8;
    LABELS[sector]
}

#[cfg(test)]
mod angles_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_to_360() {
        assert_eq!(scale_to_360(-30.0), 330.0);
        assert_eq!(scale_to_360(360.0), 0.0);
        assert_eq!(scale_to_360(725.0), 5.0);
        assert_eq!(scale_to_360(-720.0), 0.0);
        assert_eq!(scale_to_360(-1e-20), 0.0);
        assert!(scale_to_360(f64::NAN).is_nan());
    }

    #[test]
    fn test_degree_trig() {
        assert_relative_eq!(sind(30.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(cosd(60.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(asind(0.5), 30.0, epsilon = 1e-9);
        assert_relative_eq!(acosd(1.0 + 1e-15), 0.0);
        assert_relative_eq!(atan2d(1.0, -1.0), 135.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hours() {
        assert_eq!(deg_to_hours(180.0), 12.0);
        assert_eq!(hours_to_deg(6.0), 90.0);
    }

    #[test]
    fn test_compass_direction() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(22.4), "N");
        assert_eq!(compass_direction(22.5), "NE");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(180.0), "S");
        assert_eq!(compass_direction(300.0), "NW");
        assert_eq!(compass_direction(350.0), "N");
        assert_eq!(compass_direction(-90.0), "W");
    }
}
