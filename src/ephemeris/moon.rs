use crate::angles::{cosd, scale_to_360};
use crate::constants::{Degree, Percent, MEAN_OBLIQUITY, MOON_DISTANCE_EARTH_RADII};
use crate::time::{to_julian_day, Instant};

use super::orbital_elements::MOON_ELEMENTS;
use super::sun::sun_position;
use super::{geocentric_position, orbit_position, BodyPosition};

/// Geocentric position of the Moon from its unperturbed mean orbit.
///
/// The ecliptic vector is expressed in Earth radii.
pub fn moon_position(instant: Instant) -> BodyPosition {
    let d = to_julian_day(instant);
    let orbit = orbit_position(&MOON_ELEMENTS.at(d));
    geocentric_position(orbit.ecliptic, MEAN_OBLIQUITY, orbit.kepler)
}

/// Approximate topocentric altitude of the Moon from its geocentric altitude.
///
/// The correction is `asin(1 / 60.336) · cos(alt)`, with the arc sine kept as the raw value
/// returned by the radian function (≈ 0.0166) rather than converted to degrees.
pub fn moon_topocentric_correction(altitude: Degree) -> Degree {
    altitude - (1.0 / MOON_DISTANCE_EARTH_RADII).asin() * cosd(altitude)
}

/// Approximate Moon "phase" in percent.
///
/// This is the Sun–Moon angular separation scaled linearly, `separation / 180 · 100`: 0 at new
/// moon, 100 at full moon. It is not the illuminated fraction.
pub fn moon_phase(instant: Instant) -> Percent {
    let sun = sun_position(instant);
    let moon = moon_position(instant);
    scale_to_360(sun.coord.separation(&moon.coord)) / 180.0 * 100.0
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_topocentric_correction() {
        assert_abs_diff_eq!(moon_topocentric_correction(90.0), 90.0, epsilon = 1e-12);
        let corrected = moon_topocentric_correction(0.0);
        assert_abs_diff_eq!(corrected, -0.016574, epsilon = 1e-5);
    }

    #[test]
    fn test_moon_phase_full_and_new() {
        // Full moon 2024-01-25T17:54 UTC, new moon 2024-01-11T11:57 UTC
        let full = moon_phase(Instant::from_unix_millis(1_706_205_240_000.0));
        let new = moon_phase(Instant::from_unix_millis(1_704_974_220_000.0));
        assert!(full > 90.0, "full moon phase = {full}");
        assert!(new < 10.0, "new moon phase = {new}");
    }

    #[test]
    fn test_moon_distance_range() {
        let pos = moon_position(Instant::from_unix_millis(1_706_205_240_000.0));
        let r = pos.ecliptic.norm();
        assert!((55.0..65.0).contains(&r));
        assert!((-30.0..30.0).contains(&pos.coord.dec));
    }
}
