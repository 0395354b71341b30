use crate::angles::scale_to_360;
use crate::constants::Degree;
use crate::time::{to_julian_day, Instant};

use super::orbital_elements::{SUN_ELEMENTS, SUN_OBLIQUITY};
use super::{geocentric_position, orbit_position, BodyPosition};

/// Geocentric position of the Sun.
///
/// The ecliptic vector is in AU and lies in the ecliptic plane (`z = 0`); planets add it to
/// their heliocentric vectors to become geocentric.
///
/// Arguments
/// ---------
/// * `instant`: the UTC instant.
///
/// Return
/// ------
/// * A [`BodyPosition`] whose equatorial coordinates use the time-dependent obliquity
///   `23.4393 - 3.563e-7·d`.
pub fn sun_position(instant: Instant) -> BodyPosition {
    let d = to_julian_day(instant);
    let orbit = orbit_position(&SUN_ELEMENTS.at(d));
    geocentric_position(orbit.ecliptic, SUN_OBLIQUITY.at(d), orbit.kepler)
}

/// Mean longitude of the Sun `L = M + w`, reduced to `[0, 360)`.
///
/// `L + 180°` is the Greenwich sidereal time at 0h UT used by the sunrise/sunset solver.
pub fn sun_mean_longitude(instant: Instant) -> Degree {
    let elements = SUN_ELEMENTS.at(to_julian_day(instant));
    scale_to_360(elements.mean_anomaly + elements.perihelion)
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_near_march_equinox() {
        // 2024-03-20T03:06 UTC
        let t = Instant::from_unix_millis(1_710_903_960_000.0);
        let pos = sun_position(t);
        assert_abs_diff_eq!(pos.coord.dec, 0.0, epsilon = 0.1);
        let ra = if pos.coord.ra > 180.0 {
            pos.coord.ra - 360.0
        } else {
            pos.coord.ra
        };
        assert_abs_diff_eq!(ra, 0.0, epsilon = 0.2);
        assert!(pos.kepler.converged);
        assert_eq!(pos.ecliptic.z, 0.0);
    }

    #[test]
    fn test_sun_near_june_solstice() {
        // 2024-06-20T20:51 UTC
        let t = Instant::from_unix_millis(1_718_916_660_000.0);
        let pos = sun_position(t);
        assert_abs_diff_eq!(pos.coord.dec, 23.44, epsilon = 0.05);
        assert_abs_diff_eq!(pos.coord.ra, 90.0, epsilon = 0.2);
        assert_abs_diff_eq!(pos.ecliptic.norm(), 1.016, epsilon = 0.001);
    }

    #[test]
    fn test_mean_longitude_range() {
        let l = sun_mean_longitude(Instant::from_unix_millis(0.0));
        assert!((0.0..360.0).contains(&l));
    }
}
