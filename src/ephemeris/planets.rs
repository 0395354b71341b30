use crate::constants::MEAN_OBLIQUITY;
use crate::time::{to_julian_day, Instant};

use super::orbital_elements::{OrbitalElements, Planet};
use super::sun::sun_position;
use super::{geocentric_position, orbit_position, BodyPosition};

/// Geocentric position of a planet from an arbitrary element table.
///
/// The heliocentric ecliptic vector is shifted by the Sun's geocentric vector, then rotated by the
/// fixed 23.4° obliquity. The function is pure: identical inputs give bit-identical outputs.
///
/// Arguments
/// ---------
/// * `instant`: the UTC instant.
/// * `elements`: the planet's linear orbital elements.
///
/// Return
/// ------
/// * The geocentric [`BodyPosition`], ecliptic vector in AU.
pub fn planet_position_from_elements(instant: Instant, elements: &OrbitalElements) -> BodyPosition {
    let d = to_julian_day(instant);
    let heliocentric = orbit_position(&elements.at(d));
    let sun = sun_position(instant);

    geocentric_position(
        heliocentric.ecliptic + sun.ecliptic,
        MEAN_OBLIQUITY,
        heliocentric.kepler,
    )
}

/// Geocentric position of one of the tabulated planets.
pub fn planet_position(instant: Instant, planet: Planet) -> BodyPosition {
    planet_position_from_elements(instant, planet.elements())
}
