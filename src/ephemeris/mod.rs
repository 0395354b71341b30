//! # Low-precision ephemerides of the Sun, the Moon and the planets
//!
//! All bodies share one algorithmic skeleton, implemented once in [`orbit_position`]:
//!
//! 1. evaluate the linear orbital elements at the day count `d`
//!    ([`to_julian_day`](crate::time::to_julian_day)),
//! 2. solve Kepler's equation for the eccentric anomaly ([`solve_kepler`]),
//! 3. build the rectangular position in the orbital plane,
//! 4. rotate by the ascending node, inclination and perihelion argument into the ecliptic frame.
//!
//! The callers then differ only in the frame origin and in the obliquity used to reach the
//! equatorial frame:
//!
//! | Body | Origin of the propagated orbit | Obliquity |
//! |------|--------------------------------|-----------|
//! | Sun | geocentric by construction | `23.4393 - 3.563e-7·d` |
//! | Moon | geocentric by construction | fixed 23.4° |
//! | Planets | heliocentric, the solar vector is added | fixed 23.4° |
//!
//! The Moon ignores every perturbation term: its position is accurate to a degree or two.
//!
//! ## See also
//! ------------
//! * [`sun_position`], [`moon_position`], [`planet_position`] – Public entry points.
//! * [`Body`] – Uniform access used by the visibility series and the body paths.

pub mod moon;
pub mod orbital_elements;
pub mod planets;
pub mod sun;

use nalgebra::Vector3;

use crate::angles::{atan2d, cosd, sind};
use crate::constants::Degree;
use crate::kepler::{solve_kepler, KeplerSolution};
use crate::ref_system::{
    ecliptic_to_equatorial, orbital_plane_to_ecliptic, vector_to_equatorial, EquatorialCoordinate,
};
use crate::time::Instant;

pub use moon::{moon_phase, moon_position, moon_topocentric_correction};
pub use orbital_elements::{ElementSet, LinearElement, OrbitalElements, Planet};
pub use planets::{planet_position, planet_position_from_elements};
pub use sun::{sun_mean_longitude, sun_position};

/// Position of a body propagated from its orbital elements, in the body's own frame origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Rectangular ecliptic coordinates
    pub ecliptic: Vector3<f64>,
    /// Distance from the frame origin
    pub distance: f64,
    /// True anomaly in degrees
    pub true_anomaly: Degree,
    pub kepler: KeplerSolution,
}

/// Geocentric position of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub coord: EquatorialCoordinate,
    /// Geocentric rectangular ecliptic coordinates
    pub ecliptic: Vector3<f64>,
    /// Solution of the Kepler iteration for the body's own orbit
    pub kepler: KeplerSolution,
}

/// Propagate a set of orbital elements to a rectangular ecliptic position.
///
/// Arguments
/// ---------
/// * `elements`: orbital elements already evaluated at the wanted day.
///
/// Return
/// ------
/// * The [`OrbitState`] relative to the focus of the orbit, with the Kepler solution so that a
///   capped iteration stays observable.
pub fn orbit_position(elements: &ElementSet) -> OrbitState {
    let a = elements.semi_major_axis;
    let e = elements.eccentricity;

    let kepler = solve_kepler(elements.mean_anomaly, e);
    let ecc_anomaly = kepler.eccentric_anomaly;

    let x = a * (cosd(ecc_anomaly) - e);
    let y = a * (1.0 - e * e).sqrt() * sind(ecc_anomaly);

    let r = x.hypot(y);
    let v = atan2d(y, x);
    let u = v + elements.perihelion;

    let in_plane = Vector3::new(r * cosd(u), r * sind(u), 0.0);
    OrbitState {
        ecliptic: orbital_plane_to_ecliptic(&in_plane, elements.node, elements.inclination),
        distance: r,
        true_anomaly: v,
        kepler,
    }
}

/// Geocentric ecliptic vector → [`BodyPosition`].
pub(crate) fn geocentric_position(
    ecliptic: Vector3<f64>,
    obliquity: Degree,
    kepler: KeplerSolution,
) -> BodyPosition {
    let equatorial = ecliptic_to_equatorial(&ecliptic, obliquity);
    BodyPosition {
        coord: vector_to_equatorial(&equatorial),
        ecliptic,
        kepler,
    }
}

/// A body whose position the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
    Planet(Planet),
}

impl Body {
    pub fn position(self, instant: Instant) -> BodyPosition {
        match self {
            Body::Sun => sun_position(instant),
            Body::Moon => moon_position(instant),
            Body::Planet(p) => planet_position(instant, p),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Planet(p) => p.name(),
        }
    }
}
