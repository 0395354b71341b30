//! # Orbital element tables
//!
//! Low-precision mean orbital elements of the Sun (i.e. of the Earth's orbit seen from the
//! Earth), the Moon and the seven planets Mercury–Neptune. Every element is a linear function
//! of the day count `d` returned by [`to_julian_day`](crate::time::to_julian_day):
//!
//! ```text
//! value(d) = base + rate · d
//! ```
//!
//! Angles are in degrees, semi-major axes in AU (Earth radii for the Moon).
//!
//! ## See also
//! ------------
//! * [`orbit_position`](crate::ephemeris::orbit_position) – Propagation from an [`ElementSet`].
//! * [`Planet`] – Index-based selection of a planet table.

use std::fmt;

use crate::angles::scale_to_360;
use crate::constants::{DayCount, Degree};
use crate::planner_errors::PlannerError;

/// One orbital element as a constant plus a daily rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearElement {
    pub base: f64,
    pub rate: f64,
}

impl LinearElement {
    pub const fn new(base: f64, rate: f64) -> Self {
        LinearElement { base, rate }
    }

    pub const fn fixed(base: f64) -> Self {
        LinearElement { base, rate: 0.0 }
    }

    pub fn at(&self, d: DayCount) -> f64 {
        self.base + self.rate * d
    }
}

/// The six classical elements of a body, each varying linearly with time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node `N`
    pub node: LinearElement,
    /// Inclination to the ecliptic `i`
    pub inclination: LinearElement,
    /// Argument of perihelion `w`
    pub perihelion: LinearElement,
    /// Semi-major axis `a`
    pub semi_major_axis: LinearElement,
    /// Eccentricity `e`
    pub eccentricity: LinearElement,
    /// Mean anomaly `M`
    pub mean_anomaly: LinearElement,
}

/// Orbital elements evaluated at a given day, angles reduced to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSet {
    pub node: Degree,
    pub inclination: Degree,
    pub perihelion: Degree,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: Degree,
}

impl OrbitalElements {
    pub fn at(&self, d: DayCount) -> ElementSet {
        ElementSet {
            node: scale_to_360(self.node.at(d)),
            inclination: scale_to_360(self.inclination.at(d)),
            perihelion: scale_to_360(self.perihelion.at(d)),
            semi_major_axis: self.semi_major_axis.at(d),
            eccentricity: self.eccentricity.at(d),
            mean_anomaly: scale_to_360(self.mean_anomaly.at(d)),
        }
    }
}

/// Apparent orbit of the Sun around the Earth.
pub const SUN_ELEMENTS: OrbitalElements = OrbitalElements {
    node: LinearElement::fixed(0.0),
    inclination: LinearElement::fixed(0.0),
    perihelion: LinearElement::new(282.9404, 4.70935E-5),
    semi_major_axis: LinearElement::fixed(1.0),
    eccentricity: LinearElement::new(0.016709, -1.151E-9),
    mean_anomaly: LinearElement::new(356.0470, 0.9856002585),
};

/// Obliquity of the ecliptic used for the Sun only: `23.4393 - 3.563e-7 · d`.
pub const SUN_OBLIQUITY: LinearElement = LinearElement::new(23.4393, -3.563E-7);

/// Geocentric lunar orbit; the semi-major axis is in Earth radii.
pub const MOON_ELEMENTS: OrbitalElements = OrbitalElements {
    node: LinearElement::new(125.1228, -0.0529538083),
    inclination: LinearElement::fixed(5.1454),
    perihelion: LinearElement::new(318.0634, 0.1643573223),
    semi_major_axis: LinearElement::fixed(60.2666),
    eccentricity: LinearElement::fixed(0.054900),
    mean_anomaly: LinearElement::new(115.3654, 13.0649929509),
};

const PLANET_ELEMENTS: [OrbitalElements; 7] = [
    // Mercury
    OrbitalElements {
        node: LinearElement::new(48.3313, 0.0000324587),
        inclination: LinearElement::new(7.0047, 0.00000005),
        perihelion: LinearElement::new(29.1241, 0.0000101444),
        semi_major_axis: LinearElement::fixed(0.387098),
        eccentricity: LinearElement::new(0.205635, -0.000000000559),
        mean_anomaly: LinearElement::new(168.6562, 4.0923344368),
    },
    // Venus
    OrbitalElements {
        node: LinearElement::new(76.6799, 0.0000246590),
        inclination: LinearElement::new(3.3946, 0.0000000275),
        perihelion: LinearElement::new(54.8910, 0.0000138374),
        semi_major_axis: LinearElement::fixed(0.723330),
        eccentricity: LinearElement::new(0.006773, 0.000000001302),
        mean_anomaly: LinearElement::new(48.0052, 1.6021302244),
    },
    // Mars
    OrbitalElements {
        node: LinearElement::new(49.5574, 0.0000211081),
        inclination: LinearElement::new(1.8497, -0.0000000178),
        perihelion: LinearElement::new(286.5016, 0.0000292961),
        semi_major_axis: LinearElement::fixed(1.523688),
        eccentricity: LinearElement::new(0.093405, 0.000000002516),
        mean_anomaly: LinearElement::new(18.6021, 0.5240207766),
    },
    // Jupiter
    OrbitalElements {
        node: LinearElement::new(100.4542, 0.000026854),
        inclination: LinearElement::new(1.3030, -0.0000001557),
        perihelion: LinearElement::new(273.8777, 0.0000164505),
        semi_major_axis: LinearElement::fixed(5.20256),
        eccentricity: LinearElement::new(0.048498, 0.000000004469),
        mean_anomaly: LinearElement::new(19.8950, 0.0830853001),
    },
    // Saturn
    OrbitalElements {
        node: LinearElement::new(113.6634, 0.0000238980),
        inclination: LinearElement::new(2.4886, -0.0000001081),
        perihelion: LinearElement::new(339.3939, 0.0000297661),
        semi_major_axis: LinearElement::fixed(9.55475),
        eccentricity: LinearElement::new(0.055546, -0.000000009499),
        mean_anomaly: LinearElement::new(316.9670, 0.0334442282),
    },
    // Uranus
    OrbitalElements {
        node: LinearElement::new(74.0005, 0.000013978),
        inclination: LinearElement::new(0.7733, 0.000000019),
        perihelion: LinearElement::new(96.6612, 0.000030565),
        semi_major_axis: LinearElement::new(19.18171, -0.0000000155),
        eccentricity: LinearElement::new(0.047318, 0.00000000745),
        mean_anomaly: LinearElement::new(142.5905, 0.011725806),
    },
    // Neptune
    OrbitalElements {
        node: LinearElement::new(131.7806, 0.000030173),
        inclination: LinearElement::new(1.7700, -0.000000255),
        perihelion: LinearElement::new(272.8461, -0.000006027),
        semi_major_axis: LinearElement::new(30.05826, 0.00000003313),
        eccentricity: LinearElement::new(0.008606, 0.00000000215),
        mean_anomaly: LinearElement::new(260.2471, 0.005995147),
    },
];

/// The planets with a table entry, in table order (Mercury = 0 … Neptune = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Select a planet by its table index.
    ///
    /// Return
    /// ------
    /// * [`PlannerError::InvalidPlanetIndex`] for any index outside `0..=6`.
    pub fn from_index(index: usize) -> Result<Self, PlannerError> {
        Planet::ALL
            .get(index)
            .copied()
            .ok_or(PlannerError::InvalidPlanetIndex(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    pub fn elements(self) -> &'static OrbitalElements {
        &PLANET_ELEMENTS[self.index()]
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod orbital_elements_test {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(Planet::from_index(0), Ok(Planet::Mercury));
        assert_eq!(Planet::from_index(6), Ok(Planet::Neptune));
        assert_eq!(
            Planet::from_index(7),
            Err(PlannerError::InvalidPlanetIndex(7))
        );
        for (i, p) in Planet::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn test_elements_at_reduce_angles() {
        let set = MOON_ELEMENTS.at(10_000.0);
        for angle in [set.node, set.inclination, set.perihelion, set.mean_anomaly] {
            assert!((0.0..360.0).contains(&angle));
        }
        assert_eq!(set.semi_major_axis, 60.2666);
        assert_eq!(Planet::Jupiter.elements().semi_major_axis.base, 5.20256);
    }
}
