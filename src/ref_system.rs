//! # Reference systems: equatorial coordinates and frame rotations
//!
//! Positions are propagated as rectangular vectors in the **ecliptic** frame and published as
//! **equatorial** right ascension / declination. This module holds the value type for the
//! latter and the rotations that connect the two frames.
//!
//! ## See also
//! ------------
//! * [`rotmt`] – Elementary rotation about one principal axis.
//! * [`ecliptic_to_equatorial`] – Rotation by the obliquity of the ecliptic.
//! * [`angular_distance`] – Great-circle distance between two positions.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::angles::{acosd, atan2d, cosd, deg_to_hours, scale_to_360, sind};
use crate::constants::{Degree, Hour, Radian, RADEG};
use crate::planner_errors::PlannerError;

/// Right ascension and declination, both in degrees.
///
/// `ra` is kept in `[0, 360)` by the ephemeris code, but grid geometry may produce values just
/// outside that range near RA 0h; they are left unwrapped so that panel polygons stay
/// contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EquatorialCoordinate {
    pub ra: Degree,
    pub dec: Degree,
}

impl EquatorialCoordinate {
    pub const fn new(ra: Degree, dec: Degree) -> Self {
        EquatorialCoordinate { ra, dec }
    }

    /// Validated constructor for caller-supplied targets.
    ///
    /// Return
    /// ------
    /// * [`PlannerError::InvalidCoordinate`] if either angle is not finite or the declination is
    ///   outside `[-90, 90]`.
    pub fn try_new(ra: Degree, dec: Degree) -> Result<Self, PlannerError> {
        if !ra.is_finite() || !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return Err(PlannerError::InvalidCoordinate { ra, dec });
        }
        Ok(EquatorialCoordinate { ra, dec })
    }

    /// Build a coordinate from a right ascension in hours.
    pub fn from_hours(ra_hours: Hour, dec: Degree) -> Self {
        EquatorialCoordinate {
            ra: ra_hours * 15.0,
            dec,
        }
    }

    pub fn ra_hours(&self) -> Hour {
        deg_to_hours(self.ra)
    }

    /// Angular separation with another position, in degrees within `[0, 180]`.
    pub fn separation(&self, other: &EquatorialCoordinate) -> Degree {
        angular_distance(self, other)
    }
}

/// Great-circle distance between two equatorial positions, in degrees within `[0, 180]`.
///
/// Uses the spherical law of cosines with the cosine clamped to `[-1, 1]`, which loses a few
/// microdegrees of resolution for nearly coincident positions.
pub fn angular_distance(a: &EquatorialCoordinate, b: &EquatorialCoordinate) -> Degree {
    let cos_a = sind(a.dec) * sind(b.dec) + cosd(a.dec) * cosd(b.dec) * cosd(a.ra - b.ra);
    acosd(cos_a)
}

/// Principal axis selector for [`rotmt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// The matrix performs an **active rotation** of a vector by `alpha`:
///
/// ```text
/// R_X(α) = | 1    0       0    |
///          | 0  cos α  -sin α  |
///          | 0  sin α   cos α  |
/// ```
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians.
/// * `axis`: the axis of rotation.
///
/// Returns
/// --------
/// * A [`nalgebra::Matrix3`] such that `v' = R · v`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotate an orbital-plane vector into the ecliptic frame.
///
/// The vector `(r·cos u, r·sin u, 0)` with `u = v + ω` is tilted by the inclination around X and
/// then turned by the longitude of the ascending node around Z.
pub fn orbital_plane_to_ecliptic(
    in_plane: &Vector3<f64>,
    node: Degree,
    inclination: Degree,
) -> Vector3<f64> {
    rotmt(node * RADEG, Axis::Z) * rotmt(inclination * RADEG, Axis::X) * in_plane
}

/// Rotate an ecliptic rectangular vector into the equatorial frame.
///
/// Arguments
/// ---------
/// * `ecliptic`: rectangular ecliptic coordinates (any length unit).
/// * `obliquity`: obliquity of the ecliptic in degrees.
///
/// Returns
/// --------
/// * The same vector expressed in equatorial rectangular coordinates.
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>, obliquity: Degree) -> Vector3<f64> {
    rotmt(obliquity * RADEG, Axis::X) * ecliptic
}

/// Right ascension and declination of an equatorial rectangular vector.
pub fn vector_to_equatorial(v: &Vector3<f64>) -> EquatorialCoordinate {
    EquatorialCoordinate {
        ra: scale_to_360(atan2d(v.y, v.x)),
        dec: atan2d(v.z, (v.x * v.x + v.y * v.y).sqrt()),
    }
}
