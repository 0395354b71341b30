//! # Observer location and horizontal coordinates
//!
//! This module converts equatorial positions into the observer's **horizontal** frame
//! (altitude above the horizon, azimuth from North through East) using the local hour angle
//! `LHA = LST - ra`:
//!
//! ```text
//! sin(alt) = sin(lat)·sin(dec) + cos(lat)·cos(dec)·cos(LHA)
//! cos(A)   = (sin(dec) - sin(alt)·sin(lat)) / (cos(alt)·cos(lat))
//! az       = A          if sin(LHA) < 0   (east of the meridian)
//!            360° - A   otherwise          (west of the meridian)
//! ```
//!
//! When many positions are evaluated at the same instant and place, an [`AltitudeContext`]
//! caches the sidereal time and the latitude trigonometry.
//!
//! ## See also
//! ------------
//! * [`local_sidereal_time`](crate::time::local_sidereal_time) – Sidereal time feeding the hour angle.
//! * [`HorizonMask`](crate::horizon::HorizonMask) – Classification of the resulting altitudes.

use crate::angles::{acosd, asind, compass_direction, cosd, sind};
use crate::constants::Degree;
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;
use crate::time::{local_sidereal_time, Instant};

/// Geographic position of the observer.
///
/// Latitude is in `[-90, 90]`. Longitude is East positive and accepted in `[-180, 360]`, so both
/// the signed and the 0–360 conventions work; the sidereal time is reduced modulo 360 anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    latitude: Degree,
    longitude: Degree,
}

impl GeoLocation {
    pub fn new(latitude: Degree, longitude: Degree) -> Result<Self, PlannerError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(PlannerError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=360.0).contains(&longitude) {
            return Err(PlannerError::InvalidLongitude(longitude));
        }
        Ok(GeoLocation {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }
}

/// Altitude and azimuth of a position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinate {
    pub altitude: Degree,
    /// Azimuth in `[0, 360]`, from North through East
    pub azimuth: Degree,
}

impl HorizontalCoordinate {
    /// Eight-point compass label of the azimuth.
    pub fn compass(&self) -> &'static str {
        compass_direction(self.azimuth)
    }
}

/// Per-instant, per-location invariants of the altitude formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeContext {
    pub sidereal_time: Degree,
    pub sin_lat: f64,
    pub cos_lat: f64,
}

impl AltitudeContext {
    pub fn new(instant: Instant, location: &GeoLocation) -> Self {
        AltitudeContext {
            sidereal_time: local_sidereal_time(location.longitude, instant),
            sin_lat: sind(location.latitude),
            cos_lat: cosd(location.latitude),
        }
    }

    /// Altitude of `target` using the cached invariants.
    pub fn altitude(&self, target: &EquatorialCoordinate) -> Degree {
        let lha = self.sidereal_time - target.ra;
        asind(self.sin_lat * sind(target.dec) + self.cos_lat * cosd(target.dec) * cosd(lha))
    }

    /// Altitude and azimuth of `target` using the cached invariants.
    ///
    /// The azimuth is undefined exactly at the zenith or for an observer at a pole; it is
    /// reported as 0 (North) there.
    pub fn alt_az(&self, target: &EquatorialCoordinate) -> HorizontalCoordinate {
        let lha = self.sidereal_time - target.ra;
        let altitude = self.altitude(target);

        let denominator = cosd(altitude) * self.cos_lat;
        let a = if denominator.abs() < 1e-12 {
            0.0
        } else {
            acosd((sind(target.dec) - sind(altitude) * self.sin_lat) / denominator)
        };

        let azimuth = if sind(lha) < 0.0 { a } else { 360.0 - a };
        HorizontalCoordinate { altitude, azimuth }
    }
}

/// Altitude and azimuth of an equatorial position for an observer.
///
/// Arguments
/// ---------
/// * `instant`: the UTC instant.
/// * `target`: right ascension and declination in degrees.
/// * `location`: the observer.
///
/// Return
/// ------
/// * The [`HorizontalCoordinate`] of the target.
pub fn alt_az(
    instant: Instant,
    target: &EquatorialCoordinate,
    location: &GeoLocation,
) -> HorizontalCoordinate {
    AltitudeContext::new(instant, location).alt_az(target)
}

/// The equatorial position currently at the observer's zenith: RA equals the local sidereal
/// time and Dec equals the latitude.
pub fn zenith(instant: Instant, location: &GeoLocation) -> EquatorialCoordinate {
    EquatorialCoordinate::new(
        local_sidereal_time(location.longitude, instant),
        location.latitude,
    )
}

#[cfg(test)]
mod observer_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn paris() -> GeoLocation {
        GeoLocation::new(48.85, 2.35).unwrap()
    }

    #[test]
    fn test_location_validation() {
        assert_eq!(
            GeoLocation::new(91.0, 0.0),
            Err(PlannerError::InvalidLatitude(91.0))
        );
        assert_eq!(
            GeoLocation::new(0.0, -181.0),
            Err(PlannerError::InvalidLongitude(-181.0))
        );
        assert!(GeoLocation::new(0.0, 359.0).is_ok());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_zenith_altitude() {
        let t = Instant::from_unix_millis(1_710_000_000_000.0);
        let loc = paris();
        let hz = alt_az(t, &zenith(t, &loc), &loc);
        assert_abs_diff_eq!(hz.altitude, 90.0, epsilon = 1e-5);
        assert!(hz.azimuth.is_finite());
    }

    #[test]
    fn test_azimuth_east_and_west_of_meridian() {
        let t = Instant::from_unix_millis(1_710_000_000_000.0);
        let loc = paris();
        let lst = zenith(t, &loc).ra;

        // Hour angle -3h: rising in the east
        let east = alt_az(t, &EquatorialCoordinate::new(lst + 45.0, 0.0), &loc);
        assert!(east.azimuth > 0.0 && east.azimuth < 180.0);
        assert!(east.altitude > 0.0);

        // Hour angle +3h: setting in the west
        let west = alt_az(t, &EquatorialCoordinate::new(lst - 45.0, 0.0), &loc);
        assert!(west.azimuth > 180.0 && west.azimuth < 360.0);
        assert_abs_diff_eq!(east.altitude, west.altitude, epsilon = 1e-9);
        assert_abs_diff_eq!(east.azimuth, 360.0 - west.azimuth, epsilon = 1e-9);
    }

    #[test]
    fn test_meridian_transit_south() {
        let t = Instant::from_unix_millis(1_710_000_000_000.0);
        let loc = paris();
        let lst = zenith(t, &loc).ra;
        let hz = alt_az(t, &EquatorialCoordinate::new(lst, 10.0), &loc);
        assert_abs_diff_eq!(hz.altitude, 90.0 - 48.85 + 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hz.azimuth, 180.0, epsilon = 1e-4);
        assert_eq!(hz.compass(), "S");
    }

    #[test]
    fn test_context_matches_direct_formula() {
        let t = Instant::from_unix_millis(1_700_000_000_000.0);
        let loc = GeoLocation::new(-33.9, 18.4).unwrap();
        let ctx = AltitudeContext::new(t, &loc);
        let target = EquatorialCoordinate::new(83.8, -5.4);
        assert_eq!(ctx.altitude(&target), alt_az(t, &target, &loc).altitude);
    }
}
