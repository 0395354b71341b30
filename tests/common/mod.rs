#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use mosaic_planner::observer::GeoLocation;
use mosaic_planner::ref_system::EquatorialCoordinate;
use mosaic_planner::time::Instant;

/// 2024-03-20T12:00 UTC, the day of the March equinox
pub const EQUINOX_MIDDAY: Instant = Instant::from_unix_millis(1_710_936_000_000.0);

/// 2024-01-15T12:00 UTC
pub const WINTER_MIDDAY: Instant = Instant::from_unix_millis(1_705_320_000_000.0);

/// 2024-01-25T17:54 UTC, full moon
pub const FULL_MOON: Instant = Instant::from_unix_millis(1_706_205_240_000.0);

/// 2024-01-11T11:57 UTC, new moon
pub const NEW_MOON: Instant = Instant::from_unix_millis(1_704_974_220_000.0);

pub fn london() -> GeoLocation {
    GeoLocation::new(51.5, -0.1).unwrap()
}

pub fn orion() -> EquatorialCoordinate {
    EquatorialCoordinate::from_hours(5.588, -5.39)
}

pub fn assert_coord_close(
    actual: &EquatorialCoordinate,
    expected: &EquatorialCoordinate,
    epsilon: f64,
) {
    assert_abs_diff_eq!(actual.ra, expected.ra, epsilon = epsilon);
    assert_abs_diff_eq!(actual.dec, expected.dec, epsilon = epsilon);
}
