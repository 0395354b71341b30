//! # Constants and type definitions for the planner
//!
//! This module centralizes the **conversion factors**, **epochs**, and **fixed numeric parameters**
//! used throughout the `mosaic_planner` engine, together with the scalar type aliases that make
//! the units of every public signature explicit.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ degrees, milliseconds ↔ days)
//! - Julian-day epochs used by the two day-count conventions of the engine
//! - Low-precision ephemeris parameters (mean obliquity, lunar distance for parallax)
//! - Sampling parameters of the horizon profile and of the visibility series
//!
//! ## See also
//! ------------
//! * [`time`](crate::time) – Julian-day and sidereal-time helpers built on these epochs.
//! * [`horizon`](crate::horizon) – Consumer of the horizon sampling constants.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Hours of right ascension → degrees
pub const HOURS_TO_DEG: f64 = 15.0;

/// Degrees → hours of right ascension
pub const DEG_TO_HOURS: f64 = 1.0 / 15.0;

/// Arcminutes → degrees
pub const ARCMIN_TO_DEG: f64 = 1.0 / 60.0;

/// Milliseconds in one minute
pub const MINUTE_MS: f64 = 60_000.0;

/// Milliseconds in one hour
pub const HOUR_MS: f64 = 3_600_000.0;

/// Milliseconds in one day
pub const DAY_MS: f64 = 86_400_000.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date used as day zero by the orbital-element tables (1999-12-31T00:00)
pub const JD_ELEMENT_EPOCH: f64 = 2_451_543.5;

/// Julian Date of J2000.0 (2000-01-01T12:00), day zero of the sidereal-time formula
pub const JD_J2000: f64 = 2_451_545.0;

// -------------------------------------------------------------------------------------------------
// Ephemeris and sampling parameters
// -------------------------------------------------------------------------------------------------

/// Fixed obliquity of the ecliptic used for the moon and the planets (degrees)
pub const MEAN_OBLIQUITY: Degree = 23.4;

/// Mean geocentric lunar distance in Earth radii, used by the parallax correction
pub const MOON_DISTANCE_EARTH_RADII: f64 = 60.336;

/// Convergence threshold of the eccentric-anomaly iteration (degrees)
pub const KEPLER_TOLERANCE: Degree = 0.001;

/// Iteration cap of the eccentric-anomaly iteration
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Number of altitude samples of a filled horizon profile (0°, 5°, …, 350°)
pub const HORIZON_SAMPLES: usize = 71;

/// Azimuth step between two horizon samples (degrees)
pub const HORIZON_STEP: Degree = 5.0;

/// Sampling step of the day series (minutes)
pub const DAY_SERIES_STEP_MINUTES: f64 = 5.0;

/// Sun altitude bounding the observing night (nautical twilight)
pub const DEFAULT_TWILIGHT_ALTITUDE: Degree = -12.0;

/// Minimum altitude reported as "visible" by the year series
pub const YEAR_VISIBLE_ALTITUDE: Degree = 30.0;

/// Number of days covered by the year series (the last day is inclusive)
pub const YEAR_SERIES_DAYS: usize = 365;

/// Default radius of the visual-observing field circle (degrees)
pub const DEFAULT_FIELD_RADIUS: Degree = 45.0;

/// Largest mosaic dimension, bounded by the A–Z column labels
pub const MAX_GRID_SIZE: usize = 26;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Right ascension or time of day in hours
pub type Hour = f64;
/// Duration or timestamp in milliseconds
pub type Millis = f64;
/// Fractional day count relative to one of the engine epochs
pub type DayCount = f64;
/// Percentage in [0, 100]
pub type Percent = f64;
