//! # Instants, Julian days and sidereal time
//!
//! Every computation of the engine is stamped with an [`Instant`]: a UTC timestamp stored as
//! milliseconds since the Unix epoch. Calendar conversions go through [`hifitime::Epoch`] so that
//! callers can build instants from Gregorian dates or ISO-8601 strings.
//!
//! Two distinct day counts are derived from an instant and **must not be conflated**:
//!
//! * [`to_julian_day`] counts days from `JD 2451543.5` (1999-12-31T00:00), the day zero of the
//!   orbital-element tables used by the sun, moon and planet positions;
//! * [`days_since_j2000`] counts days from `JD 2451545.0` (J2000.0), the day zero of the
//!   local sidereal time polynomial.
//!
//! The two differ by exactly 1.5 days. Merging them would shift every computed position.
//!
//! ## See also
//! ------------
//! * [`local_sidereal_time`] – Sidereal time in degrees for a longitude.
//! * [`ephemeris`](crate::ephemeris) – Consumer of [`to_julian_day`].

use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;

use crate::angles::scale_to_360;
use crate::constants::{
    DayCount, Degree, Hour, Millis, DAY_MS, HOURS_TO_DEG, HOUR_MS, JD_ELEMENT_EPOCH, JD_J2000,
    JD_UNIX_EPOCH, MINUTE_MS,
};
use crate::planner_errors::PlannerError;

/// A point in time, in milliseconds since 1970-01-01T00:00:00 UTC.
///
/// Instants are immutable values: every offset helper returns a new instant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Instant(Millis);

impl Instant {
    pub const fn from_unix_millis(ms: Millis) -> Self {
        Instant(ms)
    }

    pub fn unix_millis(self) -> Millis {
        self.0
    }

    /// Build an instant from a Gregorian UTC date and time of day.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`, `day`: calendar date in UTC.
    /// * `hour`, `minute`, `second`: time of day in UTC.
    ///
    /// Return
    /// ------
    /// * The corresponding [`Instant`], or [`PlannerError::InvalidDate`] if the date does not exist.
    pub fn from_gregorian_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, PlannerError> {
        let epoch = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)
            .map_err(|e| PlannerError::InvalidDate(e.to_string()))?;
        Ok(Self::from_epoch(epoch))
    }

    /// Midnight UTC at the start of the given calendar date.
    pub fn from_date_utc(year: i32, month: u8, day: u8) -> Result<Self, PlannerError> {
        Self::from_gregorian_utc(year, month, day, 0, 0, 0)
    }

    /// Parse an ISO-8601 UTC timestamp such as `2024-03-20T12:00:00 UTC`.
    pub fn parse_utc(date: &str) -> Result<Self, PlannerError> {
        Epoch::from_str(date.trim())
            .map(Self::from_epoch)
            .map_err(|e| PlannerError::InvalidDate(format!("{date}: {e}")))
    }

    pub fn from_epoch(epoch: Epoch) -> Self {
        Instant(epoch.to_unix_milliseconds())
    }

    pub fn to_epoch(self) -> Epoch {
        Epoch::from_unix_milliseconds(self.0)
    }

    pub fn offset_millis(self, ms: Millis) -> Self {
        Instant(self.0 + ms)
    }

    pub fn add_minutes(self, minutes: f64) -> Self {
        self.offset_millis(minutes * MINUTE_MS)
    }

    pub fn add_hours(self, hours: Hour) -> Self {
        self.offset_millis(hours * HOUR_MS)
    }

    pub fn add_days(self, days: f64) -> Self {
        self.offset_millis(days * DAY_MS)
    }

    /// Signed duration from `self` to `other`, in hours.
    pub fn hours_until(self, other: Instant) -> Hour {
        (other.0 - self.0) / HOUR_MS
    }

    /// UTC time of day in decimal hours, in `[0, 24)`.
    pub fn utc_hours(self) -> Hour {
        self.0.rem_euclid(DAY_MS) / HOUR_MS
    }

    /// Midnight UTC of the day containing this instant.
    pub fn start_of_utc_day(self) -> Self {
        Instant(self.0 - self.0.rem_euclid(DAY_MS))
    }

    /// 12:00 UTC of the day containing this instant, the reference time of the
    /// sunrise/sunset solver.
    pub fn utc_midday(self) -> Self {
        self.start_of_utc_day().offset_millis(DAY_MS / 2.0)
    }

    /// Align down to a multiple of `step` milliseconds.
    pub fn floor_to(self, step: Millis) -> Self {
        Instant(self.0 - self.0.rem_euclid(step))
    }

    /// The first multiple of `step` strictly after this instant.
    ///
    /// An instant already on the grid still advances by one full step.
    pub fn next_step_after(self, step: Millis) -> Self {
        Instant(self.0 + step - self.0.rem_euclid(step))
    }

    /// Wall-clock `HH:MM` label of this instant shifted by a timezone offset.
    pub fn format_hhmm(self, timezone_offset_hours: Hour) -> String {
        let local = self.add_hours(timezone_offset_hours);
        let minutes = (local.0.rem_euclid(DAY_MS) / MINUTE_MS).floor() as u32;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_epoch())
    }
}

impl From<Epoch> for Instant {
    fn from(epoch: Epoch) -> Self {
        Instant::from_epoch(epoch)
    }
}

/// Day count used by the orbital-element tables.
///
/// Arguments
/// ---------
/// * `instant`: the UTC instant.
///
/// Return
/// ------
/// * Fractional days since `JD 2451543.5` (1999-12-31T00:00).
pub fn to_julian_day(instant: Instant) -> DayCount {
    JD_UNIX_EPOCH + instant.0 / DAY_MS - JD_ELEMENT_EPOCH
}

/// Day count used by the sidereal-time formula: fractional days since J2000.0
/// (`JD 2451545.0`).
pub fn days_since_j2000(instant: Instant) -> DayCount {
    JD_UNIX_EPOCH + instant.0 / DAY_MS - JD_J2000
}

/// Local sidereal time in degrees.
///
/// `LST = 100.4606184 + 0.9856473662862·D + 15·H + longitude`, reduced to `[0, 360)`, where `D` is
/// [`days_since_j2000`] and `H` the UTC time of day in decimal hours.
///
/// Arguments
/// ---------
/// * `longitude`: observer longitude in degrees, East positive.
/// * `instant`: the UTC instant.
///
/// Return
/// ------
/// * The local sidereal time in degrees, in `[0, 360)`.
pub fn local_sidereal_time(longitude: Degree, instant: Instant) -> Degree {
    const LST0: Degree = 100.4606184;
    const LST_RATE: Degree = 0.9856473662862;

    let d = days_since_j2000(instant);
    let h = instant.utc_hours();
    scale_to_360(LST0 + LST_RATE * d + h * HOURS_TO_DEG + longitude)
}
