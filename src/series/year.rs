use log::debug;

use crate::constants::{Degree, YEAR_SERIES_DAYS, YEAR_VISIBLE_ALTITUDE};
use crate::ephemeris::{moon_position, moon_topocentric_correction, planet_position, Planet};
use crate::observer::{AltitudeContext, GeoLocation};
use crate::ref_system::EquatorialCoordinate;
use crate::rise_set::{solar_transit, sunrise_sunset};
use crate::time::Instant;

use super::above_horizon;

/// One day of the year series, sampled at the approximate local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearSample {
    /// 12:00 UTC of the sampled day
    pub date: Instant,
    pub midnight: Instant,
    /// `false` on polar days and nights, where `midnight` is taken twelve hours after the
    /// solar transit instead of between sunset and sunrise
    pub sun_crosses_horizon: bool,
    /// Target altitude when at or above 30°
    pub visible: Option<Degree>,
    /// Target altitude when above 0° and below 30°
    pub low: Option<Degree>,
    pub moon_altitude: Option<Degree>,
    pub planet_altitude: Option<Degree>,
}

impl YearSample {
    pub fn altitude(&self) -> Option<Degree> {
        self.visible.or(self.low)
    }
}

/// Sample the target once per day at local midnight for 366 consecutive days.
///
/// Arguments
/// ---------
/// * `location`: the observer.
/// * `target`: the target position.
/// * `midday`: 12:00 UTC of the first day.
/// * `planet`: optional planet whose altitude is reported alongside.
///
/// Return
/// ------
/// * Rows for days `0..=365` after `midday`.
pub fn year_series(
    location: &GeoLocation,
    target: &EquatorialCoordinate,
    midday: Instant,
    planet: Option<Planet>,
) -> Vec<YearSample> {
    let samples: Vec<_> = (0..=YEAR_SERIES_DAYS)
        .map(|day| sample_day(location, target, midday.add_days(day as f64), planet))
        .collect();

    debug!(
        "Year series: {} days from {midday}, {} with the target above {YEAR_VISIBLE_ALTITUDE}°",
        samples.len(),
        samples.iter().filter(|s| s.visible.is_some()).count()
    );
    samples
}

fn sample_day(
    location: &GeoLocation,
    target: &EquatorialCoordinate,
    date: Instant,
    planet: Option<Planet>,
) -> YearSample {
    let (midnight, sun_crosses_horizon) = match sunrise_sunset(date, location, 0.0) {
        Some(times) => (times.midnight(), true),
        None => (solar_transit(date, location).add_hours(12.0), false),
    };

    let context = AltitudeContext::new(midnight, location);
    let altitude = context.altitude(target);
    let moon = context.altitude(&moon_position(midnight).coord);

    YearSample {
        date,
        midnight,
        sun_crosses_horizon,
        visible: (altitude >= YEAR_VISIBLE_ALTITUDE).then_some(altitude),
        low: (altitude > 0.0 && altitude < YEAR_VISIBLE_ALTITUDE).then_some(altitude),
        moon_altitude: above_horizon(moon_topocentric_correction(moon)),
        planet_altitude: planet
            .and_then(|p| above_horizon(context.altitude(&planet_position(midnight, p).coord))),
    }
}
