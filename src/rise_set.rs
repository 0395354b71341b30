use log::trace;

use crate::angles::{acosd, cosd, deg_to_hours, scale_to_360, sind};
use crate::constants::{Degree, Hour};
use crate::ephemeris::{sun_mean_longitude, sun_position};
use crate::observer::GeoLocation;
use crate::time::Instant;

/// Sunset of a day and the following sunrise for a given Sun altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunset: Instant,
    pub sunrise: Instant,
}

impl SunTimes {
    /// Midpoint between sunset and sunrise, the approximate local midnight.
    pub fn midnight(&self) -> Instant {
        Instant::from_unix_millis(
            self.sunset.unix_millis()
                + (self.sunrise.unix_millis() - self.sunset.unix_millis()) / 2.0,
        )
    }

    /// Length of the night in hours.
    pub fn night_hours(&self) -> Hour {
        self.sunset.hours_until(self.sunrise)
    }
}

/// Times at which the Sun crosses `altitude` after the given midday and before the next one.
///
/// The Sun's position is taken once at `midday` and its local transit is estimated from the Sun's
/// right ascension and the Greenwich sidereal time at 0h (`L + 180°`). The hour angle at the
/// requested altitude follows from
///
/// ```text
/// cos(LHA) = (sin(h) - sin(lat)·sin(dec)) / (cos(lat)·cos(dec))
/// ```
///
/// and the same offset is reused for the next morning, which leaves an error of a minute or two
/// on the sunrise instead of iterating.
///
/// Arguments
/// ---------
/// * `midday`: 12:00 UTC of the observing day.
/// * `location`: the observer.
/// * `altitude`: Sun altitude defining the event (0° for the disk centre on the horizon, -12° for
///   nautical twilight).
///
/// Return
/// ------
/// * `None` if the Sun never crosses `altitude` that day (polar day or polar night), otherwise
///   the [`SunTimes`].
pub fn sunrise_sunset(
    midday: Instant,
    location: &GeoLocation,
    altitude: Degree,
) -> Option<SunTimes> {
    let sun = sun_position(midday);
    let local_transit = transit_from(midday, sun.coord.ra, location);

    let cos_lha = (sind(altitude) - sind(location.latitude()) * sind(sun.coord.dec))
        / (cosd(location.latitude()) * cosd(sun.coord.dec));
    if !(-1.0..=1.0).contains(&cos_lha) {
        trace!(
            "Sun never crosses {altitude}° at latitude {} on {midday} (cos LHA = {cos_lha})",
            location.latitude()
        );
        return None;
    }
    let lha = deg_to_hours(acosd(cos_lha));

    Some(SunTimes {
        sunset: local_transit.add_hours(lha),
        sunrise: local_transit.add_hours(24.0 - lha),
    })
}

/// Approximate instant of the Sun's upper transit at the observer's meridian on the day of
/// `midday`.
pub fn solar_transit(midday: Instant, location: &GeoLocation) -> Instant {
    transit_from(midday, sun_position(midday).coord.ra, location)
}

fn transit_from(midday: Instant, sun_ra: Degree, location: &GeoLocation) -> Instant {
    let gmst0 = scale_to_360(sun_mean_longitude(midday) + 180.0);
    let ut_sun = deg_to_hours(scale_to_360(sun_ra - gmst0 - location.longitude()));
    midday.add_hours(ut_sun - 12.0)
}
