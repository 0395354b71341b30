use itertools::Itertools;
use log::debug;

use crate::constants::{
    Degree, Percent, DAY_SERIES_STEP_MINUTES, DEFAULT_TWILIGHT_ALTITUDE, MINUTE_MS,
};
use crate::ephemeris::{
    moon_phase, moon_position, moon_topocentric_correction, planet_position, Planet,
};
use crate::horizon::{HorizonMask, Visibility};
use crate::observer::{AltitudeContext, GeoLocation};
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;
use crate::rise_set::{sunrise_sunset, SunTimes};
use crate::time::Instant;

use super::above_horizon;

/// Parameters of one night of sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySeriesRequest {
    target: EquatorialCoordinate,
    midday: Instant,
    start: Option<Instant>,
    twilight_altitude: Degree,
    step_minutes: f64,
    meridian_transit_minutes: f64,
    planet: Option<Planet>,
}

impl DaySeriesRequest {
    /// A request for the night following `midday` (12:00 UTC of the observing date), bounded by
    /// nautical twilight and sampled every 5 minutes.
    pub fn new(target: EquatorialCoordinate, midday: Instant) -> Self {
        DaySeriesRequest {
            target,
            midday,
            start: None,
            twilight_altitude: DEFAULT_TWILIGHT_ALTITUDE,
            step_minutes: DAY_SERIES_STEP_MINUTES,
            meridian_transit_minutes: 0.0,
            planet: None,
        }
    }

    /// Start sampling at `start` instead of sunset when it comes first.
    pub fn starting_at(mut self, start: Instant) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_twilight_altitude(mut self, altitude: Degree) -> Self {
        self.twilight_altitude = altitude;
        self
    }

    pub fn with_planet(mut self, planet: Option<Planet>) -> Self {
        self.planet = planet;
        self
    }

    pub fn with_step_minutes(mut self, minutes: f64) -> Result<Self, PlannerError> {
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(PlannerError::InvalidStep(minutes));
        }
        self.step_minutes = minutes;
        Ok(self)
    }

    /// Duration of the meridian-flip exclusion window, centred on the transit. Zero disables it.
    pub fn with_meridian_transit(mut self, minutes: f64) -> Result<Self, PlannerError> {
        self.meridian_transit_minutes = check_meridian_transit(minutes)?;
        Ok(self)
    }

    pub fn target(&self) -> &EquatorialCoordinate {
        &self.target
    }

    fn step_ms(&self) -> f64 {
        self.step_minutes * MINUTE_MS
    }
}

pub(crate) fn check_meridian_transit(minutes: f64) -> Result<f64, PlannerError> {
    if !minutes.is_finite() || minutes < 0.0 {
        return Err(PlannerError::InvalidMeridianTransit(minutes));
    }
    Ok(minutes)
}

/// One row of the day series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    pub time: Instant,
    /// Geometric altitude of the target, classified or not
    pub altitude: Degree,
    pub azimuth: Degree,
    /// `None` while the target is below the celestial horizon
    pub visibility: Option<Visibility>,
    /// Topocentric Moon altitude, `None` below the horizon
    pub moon_altitude: Option<Degree>,
    /// Planet altitude, `None` below the horizon or when no planet is requested
    pub planet_altitude: Option<Degree>,
}

impl VisibilitySample {
    fn altitude_if(&self, category: Visibility) -> Option<Degree> {
        (self.visibility == Some(category)).then_some(self.altitude)
    }

    /// Target altitude when fully visible.
    pub fn visible(&self) -> Option<Degree> {
        self.altitude_if(Visibility::Visible)
    }

    /// Target altitude when above the hard horizon but below the soft one.
    pub fn below_soft(&self) -> Option<Degree> {
        self.altitude_if(Visibility::BelowSoft)
    }

    /// Target altitude when blocked by the hard horizon.
    pub fn below_hard(&self) -> Option<Degree> {
        self.altitude_if(Visibility::BelowHard)
    }

    /// Target altitude inside the meridian-flip window.
    pub fn meridian_crossing(&self) -> Option<Degree> {
        self.altitude_if(Visibility::MeridianCrossing)
    }
}

/// Moon conditions at the approximate local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightSummary {
    pub midnight: Instant,
    pub moon_phase: Percent,
    /// Angular distance between the Moon and the target
    pub moon_separation: Degree,
}

/// Samples of one night together with the window that bounds them.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySeries {
    pub samples: Vec<VisibilitySample>,
    pub twilight: SunTimes,
    /// Index of the sample at which the target azimuth crossed the meridian
    pub meridian_index: Option<usize>,
    pub summary: NightSummary,
}

impl DaySeries {
    pub fn has_meridian_crossing(&self) -> bool {
        self.samples
            .iter()
            .any(|s| s.visibility == Some(Visibility::MeridianCrossing))
    }
}

/// Azimuth passes 180°, or wraps from 360° to 0°.
fn crosses_meridian(previous: Degree, current: Degree) -> bool {
    (previous > 180.0 && current < 180.0) || (previous < 180.0 && current > 180.0)
}

/// Sample the target, the Moon and an optional planet through one night.
///
/// The window runs from the twilight sunset, aligned down to the step (or from the request's
/// start instant when it is earlier), up to the first step after the twilight sunrise, both
/// ends included.
///
/// Arguments
/// ---------
/// * `location`: the observer.
/// * `horizon`: the horizon mask used to classify the target.
/// * `request`: target, date and sampling parameters.
///
/// Return
/// ------
/// * `None` when the Sun never reaches the twilight altitude that day (polar day or night): the
///   visibility of that date is undefined. Otherwise the [`DaySeries`].
pub fn day_series(
    location: &GeoLocation,
    horizon: &HorizonMask,
    request: &DaySeriesRequest,
) -> Option<DaySeries> {
    let Some(twilight) = sunrise_sunset(request.midday, location, request.twilight_altitude) else {
        debug!(
            "No twilight window at {}° on {}, day series undefined",
            request.twilight_altitude, request.midday
        );
        return None;
    };

    let step = request.step_ms();
    let start = match request.start {
        Some(start) if start < twilight.sunset => start,
        _ => twilight.sunset.floor_to(step),
    };
    let end = twilight.sunrise.next_step_after(step);

    let mut samples = Vec::new();
    let mut time = start;
    while time <= end {
        samples.push(sample_at(time, location, horizon, request));
        time = start.offset_millis(samples.len() as f64 * step);
    }

    let meridian_index = samples
        .iter()
        .map(|s| s.azimuth)
        .tuple_windows()
        .positions(|(previous, current)| crosses_meridian(previous, current))
        .last()
        .map(|i| i + 1);

    if let Some(index) = meridian_index {
        mark_meridian_window(&mut samples, index, request.meridian_transit_minutes, step);
    }

    let midnight = twilight.midnight();
    let summary = NightSummary {
        midnight,
        moon_phase: moon_phase(midnight),
        moon_separation: moon_position(midnight).coord.separation(&request.target),
    };

    debug!(
        "Day series: {} samples from {start} to {end}, meridian index {meridian_index:?}",
        samples.len()
    );
    Some(DaySeries {
        samples,
        twilight,
        meridian_index,
        summary,
    })
}

fn sample_at(
    time: Instant,
    location: &GeoLocation,
    horizon: &HorizonMask,
    request: &DaySeriesRequest,
) -> VisibilitySample {
    let context = AltitudeContext::new(time, location);
    let target = context.alt_az(&request.target);

    let moon = context.altitude(&moon_position(time).coord);
    let planet_altitude = request
        .planet
        .and_then(|p| above_horizon(context.altitude(&planet_position(time, p).coord)));

    VisibilitySample {
        time,
        altitude: target.altitude,
        azimuth: target.azimuth,
        visibility: horizon.classify(target.altitude, target.azimuth),
        moon_altitude: above_horizon(moon_topocentric_correction(moon)),
        planet_altitude,
    }
}

/// Reclassify visible and below-soft samples within ±`minutes / 2` of the transit sample.
fn mark_meridian_window(samples: &mut [VisibilitySample], index: usize, minutes: f64, step: f64) {
    if minutes <= 0.0 {
        return;
    }
    let half_width = ((minutes / 2.0) * MINUTE_MS / step).round() as usize;
    let begin = index.saturating_sub(half_width);
    let end = index.saturating_add(half_width).min(samples.len());

    for sample in &mut samples[begin..end] {
        if matches!(
            sample.visibility,
            Some(Visibility::Visible | Visibility::BelowSoft)
        ) {
            sample.visibility = Some(Visibility::MeridianCrossing);
        }
    }
}

#[cfg(test)]
mod day_test {
    use super::*;

    fn sample(azimuth: Degree, visibility: Option<Visibility>) -> VisibilitySample {
        VisibilitySample {
            time: Instant::default(),
            altitude: 40.0,
            azimuth,
            visibility,
            moon_altitude: None,
            planet_altitude: None,
        }
    }

    #[test]
    fn test_crosses_meridian() {
        assert!(crosses_meridian(179.0, 181.0));
        assert!(crosses_meridian(181.0, 179.0));
        assert!(crosses_meridian(359.0, 1.0));
        assert!(!crosses_meridian(10.0, 20.0));
        assert!(!crosses_meridian(200.0, 210.0));
    }

    #[test]
    fn test_category_accessors() {
        let s = sample(100.0, Some(Visibility::BelowSoft));
        assert_eq!(s.visible(), None);
        assert_eq!(s.below_soft(), Some(40.0));
        assert_eq!(s.below_hard(), None);
        assert_eq!(s.meridian_crossing(), None);
        assert_eq!(sample(100.0, None).visible(), None);
    }

    #[test]
    fn test_mark_meridian_window() {
        let mut samples: Vec<_> = (0..10)
            .map(|i| {
                let v = if i == 5 {
                    Some(Visibility::BelowHard)
                } else if i == 6 {
                    Some(Visibility::BelowSoft)
                } else {
                    Some(Visibility::Visible)
                };
                sample(170.0 + i as f64 * 2.0, v)
            })
            .collect();

        // 20 minutes at 5-minute steps: two samples on each side, end exclusive
        mark_meridian_window(&mut samples, 5, 20.0, 5.0 * MINUTE_MS);
        let kinds: Vec<_> = samples.iter().map(|s| s.visibility).collect();
        assert_eq!(kinds[2], Some(Visibility::Visible));
        assert_eq!(kinds[3], Some(Visibility::MeridianCrossing));
        assert_eq!(kinds[4], Some(Visibility::MeridianCrossing));
        assert_eq!(kinds[5], Some(Visibility::BelowHard));
        assert_eq!(kinds[6], Some(Visibility::MeridianCrossing));
        assert_eq!(kinds[7], Some(Visibility::Visible));
    }

    #[test]
    fn test_mark_meridian_window_clamps_to_bounds() {
        let mut samples: Vec<_> = (0..3)
            .map(|_| sample(180.0, Some(Visibility::Visible)))
            .collect();
        mark_meridian_window(&mut samples, 1, 120.0, 5.0 * MINUTE_MS);
        assert!(samples
            .iter()
            .all(|s| s.visibility == Some(Visibility::MeridianCrossing)));

        let mut untouched = samples.clone();
        untouched[0].visibility = Some(Visibility::Visible);
        mark_meridian_window(&mut untouched, 1, 0.0, 5.0 * MINUTE_MS);
        assert_eq!(untouched[0].visibility, Some(Visibility::Visible));

        let mut samples: Vec<_> = (0..3)
            .map(|_| sample(180.0, Some(Visibility::Visible)))
            .collect();
        mark_meridian_window(&mut samples, 2, 1e30, 5.0 * MINUTE_MS);
        assert!(samples
            .iter()
            .all(|s| s.visibility == Some(Visibility::MeridianCrossing)));
    }

    #[test]
    fn test_request_validation() {
        let req = DaySeriesRequest::new(EquatorialCoordinate::new(0.0, 0.0), Instant::default());
        assert_eq!(
            req.clone().with_step_minutes(0.0),
            Err(PlannerError::InvalidStep(0.0))
        );
        assert_eq!(
            req.clone().with_meridian_transit(-1.0),
            Err(PlannerError::InvalidMeridianTransit(-1.0))
        );
        assert!(req.with_meridian_transit(30.0).is_ok());
    }
}
