//! # Planner: validated configuration and entry points
//!
//! The [`Planner`] is the façade hosts talk to. It is built once from a [`PlannerConfig`],
//! validating every option up front, and then answers queries for a target and a date:
//!
//! 1. **Positions**: Sun, Moon, configured planet, alt/az of any coordinate, zenith.
//! 2. **Sun times**: sunset and sunrise at any altitude, night bounded by the twilight altitude.
//! 3. **Series**: one night of visibility samples, one year of midnight samples, body tracks.
//! 4. **Framing**: the grid plan around a target or a list of targets.
//!
//! The planner holds no mutable state. Every query recomputes its result from the validated
//! configuration and its arguments, so one planner can be shared across threads.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use mosaic_planner::config::PlannerConfig;
//! use mosaic_planner::planner::Planner;
//! use mosaic_planner::ref_system::EquatorialCoordinate;
//! use mosaic_planner::time::Instant;
//!
//! let planner = Planner::new(PlannerConfig::from_file("planner.toml").unwrap()).unwrap();
//! let orion = EquatorialCoordinate::from_hours(5.588, -5.39);
//! let date = Instant::from_date_utc(2024, 1, 15).unwrap();
//!
//! if let Some(night) = planner.day_series(&orion, date, None).unwrap() {
//!     let visible = night.samples.iter().filter(|s| s.visible().is_some()).count();
//!     println!("{visible} samples above the soft horizon");
//! }
//! ```
//!
//! ## See also
//! ------------
//! * [`PlannerConfig`] – Every option with its default.
//! * [`day_series`](crate::series::day_series) / [`year_series`](crate::series::year_series) – The series generators.
//! * [`plan_grid`](crate::mosaic::plan_grid) – Framing overlay geometry.

use log::debug;

use crate::config::PlannerConfig;
use crate::constants::{Degree, Hour, Percent};
use crate::ephemeris::{
    moon_phase, moon_position, planet_position, sun_position, BodyPosition, Planet,
};
use crate::horizon::HorizonMask;
use crate::mosaic::{plan_grid, plan_targets, GridPlan, GridSettings};
use crate::observer::{alt_az, zenith, GeoLocation, HorizontalCoordinate};
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;
use crate::rise_set::{sunrise_sunset, SunTimes};
use crate::series::day::check_meridian_transit;
use crate::series::{
    day_series, moon_path, planet_path, year_series, DaySeries, DaySeriesRequest, PathPoint,
    YearSample,
};
use crate::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct Planner {
    config: PlannerConfig,
    location: GeoLocation,
    horizon: HorizonMask,
    planet: Option<Planet>,
    grid: GridSettings,
    twilight_altitude: Degree,
    timezone_offset: Hour,
    meridian_transit_minutes: f64,
}

impl Planner {
    /// Validate a configuration and build the planner.
    ///
    /// Arguments
    /// ---------
    /// * `config`: the configuration, usually read with [`PlannerConfig::from_file`].
    ///
    /// Return
    /// ------
    /// * The planner, or the [`PlannerError`] of the first invalid option.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        let planner = Planner {
            location: config.geo_location()?,
            horizon: config.horizon_mask()?,
            planet: config.planet()?,
            grid: config.grid_settings()?,
            twilight_altitude: config.twilight()?,
            timezone_offset: config.timezone_offset()?,
            meridian_transit_minutes: check_meridian_transit(
                config.horizon.meridian_transit_minutes,
            )?,
            config,
        };
        debug!(
            "Planner at lat {} lng {}: soft horizon {}, planet {:?}, grid {:?}, twilight {}°",
            planner.location.latitude(),
            planner.location.longitude(),
            planner.horizon.has_soft(),
            planner.planet,
            planner.grid.effective_type(),
            planner.twilight_altitude
        );
        Ok(planner)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PlannerError> {
        Planner::new(PlannerConfig::from_toml_str(content)?)
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn horizon(&self) -> &HorizonMask {
        &self.horizon
    }

    pub fn planet(&self) -> Option<Planet> {
        self.planet
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn twilight_altitude(&self) -> Degree {
        self.twilight_altitude
    }

    /// Local time minus UTC.
    pub fn timezone_offset(&self) -> Hour {
        self.timezone_offset
    }

    pub fn alt_az(&self, instant: Instant, target: &EquatorialCoordinate) -> HorizontalCoordinate {
        alt_az(instant, target, &self.location)
    }

    pub fn zenith(&self, instant: Instant) -> EquatorialCoordinate {
        zenith(instant, &self.location)
    }

    pub fn sun_position(&self, instant: Instant) -> BodyPosition {
        sun_position(instant)
    }

    pub fn moon_position(&self, instant: Instant) -> BodyPosition {
        moon_position(instant)
    }

    /// Position of the configured planet, `None` when no planet is selected.
    pub fn planet_position(&self, instant: Instant) -> Option<BodyPosition> {
        self.planet.map(|p| planet_position(instant, p))
    }

    pub fn moon_phase(&self, instant: Instant) -> Percent {
        moon_phase(instant)
    }

    /// Sunset and sunrise around the night following `date` for the Sun at `altitude`.
    ///
    /// Any instant of the UTC day can be passed; it is moved to 12:00 UTC.
    pub fn sun_times(&self, date: Instant, altitude: Degree) -> Option<SunTimes> {
        sunrise_sunset(date.utc_midday(), &self.location, altitude)
    }

    /// Night of `date` bounded by the configured twilight altitude.
    pub fn twilight(&self, date: Instant) -> Option<SunTimes> {
        self.sun_times(date, self.twilight_altitude)
    }

    /// Visibility samples of `target` through the night following `date`.
    ///
    /// Arguments
    /// ---------
    /// * `target`: the target position.
    /// * `date`: any instant of the UTC observing day.
    /// * `now`: when given and earlier than the twilight sunset, sampling starts there.
    ///
    /// Return
    /// ------
    /// * [`PlannerError::InvalidCoordinate`] for a target outside the sky, `Ok(None)` when the
    ///   Sun does not reach the twilight altitude that day.
    pub fn day_series(
        &self,
        target: &EquatorialCoordinate,
        date: Instant,
        now: Option<Instant>,
    ) -> Result<Option<DaySeries>, PlannerError> {
        let target = EquatorialCoordinate::try_new(target.ra, target.dec)?;
        let mut request = DaySeriesRequest::new(target, date.utc_midday())
            .with_twilight_altitude(self.twilight_altitude)
            .with_planet(self.planet)
            .with_meridian_transit(self.meridian_transit_minutes)?;
        if let Some(now) = now {
            request = request.starting_at(now);
        }
        Ok(day_series(&self.location, &self.horizon, &request))
    }

    /// One sample per night at local midnight for the year starting at `date`.
    pub fn year_series(
        &self,
        target: &EquatorialCoordinate,
        date: Instant,
    ) -> Result<Vec<YearSample>, PlannerError> {
        let target = EquatorialCoordinate::try_new(target.ra, target.dec)?;
        Ok(year_series(&self.location, &target, date.utc_midday(), self.planet))
    }

    /// Start of the local calendar day of `date`'s midday, where the body tracks begin.
    fn path_start(&self, date: Instant) -> Instant {
        date.utc_midday().add_hours(-self.timezone_offset())
    }

    /// Hourly Moon track over the local day of `date`.
    pub fn moon_path(&self, date: Instant) -> Vec<PathPoint> {
        moon_path(self.path_start(date))
    }

    /// Twice-daily track of the configured planet over four weeks from `date`.
    pub fn planet_path(&self, date: Instant) -> Option<Vec<PathPoint>> {
        self.planet.map(|p| planet_path(p, self.path_start(date)))
    }

    /// Framing overlay around `center` with the configured grid.
    pub fn plan_grid(&self, center: &EquatorialCoordinate) -> Result<GridPlan, PlannerError> {
        plan_grid(center, &self.grid)
    }

    /// One box per target with the configured field of view.
    pub fn plan_targets(&self, targets: &[EquatorialCoordinate]) -> GridPlan {
        plan_targets(targets, self.grid.fov())
    }
}
