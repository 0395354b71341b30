//! # Planner configuration
//!
//! [`PlannerConfig`] enumerates every option of the planner with its default. It is plain data:
//! [`Planner::new`](crate::planner::Planner::new) validates it once and converts it into the
//! typed values the engine works with.
//!
//! ```toml
//! twilight_altitude = -12.0
//! planet_index = 3
//! timezone_offset_hours = 2.0
//!
//! [location]
//! latitude = 60.17
//! longitude = 24.94
//!
//! [horizon]
//! soft = [25.0, 25.0, 30.0]
//! hard = [15.0]
//! meridian_transit_minutes = 20.0
//!
//! [grid]
//! grid_type = "mosaic"
//! fov_x_arcmin = 206.0
//! fov_y_arcmin = 137.0
//! columns = 2
//! rows = 2
//! overlap_percent = 20.0
//!
//! [grid.offaxis]
//! fov_x_arcmin = 2.0
//! fov_y_arcmin = 2.0
//! gap_arcmin = 1.0
//! position = "T"
//! ```
//!
//! Field-of-view values are in arcminutes, every other angle in degrees.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Hour, Percent, ARCMIN_TO_DEG, DEFAULT_FIELD_RADIUS, DEFAULT_TWILIGHT_ALTITUDE,
};
use crate::ephemeris::Planet;
use crate::horizon::HorizonMask;
use crate::mosaic::{FieldOfView, GridSettings, GridType, GuidePosition, OffAxisGuide};
use crate::observer::GeoLocation;
use crate::planner_errors::PlannerError;

/// Every option of the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub location: LocationConfig,
    #[serde(default)]
    pub horizon: HorizonConfig,
    /// Sun altitude bounding the night, defaults to -12° (0° for the visual grid type)
    #[serde(default)]
    pub twilight_altitude: Option<Degree>,
    /// 0 = Mercury … 6 = Neptune
    #[serde(default)]
    pub planet_index: Option<usize>,
    /// Local time minus UTC
    #[serde(default)]
    pub timezone_offset_hours: Hour,
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: Degree,
    pub longitude: Degree,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizonConfig {
    #[serde(default)]
    pub soft: Option<Vec<Degree>>,
    #[serde(default)]
    pub hard: Option<Vec<Degree>>,
    #[serde(default)]
    pub meridian_transit_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub grid_type: GridType,
    #[serde(default = "default_fov_x")]
    pub fov_x_arcmin: f64,
    #[serde(default = "default_fov_y")]
    pub fov_y_arcmin: f64,
    #[serde(default = "default_grid_size")]
    pub columns: usize,
    #[serde(default = "default_grid_size")]
    pub rows: usize,
    #[serde(default = "default_overlap")]
    pub overlap_percent: Percent,
    #[serde(default = "default_field_radius")]
    pub field_radius: Degree,
    #[serde(default)]
    pub offaxis: Option<OffAxisConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffAxisConfig {
    pub fov_x_arcmin: f64,
    pub fov_y_arcmin: f64,
    #[serde(default)]
    pub gap_arcmin: f64,
    pub position: GuidePosition,
}

fn default_fov_x() -> f64 {
    60.0
}

fn default_fov_y() -> f64 {
    40.0
}

fn default_grid_size() -> usize {
    1
}

fn default_overlap() -> Percent {
    20.0
}

fn default_field_radius() -> Degree {
    DEFAULT_FIELD_RADIUS
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            grid_type: GridType::default(),
            fov_x_arcmin: default_fov_x(),
            fov_y_arcmin: default_fov_y(),
            columns: default_grid_size(),
            rows: default_grid_size(),
            overlap_percent: default_overlap(),
            field_radius: default_field_radius(),
            offaxis: None,
        }
    }
}

impl PlannerConfig {
    /// Configuration for a location with every other option at its default.
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        PlannerConfig {
            location: LocationConfig {
                latitude,
                longitude,
            },
            horizon: HorizonConfig::default(),
            twilight_altitude: None,
            planet_index: None,
            timezone_offset_hours: 0.0,
            grid: GridConfig::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PlannerError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the configuration from a TOML file.
    ///
    /// Return
    /// ------
    /// * The configuration, [`PlannerError::IoError`] if the file cannot be read or
    ///   [`PlannerError::ConfigParse`] if it is not a valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path.as_ref())?;
        PlannerConfig::from_toml_str(&content)
    }

    /// Twilight altitude in effect: the configured one, or 0° for the visual grid type and
    /// -12° otherwise.
    pub fn effective_twilight_altitude(&self) -> Degree {
        self.twilight_altitude
            .unwrap_or(match self.grid.grid_type {
                GridType::Visual => 0.0,
                _ => DEFAULT_TWILIGHT_ALTITUDE,
            })
    }

    /// The effective twilight altitude, rejected unless it is a finite altitude.
    pub fn twilight(&self) -> Result<Degree, PlannerError> {
        let altitude = self.effective_twilight_altitude();
        if !altitude.is_finite() || !(-90.0..=90.0).contains(&altitude) {
            return Err(PlannerError::InvalidTwilightAltitude(altitude));
        }
        Ok(altitude)
    }

    pub fn timezone_offset(&self) -> Result<Hour, PlannerError> {
        let offset = self.timezone_offset_hours;
        if !offset.is_finite() || !(-24.0..=24.0).contains(&offset) {
            return Err(PlannerError::InvalidTimezoneOffset(offset));
        }
        Ok(offset)
    }

    pub fn geo_location(&self) -> Result<GeoLocation, PlannerError> {
        GeoLocation::new(self.location.latitude, self.location.longitude)
    }

    pub fn horizon_mask(&self) -> Result<HorizonMask, PlannerError> {
        HorizonMask::new(self.horizon.soft.as_deref(), self.horizon.hard.as_deref())
    }

    pub fn planet(&self) -> Result<Option<Planet>, PlannerError> {
        self.planet_index.map(Planet::from_index).transpose()
    }

    pub fn grid_settings(&self) -> Result<GridSettings, PlannerError> {
        let grid = &self.grid;
        let fov = FieldOfView::from_arcmin(grid.fov_x_arcmin, grid.fov_y_arcmin)?;
        let offaxis = grid
            .offaxis
            .map(|o| {
                OffAxisGuide::new(
                    FieldOfView::from_arcmin(o.fov_x_arcmin, o.fov_y_arcmin)?,
                    o.gap_arcmin * ARCMIN_TO_DEG,
                    o.position,
                )
            })
            .transpose()?;
        if grid.grid_type == GridType::OffAxis && offaxis.is_none() {
            return Err(PlannerError::MissingOffAxisGuide);
        }

        Ok(
            GridSettings::new(grid.grid_type, fov, grid.columns, grid.rows, grid.overlap_percent)?
                .with_field_radius(grid.field_radius)
                .with_offaxis(offaxis),
        )
    }
}
