//! # Visibility series for charting
//!
//! The series generators sample the position engine over time and turn each instant into a
//! chart-ready row:
//!
//! * [`day_series`] walks the night between twilight sunset and sunrise in 5-minute steps,
//!   classifying the target against the observer's [`HorizonMask`](crate::horizon::HorizonMask)
//!   and marking the meridian-flip window;
//! * [`year_series`] samples the target once per day at the approximate local midnight for
//!   366 consecutive days, with a fixed 30° threshold;
//! * [`body_path`] samples the equatorial track of the Moon or a planet for sky overlays.
//!
//! Every generator is a pure, bounded loop: nothing is cached between calls and the same
//! inputs always yield the same rows.

pub mod day;
pub mod paths;
pub mod year;

pub use day::{day_series, DaySeries, DaySeriesRequest, NightSummary, VisibilitySample};
pub use paths::{body_path, moon_path, planet_path, PathPoint};
pub use year::{year_series, YearSample};

use crate::constants::Degree;

/// Altitudes below the celestial horizon are not charted.
pub(crate) fn above_horizon(altitude: Degree) -> Option<Degree> {
    (altitude >= 0.0).then_some(altitude)
}
