pub mod angles;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod horizon;
pub mod kepler;
pub mod mosaic;
pub mod observer;
pub mod planner;
pub mod planner_errors;
pub mod ref_system;
pub mod rise_set;
pub mod series;
pub mod time;

pub use config::PlannerConfig;
pub use planner::Planner;
pub use planner_errors::PlannerError;
pub use ref_system::EquatorialCoordinate;
pub use time::Instant;
