use thiserror::Error;

use crate::constants::{Degree, Hour};

/// Contract violations detected at the engine boundary.
///
/// Expected astronomical degeneracies (circumpolar sun, target below the horizon,
/// Kepler iteration cap reached) are never reported through this type: they surface as
/// `Option` results or flags on the computed value.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid latitude: {0}° (expected a value in [-90, 90])")]
    InvalidLatitude(Degree),

    #[error("Invalid longitude: {0}° (expected a value in [-180, 360])")]
    InvalidLongitude(Degree),

    #[error("Invalid planet index: {0} (expected 0 = Mercury … 6 = Neptune)")]
    InvalidPlanetIndex(usize),

    #[error("Invalid field of view: {width} x {height} (both sides must be finite and positive)")]
    InvalidFieldOfView { width: Degree, height: Degree },

    #[error("Invalid overlap: {0}% (expected a value in [0, 100))")]
    InvalidOverlap(f64),

    #[error("Invalid grid size: {columns} x {rows} (each side must be in 1..=26)")]
    InvalidGridSize { columns: usize, rows: usize },

    #[error("Invalid off-axis gap: {0}° (expected a finite, non-negative value)")]
    InvalidOffAxisGap(Degree),

    #[error("The offaxis grid type requires an off-axis guide configuration")]
    MissingOffAxisGuide,

    #[error("Invalid horizon profile: sample {index} is not a finite altitude")]
    InvalidHorizonProfile { index: usize },

    #[error("Invalid meridian transit duration: {0} minutes")]
    InvalidMeridianTransit(f64),

    #[error("Invalid twilight altitude: {0}° (expected a value in [-90, 90])")]
    InvalidTwilightAltitude(Degree),

    #[error("Invalid timezone offset: {0} h (expected a value in [-24, 24])")]
    InvalidTimezoneOffset(Hour),

    #[error("Invalid sampling step: {0} minutes")]
    InvalidStep(f64),

    #[error("Invalid coordinate: ra = {ra}°, dec = {dec}°")]
    InvalidCoordinate { ra: Degree, dec: Degree },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unable to parse the configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unable to read the target catalog: {0}")]
    CatalogParse(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for PlannerError {
    fn eq(&self, other: &Self) -> bool {
        use PlannerError::*;
        match (self, other) {
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b,
            (InvalidLongitude(a), InvalidLongitude(b)) => a == b,
            (InvalidPlanetIndex(a), InvalidPlanetIndex(b)) => a == b,
            (
                InvalidFieldOfView {
                    width: w1,
                    height: h1,
                },
                InvalidFieldOfView {
                    width: w2,
                    height: h2,
                },
            ) => w1 == w2 && h1 == h2,
            (InvalidOverlap(a), InvalidOverlap(b)) => a == b,
            (
                InvalidGridSize {
                    columns: c1,
                    rows: r1,
                },
                InvalidGridSize {
                    columns: c2,
                    rows: r2,
                },
            ) => c1 == c2 && r1 == r2,
            (InvalidOffAxisGap(a), InvalidOffAxisGap(b)) => a == b,
            (MissingOffAxisGuide, MissingOffAxisGuide) => true,
            (InvalidHorizonProfile { index: a }, InvalidHorizonProfile { index: b }) => a == b,
            (InvalidMeridianTransit(a), InvalidMeridianTransit(b)) => a == b,
            (InvalidTwilightAltitude(a), InvalidTwilightAltitude(b)) => a == b,
            (InvalidTimezoneOffset(a), InvalidTimezoneOffset(b)) => a == b,
            (InvalidStep(a), InvalidStep(b)) => a == b,
            (InvalidCoordinate { ra: r1, dec: d1 }, InvalidCoordinate { ra: r2, dec: d2 }) => {
                r1 == r2 && d1 == d2
            }
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // Foreign errors are not comparable: equal when the variant matches
            (ConfigParse(_), ConfigParse(_)) => true,
            (CatalogParse(_), CatalogParse(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
