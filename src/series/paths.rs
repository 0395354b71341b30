use crate::constants::Hour;
use crate::ephemeris::{Body, Planet};
use crate::ref_system::EquatorialCoordinate;
use crate::time::Instant;

/// Hourly Moon track over one day, both ends included.
const MOON_PATH_STEP_HOURS: Hour = 1.0;
const MOON_PATH_POINTS: usize = 25;

/// Twice-daily planet track over four weeks, both ends included.
const PLANET_PATH_STEP_HOURS: Hour = 12.0;
const PLANET_PATH_POINTS: usize = 57;

/// Position of a body at one instant of its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub time: Instant,
    pub coord: EquatorialCoordinate,
}

/// Sample the equatorial position of `body` at `start + k·step_hours` for `k` in `0..count`.
pub fn body_path(body: Body, start: Instant, step_hours: Hour, count: usize) -> Vec<PathPoint> {
    (0..count)
        .map(|k| {
            let time = start.add_hours(k as f64 * step_hours);
            PathPoint {
                time,
                coord: body.position(time).coord,
            }
        })
        .collect()
}

/// Moon track from `start` over 24 hours, one point per hour.
pub fn moon_path(start: Instant) -> Vec<PathPoint> {
    body_path(Body::Moon, start, MOON_PATH_STEP_HOURS, MOON_PATH_POINTS)
}

/// Planet track from `start` over four weeks, one point every 12 hours.
pub fn planet_path(planet: Planet, start: Instant) -> Vec<PathPoint> {
    body_path(
        Body::Planet(planet),
        start,
        PLANET_PATH_STEP_HOURS,
        PLANET_PATH_POINTS,
    )
}

#[cfg(test)]
mod paths_test {
    use super::*;

    const START: Instant = Instant::from_unix_millis(1_704_067_200_000.0);

    #[test]
    fn test_moon_path_spans_a_day() {
        let path = moon_path(START);
        assert_eq!(path.len(), 25);
        assert_eq!(path[24].time, START.add_hours(24.0));

        // The Moon moves about 13° per day along the ecliptic
        let travelled = path[0].coord.separation(&path[24].coord);
        assert!(travelled > 10.0 && travelled < 16.0, "{travelled}");
    }

    #[test]
    fn test_planet_path_spans_four_weeks() {
        let path = planet_path(Planet::Jupiter, START);
        assert_eq!(path.len(), 57);
        assert_eq!(path[56].time, START.add_days(28.0));
        assert!(path[0].coord.separation(&path[56].coord) < 10.0);
    }
}
