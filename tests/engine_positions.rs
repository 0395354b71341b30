mod common;

use approx::assert_abs_diff_eq;
use common::{assert_coord_close, london, EQUINOX_MIDDAY, FULL_MOON, NEW_MOON};
use mosaic_planner::ephemeris::{
    moon_phase, planet_position, planet_position_from_elements, sun_position, Body, Planet,
};
use mosaic_planner::observer::{alt_az, zenith, GeoLocation};
use mosaic_planner::ref_system::EquatorialCoordinate;
use mosaic_planner::rise_set::sunrise_sunset;
use mosaic_planner::time::{local_sidereal_time, Instant};

#[test]
fn test_sun_at_equinox() {
    let sun = sun_position(EQUINOX_MIDDAY);
    assert!(sun.coord.ra < 1.0 || sun.coord.ra > 359.0);
    assert_abs_diff_eq!(sun.coord.dec, 0.0, epsilon = 0.5);
    assert!(sun.kepler.converged);
}

#[test]
fn test_jupiter_new_year_2024() {
    // Jupiter was in Aries, near RA 2h14m Dec +12°
    let t = Instant::from_date_utc(2024, 1, 1).unwrap();
    let jupiter = planet_position(t, Planet::Jupiter);
    assert_coord_close(&jupiter.coord, &EquatorialCoordinate::new(33.6, 12.2), 1.0);
}

#[test]
fn test_planet_position_is_deterministic() {
    let t = Instant::from_unix_millis(1_700_000_000_123.0);
    for planet in Planet::ALL {
        let a = planet_position_from_elements(t, planet.elements());
        let b = planet_position_from_elements(t, planet.elements());
        assert_eq!(a.coord.ra.to_bits(), b.coord.ra.to_bits());
        assert_eq!(a.coord.dec.to_bits(), b.coord.dec.to_bits());
        assert_eq!(Body::Planet(planet).position(t), a);
    }
}

#[test]
fn test_moon_phase_extremes() {
    assert!(moon_phase(FULL_MOON) > 90.0);
    assert!(moon_phase(NEW_MOON) < 10.0);
}

#[test]
fn test_zenith_round_trip() {
    let loc = GeoLocation::new(-24.6, -70.4).unwrap();
    for hour in 0..24 {
        let t = EQUINOX_MIDDAY.add_hours(hour as f64);
        let overhead = zenith(t, &loc);
        assert_abs_diff_eq!(overhead.ra, local_sidereal_time(-70.4, t), epsilon = 1e-12);
        assert_abs_diff_eq!(alt_az(t, &overhead, &loc).altitude, 90.0, epsilon = 1e-5);
    }
}

#[test]
fn test_london_equinox_night() {
    let times = sunrise_sunset(EQUINOX_MIDDAY, &london(), 0.0).unwrap();
    assert!(times.sunset < times.sunrise);
    assert_abs_diff_eq!(times.night_hours(), 12.0, epsilon = 0.5);
}

#[test]
fn test_sun_below_horizon_at_midnight() {
    let times = sunrise_sunset(EQUINOX_MIDDAY, &london(), 0.0).unwrap();
    let sun = sun_position(times.midnight());
    assert!(alt_az(times.midnight(), &sun.coord, &london()).altitude < -30.0);
}
