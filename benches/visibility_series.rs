use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mosaic_planner::ephemeris::Planet;
use mosaic_planner::horizon::HorizonMask;
use mosaic_planner::kepler::solve_kepler;
use mosaic_planner::observer::GeoLocation;
use mosaic_planner::series::{day_series, year_series, DaySeriesRequest};
use mosaic_planner::time::Instant;
use mosaic_planner::EquatorialCoordinate;

/// 2024-01-15T12:00 UTC
const MIDDAY: Instant = Instant::from_unix_millis(1_705_320_000_000.0);

/// Planetary eccentricities: e ∈ [0, 0.25]
fn bench_kepler(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler/planetary_e<=0.25", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rng.random_range(0.0..360.0), rng.random_range(0.0..=0.25)))
                    .collect::<Vec<(f64, f64)>>()
            },
            |cases| {
                for (mean_anomaly, e) in cases {
                    black_box(solve_kepler(black_box(mean_anomaly), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One night of 5 minute samples with the Moon and a planet, random targets and sites.
fn bench_day_series(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let horizon = HorizonMask::new(Some(&[25.0, 30.0, 35.0]), Some(&[10.0])).unwrap();

    c.bench_function("day_series/5min_with_planet", |b| {
        b.iter_batched(
            || {
                let location =
                    GeoLocation::new(rng.random_range(-60.0..60.0), rng.random_range(-180.0..180.0))
                        .unwrap();
                let target = EquatorialCoordinate::new(
                    rng.random_range(0.0..360.0),
                    rng.random_range(-90.0..=90.0),
                );
                let request = DaySeriesRequest::new(target, MIDDAY)
                    .with_planet(Some(Planet::Jupiter))
                    .with_meridian_transit(20.0)
                    .unwrap();
                (location, request)
            },
            |(location, request)| black_box(day_series(&location, &horizon, &request)),
            BatchSize::SmallInput,
        )
    });
}

/// A full year of midnight samples at a fixed site.
fn bench_year_series(c: &mut Criterion) {
    let location = GeoLocation::new(45.0, 7.0).unwrap();
    let target = EquatorialCoordinate::from_hours(5.588, -5.39);

    c.bench_function("year_series/366_days", |b| {
        b.iter(|| {
            black_box(year_series(
                &location,
                black_box(&target),
                MIDDAY,
                Some(Planet::Saturn),
            ))
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_kepler, bench_day_series, bench_year_series
);
criterion_main!(benches);
