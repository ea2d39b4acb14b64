//! Benchmarks for the crossing solver and monthly scans on a synthetic
//! linear-motion ephemeris.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cosmo_core::{Body, Ephemeris, EphemerisError, normalize_deg};
use cosmo_search::{CrossingConfig, find_crossing, phases_in_month, stations_in_month};
use cosmo_time::CivilDateTime;

struct LinearSky;

const EPOCH: f64 = 2_460_000.0;

impl Ephemeris for LinearSky {
    fn julian_day(&self, civil: &CivilDateTime) -> Result<f64, EphemerisError> {
        Ok(civil.to_jd_utc())
    }

    fn ecliptic_longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        let rate = match body {
            Body::Moon => 13.0,
            Body::Mercury => 1.4,
            _ => 1.0,
        };
        Ok(normalize_deg((jd - EPOCH) * rate))
    }
}

fn bench_crossing(c: &mut Criterion) {
    let eph = LinearSky;
    let config = CrossingConfig::default();
    c.bench_function("find_crossing_sun_6day_window", |b| {
        b.iter(|| {
            find_crossing(
                &eph,
                Body::Sun,
                black_box(15.0),
                EPOCH + 10.0,
                EPOCH + 16.0,
                &config,
            )
        })
    });
}

fn bench_month_scans(c: &mut Criterion) {
    let eph = LinearSky;
    c.bench_function("phases_in_month", |b| {
        b.iter(|| phases_in_month(&eph, black_box(2024), black_box(3)))
    });
    c.bench_function("stations_in_month_mercury", |b| {
        b.iter(|| stations_in_month(&eph, Body::Mercury, black_box(2024), black_box(3)))
    });
}

criterion_group!(benches, bench_crossing, bench_month_scans);
criterion_main!(benches);
