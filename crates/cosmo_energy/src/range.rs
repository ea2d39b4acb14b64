//! Daily energy range builder — the engine's top-level orchestrator.
//!
//! For each of 7 consecutive days: build the day's cosmic chart from the
//! adapter, score its internal harmony and its compatibility against the
//! caller's natal chart, and record a per-body breakdown. The chart is
//! sampled at the requested local time (default 8:00); day stepping is
//! pure calendar arithmetic. Days are computed sequentially — the backing
//! ephemeris service is not assumed safe for concurrent load.

use cosmo_core::{
    CosmicChart, Ephemeris, NatalChart, PlanetPosition, SCORED_BODIES, SignCompatibility,
};
use cosmo_search::monthly_summary;
use cosmo_time::{CivilDate, CivilDateTime};
use log::warn;

use crate::range_types::{
    BodyEnergy, DailyEnergy, DailyEnergyRangeResponse, EnergyRequest, RANGE_DAYS,
};
use crate::scorer::{body_interactions, chart_vs_natal, interaction_mean, internal_harmony, round2};

/// Build the cosmic chart for one instant: the five scored bodies'
/// positions, with per-body adapter failures degrading to absent entries.
pub fn compute_cosmic_chart(eph: &dyn Ephemeris, jd: f64) -> CosmicChart {
    let mut chart = CosmicChart::new();
    for body in SCORED_BODIES {
        match eph.ecliptic_longitude(jd, body) {
            Ok(lon) => {
                chart = chart.with_position(PlanetPosition::from_longitude(body, lon));
            }
            Err(e) => warn!("chart at jd {jd:.5}: {body} position unavailable: {e}"),
        }
    }
    chart
}

/// Compute one day's energy entry.
fn compute_day(
    eph: &dyn Ephemeris,
    strategy: &dyn SignCompatibility,
    natal: &NatalChart,
    date: CivilDate,
    request: &EnergyRequest,
) -> DailyEnergy {
    // Chart instant: the requested local time on this calendar day. Day
    // stepping is pure calendar arithmetic, so there is no DST boundary
    // ambiguity to anchor around.
    let civil = CivilDateTime::new(date, request.time, request.utc_offset_hours);
    let jd = match eph.julian_day(&civil) {
        Ok(jd) => jd,
        Err(e) => {
            warn!("day {date}: julian day unresolved, degrading to neutral: {e}");
            return DailyEnergy::neutral(date);
        }
    };

    let chart = compute_cosmic_chart(eph, jd);
    let personal = chart_vs_natal(strategy, &chart, natal);
    let cosmic_total = internal_harmony(strategy, &chart);

    let bodies = SCORED_BODIES
        .iter()
        .map(|&body| {
            let interactions = body_interactions(strategy, &chart, body);
            BodyEnergy {
                body,
                sign: chart.sign(body),
                personal_score: personal.body(body).map(|b| round2(b.score)),
                cosmic_score: interaction_mean(&interactions),
                interactions,
            }
        })
        .collect();

    DailyEnergy {
        date,
        cosmic_total_score: cosmic_total,
        personal_total_score: personal.total_score,
        bodies,
    }
}

/// Build the 7-day forward-looking energy report.
///
/// Never fails: degraded days report neutral scores, and the weekly means
/// always average exactly [`RANGE_DAYS`] entries.
pub fn build_daily_energy_range(
    eph: &dyn Ephemeris,
    strategy: &dyn SignCompatibility,
    natal: &NatalChart,
    request: &EnergyRequest,
) -> DailyEnergyRangeResponse {
    let start = request.start_date;

    let mut days = Vec::with_capacity(RANGE_DAYS);
    for offset in 0..RANGE_DAYS {
        let date = start.add_days(offset as i64);
        days.push(compute_day(eph, strategy, natal, date, request));
    }

    let n = days.len() as f64;
    let cosmic_score_total = round2(days.iter().map(|d| d.cosmic_total_score).sum::<f64>() / n);
    let personal_score_total = round2(days.iter().map(|d| d.personal_total_score).sum::<f64>() / n);

    let monthly_astronomical_summary = monthly_summary(eph, start);

    DailyEnergyRangeResponse {
        start_date: start,
        end_date: start.add_days(RANGE_DAYS as i64 - 1),
        days,
        cosmic_score_total,
        personal_score_total,
        monthly_astronomical_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_core::{Body, EphemerisError};

    struct StaticSky;

    impl Ephemeris for StaticSky {
        fn julian_day(&self, civil: &CivilDateTime) -> Result<f64, EphemerisError> {
            Ok(civil.to_jd_utc())
        }

        fn ecliptic_longitude(&self, _jd: f64, body: Body) -> Result<f64, EphemerisError> {
            // Everything except Mars resolves; Mars is unavailable.
            match body {
                Body::Mars => Err(EphemerisError::Unavailable("no mars".into())),
                Body::Sun => Ok(10.0),
                Body::Moon => Ok(40.0),
                Body::Rising => Ok(70.0),
                Body::Venus => Ok(100.0),
                Body::Mercury => Ok(130.0),
            }
        }
    }

    #[test]
    fn chart_skips_failed_bodies() {
        let chart = compute_cosmic_chart(&StaticSky, 2_460_000.0);
        assert_eq!(chart.positions().len(), 4);
        assert!(chart.sign(Body::Mars).is_none());
        assert!(chart.sign(Body::Sun).is_some());
    }

    #[test]
    fn request_defaults() {
        let request = EnergyRequest::new(CivilDate::new(2024, 6, 1));
        assert_eq!(request.time, cosmo_time::CivilTime::new(8, 0));
        assert_eq!(request.utc_offset_hours, 0.0);
    }
}
