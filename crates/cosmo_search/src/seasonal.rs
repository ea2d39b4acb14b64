//! Seasonal event calculator: solstices and equinoxes.
//!
//! Each season point is the Sun crossing one of four fixed longitudes.
//! Calendar-approximate dates seed a ±3-day solver window; single-day
//! lookups additionally confirm the solved instant lands within 24 hours
//! of the requested day.

use cosmo_core::{Body, Ephemeris};
use cosmo_time::CivilDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::crossing::{CrossingConfig, find_crossing};

/// Half-width of the solver window around an approximate date, in days.
const SOLVER_WINDOW_DAYS: f64 = 3.0;

/// Candidate tolerance for single-day lookups, in calendar days.
const DAY_CANDIDATE_DAYS: i64 = 2;

/// The four seasonal points of the tropical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonKind {
    SpringEquinox,
    SummerSolstice,
    AutumnEquinox,
    WinterSolstice,
}

/// All four season points in calendar order.
pub const ALL_SEASONS: [SeasonKind; 4] = [
    SeasonKind::SpringEquinox,
    SeasonKind::SummerSolstice,
    SeasonKind::AutumnEquinox,
    SeasonKind::WinterSolstice,
];

impl SeasonKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpringEquinox => "Spring Equinox",
            Self::SummerSolstice => "Summer Solstice",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::WinterSolstice => "Winter Solstice",
        }
    }

    /// Solar longitude at this season point, in degrees.
    pub const fn target_longitude_deg(self) -> f64 {
        match self {
            Self::SpringEquinox => 0.0,
            Self::SummerSolstice => 90.0,
            Self::AutumnEquinox => 180.0,
            Self::WinterSolstice => 270.0,
        }
    }

    /// Calendar-approximate `(month, day)` of this season point.
    pub const fn approximate_date(self) -> (u32, u32) {
        match self {
            Self::SpringEquinox => (3, 20),
            Self::SummerSolstice => (6, 21),
            Self::AutumnEquinox => (9, 23),
            Self::WinterSolstice => (12, 21),
        }
    }
}

impl std::fmt::Display for SeasonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A located seasonal event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalEvent {
    pub kind: SeasonKind,
    pub date: CivilDate,
    /// Solved crossing instant as a Julian Date (UT).
    pub jd: f64,
}

/// Solve for a season point near its approximate date in `year`.
fn solve_season(eph: &dyn Ephemeris, kind: SeasonKind, year: i32) -> Option<SeasonalEvent> {
    let (month, day) = kind.approximate_date();
    let approx_jd = CivilDate::new(year, month, day).to_jd() + 0.5;

    let config = CrossingConfig::default();
    let result = find_crossing(
        eph,
        Body::Sun,
        kind.target_longitude_deg(),
        approx_jd - SOLVER_WINDOW_DAYS,
        approx_jd + SOLVER_WINDOW_DAYS,
        &config,
    );

    match result {
        Ok(Some(jd)) => Some(SeasonalEvent {
            kind,
            date: CivilDate::from_jd(jd),
            jd,
        }),
        Ok(None) => {
            warn!("{kind} {year}: crossing not found");
            None
        }
        Err(e) => {
            warn!("{kind} {year}: solver rejected: {e}");
            None
        }
    }
}

/// Seasonal events whose approximate date falls in the given month.
pub fn seasonal_events_in_month(eph: &dyn Ephemeris, year: i32, month: u32) -> Vec<SeasonalEvent> {
    ALL_SEASONS
        .iter()
        .filter(|kind| kind.approximate_date().0 == month)
        .filter_map(|&kind| solve_season(eph, kind, year))
        .collect()
}

/// Seasonal event on one specific day, if any.
///
/// The day must be within ±2 calendar days of an approximate date to be a
/// candidate; the solved instant must then fall within 24 hours of the
/// requested day's noon, so the window covers the day symmetrically.
pub fn seasonal_event_on_day(eph: &dyn Ephemeris, date: CivilDate) -> Option<SeasonalEvent> {
    for kind in ALL_SEASONS {
        let (month, day) = kind.approximate_date();
        let approx = CivilDate::new(date.year, month, day);
        if approx.days_until(date).abs() > DAY_CANDIDATE_DAYS {
            continue;
        }

        if let Some(event) = solve_season(eph, kind, date.year) {
            let day_noon_jd = date.to_jd() + 0.5;
            if (event.jd - day_noon_jd).abs() <= 1.0 {
                return Some(event);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_quarter_circle() {
        for (i, kind) in ALL_SEASONS.iter().enumerate() {
            assert!((kind.target_longitude_deg() - i as f64 * 90.0).abs() < 1e-12);
        }
    }

    #[test]
    fn approximate_dates_in_calendar_order() {
        let months: Vec<u32> = ALL_SEASONS.iter().map(|k| k.approximate_date().0).collect();
        assert_eq!(months, vec![3, 6, 9, 12]);
    }

    #[test]
    fn day_confirmation_anchors_on_noon() {
        use cosmo_core::normalize_deg;

        // Sun crosses 0° at 01:00 of 2024-03-20, 1°/day.
        struct EarlyEquinox {
            equinox_jd: f64,
        }
        impl Ephemeris for EarlyEquinox {
            fn julian_day(
                &self,
                civil: &cosmo_time::CivilDateTime,
            ) -> Result<f64, cosmo_core::EphemerisError> {
                Ok(civil.to_jd_utc())
            }
            fn ecliptic_longitude(
                &self,
                jd: f64,
                _body: Body,
            ) -> Result<f64, cosmo_core::EphemerisError> {
                Ok(normalize_deg(jd - self.equinox_jd))
            }
        }

        let eph = EarlyEquinox {
            equinox_jd: CivilDate::new(2024, 3, 20).to_jd() + 1.0 / 24.0,
        };
        // The crossing day itself always confirms.
        assert!(seasonal_event_on_day(&eph, CivilDate::new(2024, 3, 20)).is_some());
        // The next day's noon is ~35 hours after the crossing: no event,
        // even though the crossing is within 24 hours of that day's start.
        assert!(seasonal_event_on_day(&eph, CivilDate::new(2024, 3, 21)).is_none());
    }

    #[test]
    fn non_seasonal_month_is_empty() {
        // No adapter calls are needed when the month holds no season point.
        struct Panicking;
        impl Ephemeris for Panicking {
            fn julian_day(
                &self,
                _civil: &cosmo_time::CivilDateTime,
            ) -> Result<f64, cosmo_core::EphemerisError> {
                unreachable!()
            }
            fn ecliptic_longitude(
                &self,
                _jd: f64,
                _body: Body,
            ) -> Result<f64, cosmo_core::EphemerisError> {
                unreachable!()
            }
        }
        assert!(seasonal_events_in_month(&Panicking, 2024, 5).is_empty());
    }
}
