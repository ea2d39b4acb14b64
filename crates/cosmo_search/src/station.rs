//! Retrograde station detector.
//!
//! Works at day resolution: a body's daily speed is the longitude change
//! from one noon to the next, corrected for 0°/360° wraparound. A day is a
//! retrograde start when the previous day's speed was positive and its own
//! is negative — the first day of reversed motion carries the event. A
//! retrograde end is the mirror condition.

use cosmo_core::{Body, Ephemeris};
use cosmo_time::{CivilDate, days_in_month};
use log::warn;

use crate::error::SearchError;
use crate::station_types::{StationEvent, StationKind};

fn noon_jd(date: CivilDate) -> f64 {
    date.to_jd() + 0.5
}

/// Daily longitude speed of `body` on `date`, in degrees per day.
///
/// Raw differences beyond ±180° are wraparound artifacts, not real motion,
/// and are folded back by one full turn.
pub fn longitude_speed(
    eph: &dyn Ephemeris,
    body: Body,
    date: CivilDate,
) -> Result<f64, SearchError> {
    let lon_today = eph.ecliptic_longitude(noon_jd(date), body)?;
    let lon_next = eph.ecliptic_longitude(noon_jd(date.add_days(1)), body)?;

    let mut speed = lon_next - lon_today;
    if speed > 180.0 {
        speed -= 360.0;
    } else if speed < -180.0 {
        speed += 360.0;
    }
    Ok(speed)
}

/// Classify `date` as a station day, if it is one.
///
/// Compares yesterday's speed against today's: the first day of reversed
/// motion is the station day.
pub fn station_on_day(
    eph: &dyn Ephemeris,
    body: Body,
    date: CivilDate,
) -> Result<Option<StationKind>, SearchError> {
    let speed_prev = longitude_speed(eph, body, date.add_days(-1))?;
    let speed_today = longitude_speed(eph, body, date)?;

    if speed_prev > 0.0 && speed_today < 0.0 {
        Ok(Some(StationKind::RetrogradeStart))
    } else if speed_prev < 0.0 && speed_today > 0.0 {
        Ok(Some(StationKind::RetrogradeEnd))
    } else {
        Ok(None)
    }
}

/// First station of `body` on or after `from`, scanning up to
/// `max_days` ahead.
///
/// Returns `Ok(None)` when no station occurs inside the horizon.
pub fn next_station(
    eph: &dyn Ephemeris,
    body: Body,
    from: CivilDate,
    max_days: u32,
) -> Result<Option<StationEvent>, SearchError> {
    for offset in 0..max_days {
        let date = from.add_days(offset as i64);
        if let Some(kind) = station_on_day(eph, body, date)? {
            return Ok(Some(StationEvent { body, kind, date }));
        }
    }
    Ok(None)
}

/// Scan every day of a calendar month for station events.
///
/// Adapter failures on individual days degrade to skipped days; the scan
/// never aborts.
pub fn stations_in_month(
    eph: &dyn Ephemeris,
    body: Body,
    year: i32,
    month: u32,
) -> Vec<StationEvent> {
    let n_days = days_in_month(year, month);
    if n_days == 0 {
        warn!("stations_in_month: invalid month {year}-{month}");
        return Vec::new();
    }

    let mut events = Vec::new();
    for day in 1..=n_days {
        let date = CivilDate::new(year, month, day);
        match station_on_day(eph, body, date) {
            Ok(Some(kind)) => events.push(StationEvent { body, kind, date }),
            Ok(None) => {}
            Err(e) => warn!("stations_in_month: skipping {date} for {body}: {e}"),
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_core::EphemerisError;
    use cosmo_time::CivilDateTime;

    /// Piecewise ephemeris whose Mercury speed follows a fixed per-day
    /// sequence starting at a reference date.
    struct ScriptedSpeeds {
        start: CivilDate,
        speeds: Vec<f64>,
    }

    impl Ephemeris for ScriptedSpeeds {
        fn julian_day(&self, civil: &CivilDateTime) -> Result<f64, EphemerisError> {
            Ok(civil.to_jd_utc())
        }

        fn ecliptic_longitude(&self, jd: f64, _body: Body) -> Result<f64, EphemerisError> {
            // Integrate the scripted speeds up to the queried day.
            let day = (jd - (self.start.to_jd() + 0.5)).round() as i64;
            let mut lon: f64 = 100.0;
            for i in 0..day.max(0) {
                let idx = (i as usize).min(self.speeds.len() - 1);
                lon += self.speeds[idx];
            }
            Ok(lon.rem_euclid(360.0))
        }
    }

    #[test]
    fn scripted_sequence_yields_one_start_one_end() {
        // Speeds by day index: [+1, +0.5, -0.2, -0.8, +0.3, +0.3]
        let eph = ScriptedSpeeds {
            start: CivilDate::new(2024, 5, 1),
            speeds: vec![1.0, 0.5, -0.2, -0.8, 0.3, 0.3],
        };

        let mut found = Vec::new();
        for offset in 1..5 {
            let date = CivilDate::new(2024, 5, 1).add_days(offset);
            if let Some(kind) = station_on_day(&eph, Body::Mercury, date).unwrap() {
                found.push((offset, kind));
            }
        }
        // First negative day (index 2) starts the retrograde; first
        // positive day after it (index 4) ends it.
        assert_eq!(
            found,
            vec![
                (2, StationKind::RetrogradeStart),
                (4, StationKind::RetrogradeEnd)
            ]
        );
    }

    #[test]
    fn next_station_finds_first_reversal() {
        let eph = ScriptedSpeeds {
            start: CivilDate::new(2024, 5, 1),
            speeds: vec![1.0, 0.5, -0.2, -0.8, 0.3, 0.3],
        };
        let event = next_station(&eph, Body::Mercury, CivilDate::new(2024, 5, 2), 10)
            .unwrap()
            .unwrap();
        assert_eq!(event.kind, StationKind::RetrogradeStart);
        assert_eq!(event.date, CivilDate::new(2024, 5, 3));
    }

    #[test]
    fn next_station_respects_horizon() {
        let eph = ScriptedSpeeds {
            start: CivilDate::new(2024, 5, 1),
            speeds: vec![1.2; 40],
        };
        let found = next_station(&eph, Body::Mercury, CivilDate::new(2024, 5, 2), 20).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn steady_motion_has_no_station() {
        let eph = ScriptedSpeeds {
            start: CivilDate::new(2024, 5, 1),
            speeds: vec![1.2; 10],
        };
        let result = station_on_day(&eph, Body::Mercury, CivilDate::new(2024, 5, 3)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn wraparound_not_mistaken_for_retrograde() {
        // Direct motion crossing 360°: raw difference is ~ -359°.
        struct WrapMotion;
        impl Ephemeris for WrapMotion {
            fn julian_day(&self, civil: &CivilDateTime) -> Result<f64, EphemerisError> {
                Ok(civil.to_jd_utc())
            }
            fn ecliptic_longitude(&self, jd: f64, _body: Body) -> Result<f64, EphemerisError> {
                Ok((359.5 + (jd - 2_460_000.0)).rem_euclid(360.0))
            }
        }
        let date = CivilDate::from_jd(2_460_000.0);
        let speed = longitude_speed(&WrapMotion, Body::Mercury, date).unwrap();
        assert!((speed - 1.0).abs() < 1e-9, "speed = {speed}");
    }
}
