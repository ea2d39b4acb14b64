//! Moon phase calculator.
//!
//! Phase angle is the Sun→Moon elongation: normalize(moon_lon − sun_lon).
//! Illumination is (1 − cos θ) / 2, so 0 at new moon and 1 at full moon.
//!
//! The monthly phase table is a best-effort nearest-match scan, not a
//! root-find: each named phase accepts the first day within 1.5° of its
//! target angle, otherwise the closest day of the month within 10°.
//! Some months legitimately yield fewer than eight phases. This two-tier
//! policy is a deliberate precision/coverage trade-off; do not tighten it.

use cosmo_core::{Body, Ephemeris, angular_distance, normalize_deg};
use cosmo_time::{CivilDate, days_in_month};
use log::warn;

use crate::error::SearchError;
use crate::lunar_types::{ALL_PHASES, MonthPhase, MoonPhase, MoonPhaseInfo};

/// Forward-scan cap for `next_phase_date`, just over one synodic month.
const NEXT_PHASE_MAX_DAYS: u32 = 35;

/// Acceptance tolerance for the daily forward scan.
const NEXT_PHASE_ACCEPT_DEG: f64 = 2.0;

/// Immediate-accept tolerance for the monthly scan.
const MONTH_ACCEPT_DEG: f64 = 1.5;

/// Fallback tolerance for the monthly scan's closest match.
const MONTH_FALLBACK_DEG: f64 = 10.0;

/// Noon UT of a calendar date — the sampling instant for day-level scans.
fn noon_jd(date: CivilDate) -> f64 {
    date.to_jd() + 0.5
}

/// Sun→Moon elongation at `jd`, in degrees [0, 360).
pub fn phase_angle_at(eph: &dyn Ephemeris, jd: f64) -> Result<f64, SearchError> {
    let sun = eph.ecliptic_longitude(jd, Body::Sun)?;
    let moon = eph.ecliptic_longitude(jd, Body::Moon)?;
    Ok(normalize_deg(moon - sun))
}

/// Illuminated fraction of the lunar disc for a phase angle.
pub fn illumination_fraction(phase_angle_deg: f64) -> f64 {
    (1.0 - phase_angle_deg.to_radians().cos()) / 2.0
}

/// Lunar state on `date`: phase name, illumination, and the next
/// new/full moon dates (each `None` if not found within the scan cap).
pub fn current_phase(eph: &dyn Ephemeris, date: CivilDate) -> Result<MoonPhaseInfo, SearchError> {
    let angle = phase_angle_at(eph, noon_jd(date))?;
    let phase = MoonPhase::from_phase_angle(angle);
    let illumination = illumination_fraction(angle);

    let next_new_moon = next_phase_date(eph, date, MoonPhase::NewMoon.target_angle_deg());
    let next_full_moon = next_phase_date(eph, date, MoonPhase::FullMoon.target_angle_deg());

    Ok(MoonPhaseInfo {
        phase,
        phase_angle_deg: angle,
        illumination,
        next_new_moon,
        next_full_moon,
    })
}

/// Linear forward scan for the first date whose phase angle is within 2°
/// of `target_angle_deg`. One-day steps, capped at 35 days.
///
/// Adapter failure mid-scan abandons the search as not-found.
pub fn next_phase_date(
    eph: &dyn Ephemeris,
    from: CivilDate,
    target_angle_deg: f64,
) -> Option<CivilDate> {
    for offset in 0..NEXT_PHASE_MAX_DAYS {
        let date = from.add_days(offset as i64);
        let angle = match phase_angle_at(eph, noon_jd(date)) {
            Ok(a) => a,
            Err(e) => {
                warn!("next-phase scan from {from} abandoned at {date}: {e}");
                return None;
            }
        };
        if angular_distance(angle, target_angle_deg) <= NEXT_PHASE_ACCEPT_DEG {
            return Some(date);
        }
    }
    warn!("no phase angle {target_angle_deg}° within {NEXT_PHASE_MAX_DAYS} days of {from}");
    None
}

/// Locate all eight named phases within a calendar month, chronologically.
///
/// Best-effort nearest-match per phase; phases with no day within the
/// fallback tolerance are omitted.
pub fn phases_in_month(eph: &dyn Ephemeris, year: i32, month: u32) -> Vec<MonthPhase> {
    let n_days = days_in_month(year, month);
    if n_days == 0 {
        warn!("phases_in_month: invalid month {year}-{month}");
        return Vec::new();
    }

    // Sample the phase angle once per day.
    let mut daily: Vec<(CivilDate, f64)> = Vec::with_capacity(n_days as usize);
    for day in 1..=n_days {
        let date = CivilDate::new(year, month, day);
        match phase_angle_at(eph, noon_jd(date)) {
            Ok(angle) => daily.push((date, angle)),
            Err(e) => warn!("phases_in_month: skipping {date}: {e}"),
        }
    }

    let mut found = Vec::new();
    for phase in ALL_PHASES {
        let target = phase.target_angle_deg();
        let mut best: Option<(CivilDate, f64)> = None;

        for &(date, angle) in &daily {
            let dist = angular_distance(angle, target);
            if dist <= MONTH_ACCEPT_DEG {
                best = Some((date, dist));
                break;
            }
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((date, dist));
            }
        }

        match best {
            Some((date, dist)) if dist <= MONTH_FALLBACK_DEG => {
                found.push(MonthPhase { phase, date });
            }
            _ => warn!("phases_in_month: {phase} not found in {year}-{month:02}"),
        }
    }

    found.sort_by_key(|p| p.date);
    found
}
