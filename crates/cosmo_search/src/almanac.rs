//! Daily and monthly event aggregation.
//!
//! Joins the moon phase calculator, station detector, seasonal calculator,
//! and the (intentionally empty) eclipse feed into per-day and per-month
//! summaries. Aggregation degrades on internal failure instead of
//! propagating: a summary with a defaulted component is more useful to the
//! calling layer than no summary.

use cosmo_core::{Body, Ephemeris};
use cosmo_time::CivilDate;
use log::warn;

use crate::almanac_types::{
    AstronomicalEvent, DailyAstronomicalEvents, EventKind, MonthlyAstronomicalSummary,
};
use crate::lunar::{current_phase, phases_in_month};
use crate::lunar_types::MoonPhaseInfo;
use crate::seasonal::{seasonal_event_on_day, seasonal_events_in_month};
use crate::station::{station_on_day, stations_in_month};
use crate::station_types::StationKind;

/// Eclipses for a month.
///
/// The upstream feed never produced eclipse data; the empty result is the
/// contract, preserved as-is. TODO: populate once an eclipse source is
/// wired into the ephemeris backend.
pub fn eclipses_in_month(_year: i32, _month: u32) -> Vec<AstronomicalEvent> {
    Vec::new()
}

fn station_event(body: Body, kind: StationKind, date: CivilDate) -> AstronomicalEvent {
    match kind {
        StationKind::RetrogradeStart => {
            AstronomicalEvent::span_start(format!("{body} Retrograde"), date)
        }
        StationKind::RetrogradeEnd => {
            AstronomicalEvent::span_end(format!("{body} Direct"), date)
        }
    }
}

/// One day's astronomical summary: moon phase, Mercury stations, seasonal
/// events, eclipses (empty).
///
/// Never fails: a fully degraded day reports a default New Moon with no
/// events.
pub fn daily_events(eph: &dyn Ephemeris, date: CivilDate) -> DailyAstronomicalEvents {
    let moon_phase = match current_phase(eph, date) {
        Ok(info) => info,
        Err(e) => {
            warn!("daily_events {date}: moon phase degraded: {e}");
            MoonPhaseInfo::default_new_moon()
        }
    };

    let mut events = Vec::new();

    match station_on_day(eph, Body::Mercury, date) {
        Ok(Some(kind)) => events.push(station_event(Body::Mercury, kind, date)),
        Ok(None) => {}
        Err(e) => warn!("daily_events {date}: station check degraded: {e}"),
    }

    if let Some(seasonal) = seasonal_event_on_day(eph, date) {
        events.push(AstronomicalEvent::point(
            EventKind::Seasonal,
            seasonal.kind.name(),
            seasonal.date,
        ));
    }

    // Eclipse feed is intentionally empty; nothing to join.

    DailyAstronomicalEvents {
        date,
        moon_phase,
        events,
    }
}

/// One month's astronomical summary for the month containing `date`.
///
/// Events from all sources are concatenated and sorted by ISO date string;
/// lexicographic order on `YYYY-MM-DD` is chronological order.
pub fn monthly_summary(eph: &dyn Ephemeris, date: CivilDate) -> MonthlyAstronomicalSummary {
    let (year, month) = (date.year, date.month);

    let moon_phases = phases_in_month(eph, year, month);

    let mut events: Vec<AstronomicalEvent> = Vec::new();

    for station in stations_in_month(eph, Body::Mercury, year, month) {
        events.push(station_event(station.body, station.kind, station.date));
    }

    for seasonal in seasonal_events_in_month(eph, year, month) {
        events.push(AstronomicalEvent::point(
            EventKind::Seasonal,
            seasonal.kind.name(),
            seasonal.date,
        ));
    }

    events.extend(eclipses_in_month(year, month));

    events.sort_by_key(AstronomicalEvent::sort_key);

    MonthlyAstronomicalSummary {
        month: date.month_key(),
        moon_phases,
        events,
    }
}
