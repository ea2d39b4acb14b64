//! Types for daily and monthly event aggregation.

use serde::{Deserialize, Serialize};

use cosmo_time::CivilDate;

use crate::lunar_types::{MonthPhase, MoonPhaseInfo};

/// Kind of a named astronomical occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Seasonal,
    RetrogradeStart,
    RetrogradeEnd,
    Eclipse,
}

/// A named astronomical occurrence.
///
/// Point events (seasonal, eclipse) populate `date`; span-opening and
/// span-closing events (retrograde start/end) populate `start_date` or
/// `end_date` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronomicalEvent {
    pub kind: EventKind,
    pub name: String,
    pub date: Option<CivilDate>,
    pub start_date: Option<CivilDate>,
    pub end_date: Option<CivilDate>,
}

impl AstronomicalEvent {
    pub fn point(kind: EventKind, name: impl Into<String>, date: CivilDate) -> Self {
        Self {
            kind,
            name: name.into(),
            date: Some(date),
            start_date: None,
            end_date: None,
        }
    }

    pub fn span_start(name: impl Into<String>, date: CivilDate) -> Self {
        Self {
            kind: EventKind::RetrogradeStart,
            name: name.into(),
            date: None,
            start_date: Some(date),
            end_date: None,
        }
    }

    pub fn span_end(name: impl Into<String>, date: CivilDate) -> Self {
        Self {
            kind: EventKind::RetrogradeEnd,
            name: name.into(),
            date: None,
            start_date: None,
            end_date: Some(date),
        }
    }

    /// The event's effective date, whichever field carries it.
    pub fn effective_date(&self) -> Option<CivilDate> {
        self.date.or(self.start_date).or(self.end_date)
    }

    /// ISO string of the effective date; used for chronological sorting.
    ///
    /// Lexicographic ISO-date ordering is chronological ordering, which is
    /// why string sort is sufficient here.
    pub fn sort_key(&self) -> String {
        self.effective_date()
            .map(|d| d.to_string())
            .unwrap_or_default()
    }
}

/// One day's astronomical summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAstronomicalEvents {
    pub date: CivilDate,
    pub moon_phase: MoonPhaseInfo,
    pub events: Vec<AstronomicalEvent>,
}

/// One month's astronomical summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAstronomicalSummary {
    /// `"YYYY-MM"` month key.
    pub month: String,
    /// Up to eight named phases, chronological.
    pub moon_phases: Vec<MonthPhase>,
    /// All other events, chronological.
    pub events: Vec<AstronomicalEvent>,
}
