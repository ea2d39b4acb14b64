//! Types for the 7-day daily energy report.

use serde::{Deserialize, Serialize};

use cosmo_core::{Body, Sign};
use cosmo_search::MonthlyAstronomicalSummary;
use cosmo_time::{CivilDate, CivilTime};

use crate::scorer_types::BodyInteraction;

/// Number of days in an energy range report.
pub const RANGE_DAYS: usize = 7;

/// Parameters for an energy range request.
///
/// The caller resolves timezone names and coordinates upstream; the
/// engine receives the resulting fixed UTC offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRequest {
    pub start_date: CivilDate,
    /// Local chart time; defaults to 8:00.
    pub time: CivilTime,
    /// Fixed offset of local time from UTC, in hours.
    pub utc_offset_hours: f64,
}

impl EnergyRequest {
    pub fn new(start_date: CivilDate) -> Self {
        Self {
            start_date,
            time: CivilTime::default(),
            utc_offset_hours: 0.0,
        }
    }

    pub fn with_time(mut self, time: CivilTime) -> Self {
        self.time = time;
        self
    }

    pub fn with_utc_offset(mut self, hours: f64) -> Self {
        self.utc_offset_hours = hours;
        self
    }
}

/// One body's entry in a day's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyEnergy {
    pub body: Body,
    /// The day's cosmic sign for this body, if resolved.
    pub sign: Option<Sign>,
    /// Cosmic-vs-natal score for this body, if both signs resolved.
    pub personal_score: Option<f64>,
    /// Weighted mean of this body's pairwise interactions in the day's
    /// chart, weighted by the other body's importance.
    pub cosmic_score: Option<f64>,
    /// The pairwise terms behind `cosmic_score`, one per present partner.
    pub interactions: Vec<BodyInteraction>,
}

/// One day's dual score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEnergy {
    pub date: CivilDate,
    /// Internal harmony of the day's chart, [-1, 1], 2 decimals.
    pub cosmic_total_score: f64,
    /// Cosmic-vs-natal compatibility, [-1, 1], 2 decimals.
    pub personal_total_score: f64,
    pub bodies: Vec<BodyEnergy>,
}

impl DailyEnergy {
    /// Neutral day used when a day's computation fails entirely.
    pub fn neutral(date: CivilDate) -> Self {
        Self {
            date,
            cosmic_total_score: 0.0,
            personal_total_score: 0.0,
            bodies: Vec::new(),
        }
    }
}

/// The 7-day forward-looking report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEnergyRangeResponse {
    pub start_date: CivilDate,
    pub end_date: CivilDate,
    /// Exactly [`RANGE_DAYS`] entries, consecutive calendar days.
    pub days: Vec<DailyEnergy>,
    /// Arithmetic mean of the per-day cosmic totals, 2 decimals.
    pub cosmic_score_total: f64,
    /// Arithmetic mean of the per-day personal totals, 2 decimals.
    pub personal_score_total: f64,
    pub monthly_astronomical_summary: MonthlyAstronomicalSummary,
}
