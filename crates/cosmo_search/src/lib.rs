//! Astronomical event search engine: longitude crossings, moon phases,
//! retrograde stations, seasonal points, and daily/monthly almanacs.
//!
//! This crate provides:
//! - Bisection solver for a body's longitude crossing a target angle
//! - Moon phase classification, next-phase scan, and monthly phase table
//! - Retrograde station detection (single day and full-month scans)
//! - Solstice/equinox location around calendar-approximate dates
//! - Daily and monthly event aggregation with degrade-don't-abort policy
//!
//! All searches treat "not found within the bounded window" as an ordinary
//! outcome (`None` / empty, logged at warning level), never an error.

pub mod almanac;
pub mod almanac_types;
pub mod crossing;
pub mod error;
pub mod lunar;
pub mod lunar_types;
pub mod seasonal;
pub mod station;
pub mod station_types;

pub use almanac::{daily_events, eclipses_in_month, monthly_summary};
pub use almanac_types::{AstronomicalEvent, DailyAstronomicalEvents, EventKind, MonthlyAstronomicalSummary};
pub use crossing::{CrossingConfig, find_crossing};
pub use error::SearchError;
pub use lunar::{current_phase, illumination_fraction, next_phase_date, phase_angle_at, phases_in_month};
pub use lunar_types::{ALL_PHASES, MonthPhase, MoonPhase, MoonPhaseInfo};
pub use seasonal::{
    ALL_SEASONS, SeasonKind, SeasonalEvent, seasonal_event_on_day, seasonal_events_in_month,
};
pub use station::{longitude_speed, next_station, station_on_day, stations_in_month};
pub use station_types::{StationEvent, StationKind};
