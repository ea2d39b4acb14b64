//! Civil calendar ↔ Julian Date conversions and date value types.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - `CivilDate` / `CivilTime` value types with ISO parsing
//! - Calendar arithmetic (day stepping, month lengths, month keys)
//!
//! Julian Dates here are plain UT-scale day numbers; the engine's
//! tolerances are pragmatic, so no leap-second or TDB machinery is carried.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, CivilDateTime, CivilTime};
pub use error::DateError;
pub use julian::{J2000_JD, MINUTES_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};
