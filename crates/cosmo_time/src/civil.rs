//! Civil date/time value types with ISO parsing and calendar arithmetic.
//!
//! `CivilDate` is the canonical day identifier used throughout the engine;
//! `CivilDateTime` pins a date to a clock time for ephemeris queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

/// A calendar date (proleptic Gregorian), no time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse_iso(input: &str) -> Result<Self, DateError> {
        let mut parts = input.split('-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(|| DateError::MalformedDate(input.to_string()))?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| DateError::MalformedDate(input.to_string()))?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| DateError::MalformedDate(input.to_string()))?;
        if parts.next().is_some() {
            return Err(DateError::MalformedDate(input.to_string()));
        }
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    fn validate(self) -> Result<(), DateError> {
        if self.month == 0 || self.month > 12 {
            return Err(DateError::OutOfRange("month must be 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(DateError::OutOfRange("day does not exist in month"));
        }
        Ok(())
    }

    /// Julian Date at 00:00 UT of this date.
    pub fn to_jd(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Rebuild a date from a Julian Date, truncating the time of day.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day.floor() as u32,
        }
    }

    /// Step forward (or back, if negative) by whole calendar days.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jd(self.to_jd() + days as f64)
    }

    /// `"YYYY-MM"` key for monthly summaries.
    pub fn month_key(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Whole calendar days from `self` to `other` (positive if `other` is later).
    pub fn days_until(self, other: Self) -> i64 {
        (other.to_jd() - self.to_jd()).round() as i64
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A clock time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Parse a `H:mm` or `HH:mm` clock time.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let (h, m) = input
            .split_once(':')
            .ok_or_else(|| DateError::MalformedTime(input.to_string()))?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| DateError::MalformedTime(input.to_string()))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| DateError::MalformedTime(input.to_string()))?;
        if hour > 23 {
            return Err(DateError::OutOfRange("hour must be 0..=23"));
        }
        if minute > 59 {
            return Err(DateError::OutOfRange("minute must be 0..=59"));
        }
        Ok(Self { hour, minute })
    }

    /// Fraction of a day represented by this clock time.
    pub fn day_fraction(self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0
    }
}

impl Default for CivilTime {
    /// Default chart time: 8:00 local.
    fn default() -> Self {
        Self { hour: 8, minute: 0 }
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A date pinned to a clock time, with an offset from UTC in hours.
///
/// The offset stands in for full IANA timezone resolution, which belongs
/// to the calling layer; the engine only needs a fixed civil → UT mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
    pub utc_offset_hours: f64,
}

impl CivilDateTime {
    pub fn new(date: CivilDate, time: CivilTime, utc_offset_hours: f64) -> Self {
        Self {
            date,
            time,
            utc_offset_hours,
        }
    }

    /// Local noon of a date — the stable anchor for day-level computations.
    pub fn local_noon(date: CivilDate, utc_offset_hours: f64) -> Self {
        Self {
            date,
            time: CivilTime::new(12, 0),
            utc_offset_hours,
        }
    }

    /// Julian Date (UT) of this civil instant.
    pub fn to_jd_utc(self) -> f64 {
        self.date.to_jd() + self.time.day_fraction() - self.utc_offset_hours / 24.0
    }
}
