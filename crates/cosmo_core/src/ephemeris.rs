//! The ephemeris adapter boundary.
//!
//! The underlying ephemeris computation is an external dependency; this
//! engine consumes it only through the narrow [`Ephemeris`] trait. Both
//! operations are pure functions of their inputs but may fail (service
//! unreachable, malformed result). Callers degrade per-day/per-body on
//! failure rather than aborting an enclosing aggregation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cosmo_time::CivilDateTime;

use crate::body::Body;

/// Errors from the external ephemeris adapter.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backing service could not be reached or returned no data.
    Unavailable(String),
    /// The adapter produced a non-finite or out-of-range longitude.
    InvalidLongitude { body: Body, value: f64 },
    /// The adapter does not model the requested body (e.g. a chart point).
    UnsupportedBody(Body),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::InvalidLongitude { body, value } => {
                write!(f, "invalid longitude for {body}: {value}")
            }
            Self::UnsupportedBody(body) => write!(f, "unsupported body: {body}"),
        }
    }
}

impl Error for EphemerisError {}

/// Narrow adapter contract for the external astronomical library.
///
/// Implementations must return longitudes in `[0, 360)`. Implementations
/// are expected to be `Send + Sync` so a single adapter can back
/// sequential multi-day scans without re-initialization.
pub trait Ephemeris: Send + Sync {
    /// Julian Day number for a civil date/time.
    fn julian_day(&self, civil: &CivilDateTime) -> Result<f64, EphemerisError>;

    /// Ecliptic longitude of `body` at `jd`, in degrees `[0, 360)`.
    fn ecliptic_longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError>;
}

/// Validate a longitude returned by an adapter implementation.
///
/// Helper for implementors: maps non-finite values to
/// [`EphemerisError::InvalidLongitude`] and normalizes the rest.
pub fn checked_longitude(body: Body, value: f64) -> Result<f64, EphemerisError> {
    if !value.is_finite() {
        return Err(EphemerisError::InvalidLongitude { body, value });
    }
    Ok(crate::angle::normalize_deg(value))
}
