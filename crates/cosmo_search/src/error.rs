//! Error types for event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cosmo_core::EphemerisError;

/// Errors from search routines.
///
/// Note that exhausting a bounded search window is *not* an error; those
/// outcomes surface as `None`/empty results.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the external ephemeris adapter.
    Ephemeris(EphemerisError),
    /// Invalid search configuration.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
