//! Error types for date parsing and calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Input did not match the expected `YYYY-MM-DD` shape.
    MalformedDate(String),
    /// Input did not match the expected `H:mm` shape.
    MalformedTime(String),
    /// Components parsed but describe no real calendar instant.
    OutOfRange(&'static str),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDate(s) => write!(f, "malformed date: {s}"),
            Self::MalformedTime(s) => write!(f, "malformed time: {s}"),
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
        }
    }
}

impl Error for DateError {}
