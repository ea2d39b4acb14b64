//! Celestial bodies and the shared importance weight table.
//!
//! `Rising` (the ascendant) is a chart point rather than a physical body;
//! it is listed here because the scorer weights it like one. Its longitude
//! is resolved externally in most flows and supplied as chart data.

use serde::{Deserialize, Serialize};

/// Bodies and chart points known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Rising,
    Mercury,
    Venus,
    Mars,
}

/// The five scored bodies, in importance order.
///
/// This is the single source of truth for every aggregate score in the
/// engine; no component carries its own copy of the weights.
pub const SCORED_BODIES: [Body; 5] = [Body::Sun, Body::Moon, Body::Rising, Body::Venus, Body::Mars];

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Rising => "Rising",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
        }
    }

    /// Fixed importance weight used by compatibility aggregates.
    ///
    /// Returns `None` for bodies that do not participate in scoring
    /// (Mercury is tracked for retrograde events only).
    pub const fn importance(self) -> Option<f64> {
        match self {
            Self::Sun => Some(5.0),
            Self::Moon => Some(4.0),
            Self::Rising => Some(3.0),
            Self::Venus => Some(2.0),
            Self::Mars => Some(2.0),
            Self::Mercury => None,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
