//! Types for retrograde station detection.

use serde::{Deserialize, Serialize};

use cosmo_core::Body;
use cosmo_time::CivilDate;

/// Station kind: the day a body's apparent motion reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationKind {
    /// Daily speed crosses from positive to negative (retrograde begins).
    RetrogradeStart,
    /// Daily speed crosses from negative to positive (retrograde ends).
    RetrogradeEnd,
}

impl StationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RetrogradeStart => "Retrograde Start",
            Self::RetrogradeEnd => "Retrograde End",
        }
    }
}

/// A station event located by a day-resolution scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEvent {
    pub body: Body,
    pub kind: StationKind,
    pub date: CivilDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(StationKind::RetrogradeStart.name(), "Retrograde Start");
        assert_eq!(StationKind::RetrogradeEnd.name(), "Retrograde End");
    }
}
