//! Chart value types: planetary placements for a moment or a birth.
//!
//! Charts are transient, request-scoped values; nothing here is mutated
//! after construction.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::zodiac::Sign;

/// A body's ecliptic placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degrees_in_sign: f64,
}

impl PlanetPosition {
    /// Build a placement from a raw longitude; the sign is derived.
    pub fn from_longitude(body: Body, longitude_deg: f64) -> Self {
        let lon = crate::angle::normalize_deg(longitude_deg);
        Self {
            body,
            longitude_deg: lon,
            sign: Sign::from_longitude(lon),
            degrees_in_sign: Sign::degrees_in_sign(lon),
        }
    }
}

/// Planetary positions for one instant.
///
/// Sun, Moon, and Rising are always expected; Venus and Mars may be
/// absent when the upstream lookup failed for them. Absent bodies are
/// excluded from weighted aggregates, never substituted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CosmicChart {
    positions: Vec<PlanetPosition>,
}

impl CosmicChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placement, replacing any existing entry for the same body.
    pub fn with_position(mut self, position: PlanetPosition) -> Self {
        self.positions.retain(|p| p.body != position.body);
        self.positions.push(position);
        self
    }

    pub fn position(&self, body: Body) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn sign(&self, body: Body) -> Option<Sign> {
        self.position(body).map(|p| p.sign)
    }

    pub fn positions(&self) -> &[PlanetPosition] {
        &self.positions
    }
}

/// A single natal placement: sign plus position within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NatalPlacement {
    pub body: Body,
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degrees_in_sign: f64,
    /// Absolute ecliptic longitude in degrees [0, 360).
    pub absolute_degrees: f64,
    /// Prior-computed internal score for this body, if the caller has one.
    pub internal_score: Option<f64>,
}

/// The caller's fixed birth chart, immutable once supplied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NatalChart {
    placements: Vec<NatalPlacement>,
}

impl NatalChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: NatalPlacement) -> Self {
        self.placements.retain(|p| p.body != placement.body);
        self.placements.push(placement);
        self
    }

    /// Convenience constructor from a body → sign mapping.
    pub fn from_signs(signs: &[(Body, Sign)]) -> Self {
        let mut chart = Self::new();
        for &(body, sign) in signs {
            chart = chart.with_placement(NatalPlacement {
                body,
                sign,
                degrees_in_sign: 0.0,
                absolute_degrees: sign.index() as f64 * 30.0,
                internal_score: None,
            });
        }
        chart
    }

    pub fn placement(&self, body: Body) -> Option<&NatalPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }

    pub fn sign(&self, body: Body) -> Option<Sign> {
        self.placement(body).map(|p| p.sign)
    }

    pub fn placements(&self) -> &[NatalPlacement] {
        &self.placements
    }
}
