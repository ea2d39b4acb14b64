//! Types for compatibility scoring outcomes.

use serde::{Deserialize, Serialize};

use cosmo_core::{Body, Sign};

/// One body's contribution to a compatibility aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompatibility {
    pub body: Body,
    pub cosmic_sign: Sign,
    pub natal_sign: Sign,
    /// Raw pairwise score from the sign-compatibility strategy, [-1, 1].
    pub score: f64,
    /// Importance weight applied to this body.
    pub weight: f64,
}

/// One pairwise term inside a body's interaction aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyInteraction {
    /// The partner body on the other side of the pair.
    pub other: Body,
    pub other_sign: Sign,
    /// Raw pairwise score from the sign-compatibility strategy, [-1, 1].
    pub score: f64,
    /// The partner body's importance weight.
    pub weight: f64,
}

/// Outcome of a weighted compatibility aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted mean of included-body scores, [-1, 1], 2 decimals.
    pub total_score: f64,
    /// Per-body breakdown; bodies with unresolved signs are absent.
    pub breakdown: Vec<BodyCompatibility>,
}

impl CompatibilityResult {
    /// Neutral result when no body could be scored.
    pub fn neutral() -> Self {
        Self {
            total_score: 0.0,
            breakdown: Vec::new(),
        }
    }

    pub fn body(&self, body: Body) -> Option<&BodyCompatibility> {
        self.breakdown.iter().find(|b| b.body == body)
    }
}
