//! Sign-pair compatibility strategy.
//!
//! The astrological pair formula is an external collaborator as far as the
//! scoring engine is concerned: the scorer only ever consumes the
//! [`SignCompatibility`] trait, so the weighting/aggregation logic can be
//! unit-tested with synthetic strategies. [`ElementalCompatibility`] is the
//! bundled reference formula.

use crate::zodiac::Sign;

/// Injected strategy computing a pairwise sign score in [-1, 1].
///
/// Implementations must be pure and symmetric: `score(a, b) == score(b, a)`.
pub trait SignCompatibility: Send + Sync {
    fn score(&self, a: Sign, b: Sign) -> f64;
}

// Blanket impl so plain closures work as strategies in tests.
impl<F> SignCompatibility for F
where
    F: Fn(Sign, Sign) -> f64 + Send + Sync,
{
    fn score(&self, a: Sign, b: Sign) -> f64 {
        self(a, b)
    }
}

/// Reference formula combining element, modality, polarity, and the
/// aspect-like dynamic between the two sign positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementalCompatibility;

impl ElementalCompatibility {
    /// Element relation: shared element strongest, complementary pairs
    /// (Fire–Air, Earth–Water) supportive, opposing pairs clashing.
    fn element_score(a: Sign, b: Sign) -> f64 {
        use crate::zodiac::Element::{Air, Earth, Fire, Water};
        let (ea, eb) = (a.element(), b.element());
        if ea == eb {
            return 1.0;
        }
        match (ea, eb) {
            (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => 0.6,
            (Fire, Water) | (Water, Fire) | (Air, Earth) | (Earth, Air) => -0.6,
            _ => -0.2,
        }
    }

    /// Same modality reads as friction (square-family tension).
    fn modality_score(a: Sign, b: Sign) -> f64 {
        if a.modality() == b.modality() {
            -0.4
        } else {
            0.2
        }
    }

    fn polarity_score(a: Sign, b: Sign) -> f64 {
        if a.polarity() == b.polarity() {
            0.5
        } else {
            -0.25
        }
    }

    /// Aspect-like dynamic from the sign-index separation (0..=6 signs).
    fn dynamic_score(a: Sign, b: Sign) -> f64 {
        let diff = (a.index() as i8 - b.index() as i8).rem_euclid(12);
        let separation = diff.min(12 - diff);
        match separation {
            0 => 1.0,  // conjunction
            1 => -0.2, // semi-sextile
            2 => 0.6,  // sextile
            3 => -0.8, // square
            4 => 0.9,  // trine
            5 => -0.3, // quincunx
            _ => -0.5, // opposition
        }
    }
}

impl SignCompatibility for ElementalCompatibility {
    fn score(&self, a: Sign, b: Sign) -> f64 {
        let raw = 0.35 * Self::element_score(a, b)
            + 0.2 * Self::modality_score(a, b)
            + 0.15 * Self::polarity_score(a, b)
            + 0.3 * Self::dynamic_score(a, b);
        raw.clamp(-1.0, 1.0)
    }
}
