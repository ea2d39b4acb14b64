//! Compatibility scoring and daily energy reports.
//!
//! This crate provides:
//! - Weighted compatibility scoring between a moment's cosmic chart and a
//!   natal chart, and internal harmony scoring within one chart
//! - The 7-day daily energy range builder, the engine's top-level
//!   orchestrator
//!
//! All scores are bounded to [-1, 1] and rounded to two decimals at the
//! reporting boundary. Bodies with unresolved signs are excluded from
//! weighted aggregates — score and weight both — never defaulted.

pub mod range;
pub mod range_types;
pub mod scorer;
pub mod scorer_types;

pub use range::{build_daily_energy_range, compute_cosmic_chart};
pub use range_types::{BodyEnergy, DailyEnergy, DailyEnergyRangeResponse, EnergyRequest};
pub use scorer::{
    body_interaction_score, body_interactions, chart_vs_natal, interaction_mean, internal_harmony,
    round2,
};
pub use scorer_types::{BodyCompatibility, BodyInteraction, CompatibilityResult};
