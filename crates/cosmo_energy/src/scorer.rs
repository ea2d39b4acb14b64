//! Weighted compatibility scoring.
//!
//! Both entry points share one aggregation rule: per-pair scores from the
//! injected [`SignCompatibility`] strategy, weighted by the shared
//! importance table, divided by the sum of *included* weights. A body
//! whose sign cannot be resolved on either side contributes neither score
//! nor weight — the mean recomputes over what remains.

use cosmo_core::{Body, CosmicChart, NatalChart, SCORED_BODIES, SignCompatibility};
use log::warn;

use crate::scorer_types::{BodyCompatibility, BodyInteraction, CompatibilityResult};

/// Round to two decimals at the reporting boundary.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compatibility of a moment's cosmic chart against a natal chart.
///
/// Per scored body: one strategy call on (cosmic sign, natal sign),
/// weighted by the body's importance. Bodies missing from either chart
/// are excluded from numerator and denominator and logged.
pub fn chart_vs_natal(
    strategy: &dyn SignCompatibility,
    cosmic: &CosmicChart,
    natal: &NatalChart,
) -> CompatibilityResult {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut breakdown = Vec::with_capacity(SCORED_BODIES.len());

    for body in SCORED_BODIES {
        let Some(weight) = body.importance() else {
            continue;
        };
        let (Some(cosmic_sign), Some(natal_sign)) = (cosmic.sign(body), natal.sign(body)) else {
            warn!("{body} excluded from compatibility: sign unresolved on one side");
            continue;
        };

        let score = strategy.score(cosmic_sign, natal_sign);
        weighted_sum += score * weight;
        weight_sum += weight;
        breakdown.push(BodyCompatibility {
            body,
            cosmic_sign,
            natal_sign,
            score,
            weight,
        });
    }

    if weight_sum == 0.0 {
        warn!("no scorable bodies; compatibility is neutral");
        return CompatibilityResult::neutral();
    }

    CompatibilityResult {
        total_score: round2(weighted_sum / weight_sum),
        breakdown,
    }
}

/// Internal harmony of one chart: weighted mean over all unordered pairs
/// of present scored bodies, each pair weighted by the product of the two
/// importances. Rounded to two decimals.
pub fn internal_harmony(strategy: &dyn SignCompatibility, chart: &CosmicChart) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for (i, &a) in SCORED_BODIES.iter().enumerate() {
        for &b in &SCORED_BODIES[i + 1..] {
            let (Some(wa), Some(wb)) = (a.importance(), b.importance()) else {
                continue;
            };
            let (Some(sign_a), Some(sign_b)) = (chart.sign(a), chart.sign(b)) else {
                continue;
            };
            let weight = wa * wb;
            weighted_sum += strategy.score(sign_a, sign_b) * weight;
            weight_sum += weight;
        }
    }

    if weight_sum == 0.0 {
        return 0.0;
    }
    round2(weighted_sum / weight_sum)
}

/// One body's pairwise interaction terms within a chart: its score
/// against every other present scored body, each carrying the partner's
/// importance weight. Empty when the body itself is absent.
pub fn body_interactions(
    strategy: &dyn SignCompatibility,
    chart: &CosmicChart,
    body: Body,
) -> Vec<BodyInteraction> {
    let Some(sign) = chart.sign(body) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for other in SCORED_BODIES {
        if other == body {
            continue;
        }
        let Some(weight) = other.importance() else {
            continue;
        };
        let Some(other_sign) = chart.sign(other) else {
            continue;
        };
        entries.push(BodyInteraction {
            other,
            other_sign,
            score: strategy.score(sign, other_sign),
            weight,
        });
    }
    entries
}

/// Weighted mean of a body's interaction terms, rounded to two decimals.
/// `None` when there are no terms to aggregate.
pub fn interaction_mean(entries: &[BodyInteraction]) -> Option<f64> {
    let weight_sum: f64 = entries.iter().map(|e| e.weight).sum();
    if weight_sum == 0.0 {
        return None;
    }
    let weighted_sum: f64 = entries.iter().map(|e| e.score * e.weight).sum();
    Some(round2(weighted_sum / weight_sum))
}

/// One body's interaction score within a chart: the mean of its pairwise
/// scores against the other present bodies, weighted by the *other*
/// body's importance.
pub fn body_interaction_score(
    strategy: &dyn SignCompatibility,
    chart: &CosmicChart,
    body: Body,
) -> Option<f64> {
    interaction_mean(&body_interactions(strategy, chart, body))
}
