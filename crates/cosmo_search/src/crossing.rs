//! Longitude crossing solver.
//!
//! Binary search over a time window for the instant a body's ecliptic
//! longitude crosses a target angle. The signed difference function is
//! wraparound-aware via normalization to (-180, +180].
//!
//! The caller must supply a window known to bracket exactly one crossing
//! (e.g. ±3 days around a calendar-approximate date). The solver does not
//! verify bracketing: given zero or multiple crossings in the window it
//! still converges and returns an instant. Known limitation, kept as-is.

use cosmo_core::{Body, Ephemeris, normalize_to_pm180};
use cosmo_time::MINUTES_PER_DAY;
use log::warn;

use crate::error::SearchError;

/// Configuration for the crossing solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingConfig {
    /// Accept when the angular difference is below this, in degrees.
    pub tolerance_deg: f64,
    /// Stop when the window shrinks below this, in days.
    pub min_resolution_days: f64,
    /// Hard cap on bisection iterations.
    pub max_iterations: u32,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 0.01,
            min_resolution_days: 1.0 / MINUTES_PER_DAY,
            max_iterations: 60,
        }
    }
}

impl CrossingConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if !self.min_resolution_days.is_finite() || self.min_resolution_days <= 0.0 {
            return Err("min_resolution_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

/// Signed angular difference of the body's longitude from the target.
fn offset_from_target(
    eph: &dyn Ephemeris,
    body: Body,
    target_deg: f64,
    jd: f64,
) -> Result<f64, SearchError> {
    let lon = eph.ecliptic_longitude(jd, body)?;
    Ok(normalize_to_pm180(lon - target_deg))
}

/// Find the instant `body`'s longitude crosses `target_deg` inside
/// `[jd_start, jd_end]`.
///
/// Returns `Ok(None)` when the adapter fails mid-search — the event is
/// reported as not found rather than aborting the enclosing computation.
pub fn find_crossing(
    eph: &dyn Ephemeris,
    body: Body,
    target_deg: f64,
    jd_start: f64,
    jd_end: f64,
    config: &CrossingConfig,
) -> Result<Option<f64>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    match bisect(eph, body, target_deg, jd_start, jd_end, config) {
        Ok(jd) => Ok(Some(jd)),
        Err(SearchError::Ephemeris(e)) => {
            warn!("crossing search for {body} at {target_deg}° abandoned: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn bisect(
    eph: &dyn Ephemeris,
    body: Body,
    target_deg: f64,
    mut t_a: f64,
    mut t_b: f64,
    config: &CrossingConfig,
) -> Result<f64, SearchError> {
    let mut f_a = offset_from_target(eph, body, target_deg, t_a)?;

    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = offset_from_target(eph, body, target_deg, t_mid)?;

        if f_mid.abs() < config.tolerance_deg {
            return Ok(t_mid);
        }

        // Narrow toward the half containing the sign change.
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < config.min_resolution_days {
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let c = CrossingConfig::default();
        assert!((c.tolerance_deg - 0.01).abs() < 1e-12);
        assert!((c.min_resolution_days - 1.0 / 1440.0).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_tolerance() {
        let c = CrossingConfig {
            tolerance_deg: 0.0,
            ..CrossingConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_resolution() {
        let c = CrossingConfig {
            min_resolution_days: 0.0,
            ..CrossingConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = CrossingConfig {
            max_iterations: 0,
            ..CrossingConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
