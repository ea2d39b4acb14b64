//! Types for moon phase classification.

use serde::{Deserialize, Serialize};

use cosmo_core::normalize_deg;
use cosmo_time::CivilDate;

/// The eight named lunar phases, in phase-angle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All eight phases in order (0 = NewMoon .. 7 = WaningCrescent).
pub const ALL_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase angle at the center of this phase's sector, in degrees.
    pub const fn target_angle_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::WaxingCrescent => 45.0,
            Self::FirstQuarter => 90.0,
            Self::WaxingGibbous => 135.0,
            Self::FullMoon => 180.0,
            Self::WaningGibbous => 225.0,
            Self::LastQuarter => 270.0,
            Self::WaningCrescent => 315.0,
        }
    }

    /// Classify a phase angle into its named phase.
    ///
    /// The circle partitions into eight half-open 45-degree sectors
    /// centered on the named phases, with boundaries at 22.5° + k·45°.
    pub fn from_phase_angle(angle_deg: f64) -> Self {
        let angle = normalize_deg(angle_deg);
        let idx = ((angle + 22.5) / 45.0).floor() as usize % 8;
        ALL_PHASES[idx]
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar state on a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    /// Sun→Moon elongation in degrees [0, 360).
    pub phase_angle_deg: f64,
    /// Illuminated fraction of the disc, [0, 1].
    pub illumination: f64,
    pub next_new_moon: Option<CivilDate>,
    pub next_full_moon: Option<CivilDate>,
}

impl MoonPhaseInfo {
    /// Fallback when lunar state cannot be computed.
    pub fn default_new_moon() -> Self {
        Self {
            phase: MoonPhase::NewMoon,
            phase_angle_deg: 0.0,
            illumination: 0.0,
            next_new_moon: None,
            next_full_moon: None,
        }
    }
}

/// A named phase located within a month scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPhase {
    pub phase: MoonPhase,
    pub date: CivilDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_centers_map_to_themselves() {
        for phase in ALL_PHASES {
            assert_eq!(MoonPhase::from_phase_angle(phase.target_angle_deg()), phase);
        }
    }

    #[test]
    fn sector_boundaries() {
        assert_eq!(MoonPhase::from_phase_angle(22.4), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_phase_angle(22.5), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_phase_angle(337.4), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::from_phase_angle(337.5), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_phase_angle(359.9), MoonPhase::NewMoon);
    }

    #[test]
    fn classification_is_total() {
        // Every tenth of a degree lands in exactly one sector.
        for i in 0..3600 {
            let _ = MoonPhase::from_phase_angle(i as f64 / 10.0);
        }
    }

    #[test]
    fn default_info_is_dark() {
        let info = MoonPhaseInfo::default_new_moon();
        assert_eq!(info.phase, MoonPhase::NewMoon);
        assert!(info.illumination.abs() < 1e-12);
        assert!(info.next_new_moon.is_none());
    }
}
