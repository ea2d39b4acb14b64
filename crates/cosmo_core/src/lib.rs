//! Core vocabulary of the cosmo engine.
//!
//! This crate provides:
//! - The [`Body`] enum and the shared planetary importance weight table
//! - Angle normalization helpers used by every longitude comparison
//! - Zodiac [`Sign`] classification and [`PlanetPosition`] placements
//! - [`CosmicChart`] / [`NatalChart`] value types
//! - The [`Ephemeris`] adapter trait (the engine's only external boundary)
//! - The [`SignCompatibility`] strategy trait with a reference
//!   elemental implementation

pub mod angle;
pub mod body;
pub mod chart;
pub mod compat;
pub mod ephemeris;
pub mod zodiac;

pub use angle::{angular_distance, normalize_deg, normalize_to_pm180};
pub use body::{Body, SCORED_BODIES};
pub use chart::{CosmicChart, NatalChart, NatalPlacement, PlanetPosition};
pub use compat::{ElementalCompatibility, SignCompatibility};
pub use ephemeris::{Ephemeris, EphemerisError, checked_longitude};
pub use zodiac::{ALL_SIGNS, Element, Modality, Polarity, Sign};
