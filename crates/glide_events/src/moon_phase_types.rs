//! Types for lunar phase.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// The eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// All phase names in cycle order.
    pub const ALL: [PhaseName; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    pub fn as_str(self) -> &'static str {
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
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Illumination and phase of the Moon at an instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonPhase<Tz: TimeZone> {
    /// Instant the phase was evaluated at, in the caller's zone.
    pub instant: DateTime<Tz>,
    /// Illuminated fraction of the disc, 0 = new, 1 = full.
    pub illuminated_fraction: f64,
    /// Sun–Moon angular separation in degrees [0, 180].
    pub elongation_deg: f64,
    /// Whether illumination is increasing.
    pub waxing: bool,
    pub name: PhaseName,
}
