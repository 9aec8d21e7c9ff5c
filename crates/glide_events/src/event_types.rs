//! Types for rise/set, twilight and daylight-phase events.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, TimeZone};
use glide_bodies::SUN_HORIZON_ALTITUDE_DEG;
use glide_search::{CrossingConfig, CrossingDirection};
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Body whose rise and set are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Body {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Self::Sun),
            "moon" => Ok(Self::Moon),
            _ => Err(EventError::UnknownBody(s.to_string())),
        }
    }
}

/// Twilight band, identified by the Sun's center altitude at its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwilightKind {
    /// Sun center at −6°.
    Civil,
    /// Sun center at −12°.
    Nautical,
    /// Sun center at −18°.
    Astronomical,
}

impl TwilightKind {
    /// Target Sun altitude in degrees.
    pub fn altitude_deg(self) -> f64 {
        match self {
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for TwilightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TwilightKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civil" => Ok(Self::Civil),
            "nautical" => Ok(Self::Nautical),
            "astronomical" => Ok(Self::Astronomical),
            _ => Err(EventError::UnknownTwilightKind(s.to_string())),
        }
    }
}

/// The eight solar events of a day, dawn to dusk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    AstronomicalDawn,
    NauticalDawn,
    CivilDawn,
    Sunrise,
    Sunset,
    CivilDusk,
    NauticalDusk,
    AstronomicalDusk,
}

impl SolarEvent {
    /// All events in their natural order through a day.
    pub const ALL: [SolarEvent; 8] = [
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::CivilDawn,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilDusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
    ];

    /// Sun center altitude in degrees at which the event occurs.
    pub fn altitude_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => SUN_HORIZON_ALTITUDE_DEG,
            Self::CivilDawn | Self::CivilDusk => TwilightKind::Civil.altitude_deg(),
            Self::NauticalDawn | Self::NauticalDusk => TwilightKind::Nautical.altitude_deg(),
            Self::AstronomicalDawn | Self::AstronomicalDusk => {
                TwilightKind::Astronomical.altitude_deg()
            }
        }
    }

    /// Whether this is a morning (rising) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub fn direction(self) -> CrossingDirection {
        if self.is_rising() {
            CrossingDirection::Rising
        } else {
            CrossingDirection::Setting
        }
    }
}

/// Rise and set instants of one local day. Either side may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RiseSetEvents<Tz: TimeZone> {
    pub rise: Option<DateTime<Tz>>,
    pub set: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> RiseSetEvents<Tz> {
    /// Whether neither event was found.
    pub fn is_empty(&self) -> bool {
        self.rise.is_none() && self.set.is_none()
    }
}

/// A contiguous interval with `end > start`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseWindow<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> PhaseWindow<Tz> {
    pub fn duration(&self) -> TimeDelta {
        self.end.clone() - self.start.clone()
    }
}

/// Morning and evening windows of a daylight phase (golden or blue hour).
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightPhases<Tz: TimeZone> {
    /// Sun climbing through the band.
    pub morning: Option<PhaseWindow<Tz>>,
    /// Sun descending through the band.
    pub evening: Option<PhaseWindow<Tz>>,
}

/// Upper bound on [`EventConfig::sample_count`] (≈ one sample per second
/// over a day).
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Solver and horizon policy for event searches.
///
/// Loadable from JSON/TOML; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Samples across the 24 h window (default 48, at most
    /// [`MAX_SAMPLE_COUNT`]).
    pub sample_count: usize,
    /// Bisection stopping width in seconds (default 30).
    pub tolerance_seconds: f64,
    /// Add approximate atmospheric refraction to computed altitudes
    /// (default false; horizon constants already absorb it).
    pub apply_refraction: bool,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            sample_count: 48,
            tolerance_seconds: 30.0,
            apply_refraction: false,
        }
    }
}

impl EventConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_seconds.is_finite() || self.tolerance_seconds <= 0.0 {
            return Err("tolerance_seconds must be finite and positive");
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err("sample_count must be <= 100000");
        }
        Ok(())
    }

    /// Solver configuration derived from this config.
    pub fn crossing_config(&self) -> Result<CrossingConfig, EventError> {
        self.validate().map_err(EventError::InvalidConfig)?;
        let nanos = (self.tolerance_seconds * 1e9).round() as i64;
        Ok(CrossingConfig {
            sample_count: self.sample_count,
            tolerance: TimeDelta::nanoseconds(nanos),
            ..CrossingConfig::default()
        })
    }
}
