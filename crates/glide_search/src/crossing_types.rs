//! Types for the altitude crossing search.

use chrono::{DateTime, TimeDelta, Utc};

/// Which way the altitude must pass through the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingDirection {
    /// From strictly below the target to at or above it.
    Rising,
    /// From strictly above the target to at or below it.
    Setting,
}

impl CrossingDirection {
    /// Whether the pair `(before, after)` of offsets from the target brackets
    /// a crossing in this direction.
    pub fn brackets(self, before: f64, after: f64) -> bool {
        match self {
            Self::Rising => before < 0.0 && after >= 0.0,
            Self::Setting => before > 0.0 && after <= 0.0,
        }
    }
}

/// Outcome of a crossing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingResult {
    /// Crossing instant, accurate to the configured tolerance.
    Found(DateTime<Utc>),
    /// No crossing in the requested direction inside the window.
    NotFound,
}

impl CrossingResult {
    pub fn found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Found(t) => Some(*t),
            Self::NotFound => None,
        }
    }
}

/// Configuration for the crossing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingConfig {
    /// Number of equally spaced samples over the window (default 48, i.e.
    /// half-hour spacing over a day). Values below 2 are treated as 2.
    pub sample_count: usize,
    /// Bisection stops once the bracket is this narrow (default 30 s).
    /// Clamped to at least 1 ns.
    pub tolerance: TimeDelta,
    /// Hard cap on bisection steps (default 64).
    pub max_iterations: u32,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            sample_count: 48,
            tolerance: TimeDelta::seconds(30),
            max_iterations: 64,
        }
    }
}

impl CrossingConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.tolerance <= TimeDelta::zero() {
            return Err("tolerance must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}
