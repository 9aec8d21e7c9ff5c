//! Observer location on the Earth's surface.

use serde::{Deserialize, Serialize};

/// Where the observer stands. Loadable from JSON/TOML; `altitude_m` may be
/// omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// North positive, [-90, 90].
    pub latitude_deg: f64,
    /// East positive (west negative), (-180, 180].
    pub longitude_deg: f64,
    /// Height above sea level in meters. Validated but not used: the
    /// altitude math assumes a sea-level observer.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Observer latitude φ in radians, as fed to the altitude formula.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Validate coordinate ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err("latitude_deg must be within [-90, 90]");
        }
        if !self.longitude_deg.is_finite()
            || self.longitude_deg <= -180.0
            || self.longitude_deg > 180.0
        {
            return Err("longitude_deg must be within (-180, 180]");
        }
        if !self.altitude_m.is_finite() {
            return Err("altitude_m must be finite");
        }
        Ok(())
    }
}
