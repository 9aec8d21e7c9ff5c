//! Geocentric equatorial position values.

/// Geocentric right ascension and declination of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl GeocentricPosition {
    pub fn ra_rad(&self) -> f64 {
        self.ra_deg.to_radians()
    }

    pub fn dec_rad(&self) -> f64 {
        self.dec_deg.to_radians()
    }
}

/// Geocentric position plus distance from the Earth's center (Moon only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPositionWithDistance {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

impl GeocentricPositionWithDistance {
    /// Drop the distance.
    pub fn position(&self) -> GeocentricPosition {
        GeocentricPosition {
            ra_deg: self.ra_deg,
            dec_deg: self.dec_deg,
        }
    }
}
