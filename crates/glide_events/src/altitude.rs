//! Altitude models for the Sun and the Moon as seen by an observer.
//!
//! Each model bundles the observer, the body pipeline and the horizon policy
//! into a value the crossing solver can evaluate at any UTC instant.

use chrono::{DateTime, Utc};
use glide_bodies::{
    GeoLocation, MOON_SET_EXTRA_DROP_DEG, apparent_horizon_altitude_moon,
    geocentric_altitude_deg, moon_geocentric_position_with_distance, sun_geocentric_position,
    topocentric_altitude_deg,
};
use glide_search::AltitudeModel;
use glide_time::approx_refraction_deg;

fn refracted(altitude_deg: f64, apply_refraction: bool) -> f64 {
    if apply_refraction {
        altitude_deg + approx_refraction_deg(altitude_deg)
    } else {
        altitude_deg
    }
}

/// Geometric altitude of the Sun's center, parallax neglected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAltitude {
    pub location: GeoLocation,
    pub apply_refraction: bool,
}

impl SunAltitude {
    pub fn new(location: GeoLocation, apply_refraction: bool) -> Self {
        Self {
            location,
            apply_refraction,
        }
    }
}

impl AltitudeModel for SunAltitude {
    fn altitude_deg(&self, t: DateTime<Utc>) -> f64 {
        let position = sun_geocentric_position(t);
        let alt = geocentric_altitude_deg(&position, &self.location, t);
        refracted(alt, self.apply_refraction)
    }
}

/// Which Moon event the horizon offset is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonHorizon {
    Rise,
    Set,
}

/// Topocentric Moon altitude measured from its distance-dependent horizon.
///
/// Zero means the Moon sits exactly on its rise (or set) horizon; solve
/// against a target of 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonAltitude {
    pub location: GeoLocation,
    pub horizon: MoonHorizon,
    pub apply_refraction: bool,
}

impl MoonAltitude {
    pub fn new(location: GeoLocation, horizon: MoonHorizon, apply_refraction: bool) -> Self {
        Self {
            location,
            horizon,
            apply_refraction,
        }
    }
}

impl AltitudeModel for MoonAltitude {
    fn altitude_deg(&self, t: DateTime<Utc>) -> f64 {
        let position = moon_geocentric_position_with_distance(t);
        let alt = refracted(
            topocentric_altitude_deg(&position, &self.location, t),
            self.apply_refraction,
        );
        let horizon = apparent_horizon_altitude_moon(position.distance_km);
        match self.horizon {
            MoonHorizon::Rise => alt - horizon,
            MoonHorizon::Set => alt - (horizon + MOON_SET_EXTRA_DROP_DEG),
        }
    }
}
