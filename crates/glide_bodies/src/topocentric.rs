//! Hour angle, horizontal parallax and altitude for a ground observer.
//!
//! Two altitude pipelines share the same sidereal time and hour-angle
//! conventions:
//!
//! - [`geocentric_altitude_deg`]: no parallax. Used for the Sun, whose
//!   horizontal parallax (8.8″) is far below the model's accuracy.
//! - [`topocentric_altitude_deg`]: shifts RA/Dec to the observer with the
//!   rigorous parallax-in-RA/Dec formulas, then computes altitude. Used for
//!   the Moon, whose parallax is close to 1°.
//!
//! Hour angles are wrapped into (−180°, 180°] before any trigonometry; an
//! unwrapped hour angle silently picks the wrong branch of `atan2`.
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 11 and 40, with the
//! sea-level approximation ρ sin φ′ ≈ 0.99883 sin φ, ρ cos φ′ ≈ 0.99883 cos φ.

use chrono::{DateTime, Utc};
use glide_time::{local_sidereal_time_at, wrap_180};

use crate::location::GeoLocation;
use crate::position::{GeocentricPosition, GeocentricPositionWithDistance};

/// Equatorial Earth radius in km used for horizontal parallax.
pub const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Parallax returned when the distance is not larger than the Earth's radius.
const FALLBACK_PARALLAX_DEG: f64 = 1.0;

/// Geocentric-latitude scale factor for a sea-level observer.
const RHO_SEA_LEVEL: f64 = 0.998_83;

/// Hour angle `LST − RA` in degrees, wrapped into (−180, 180].
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    wrap_180(lst_deg - ra_deg)
}

/// Horizontal parallax in radians for a body at `distance_km`.
///
/// Distances at or inside the Earth's radius are a modeling edge case, not
/// a caller error, and map to a fixed 1° parallax.
pub fn horizontal_parallax_rad(distance_km: f64) -> f64 {
    if distance_km <= EARTH_RADIUS_KM {
        return FALLBACK_PARALLAX_DEG.to_radians();
    }
    (EARTH_RADIUS_KM / distance_km).asin()
}

/// Altitude (degrees) from latitude, declination and hour angle (radians).
fn altitude_from_hour_angle(lat: f64, dec: f64, ha: f64) -> f64 {
    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos();
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Geometric altitude of a geocentric direction, without parallax.
pub fn geocentric_altitude_deg(
    position: &GeocentricPosition,
    location: &GeoLocation,
    t: DateTime<Utc>,
) -> f64 {
    let lst = local_sidereal_time_at(t, location.longitude_deg);
    let ha = hour_angle_deg(lst, position.ra_deg).to_radians();
    altitude_from_hour_angle(location.latitude_rad(), position.dec_rad(), ha)
}

/// Topocentric altitude of a body at a known geocentric distance.
pub fn topocentric_altitude_deg(
    position: &GeocentricPositionWithDistance,
    location: &GeoLocation,
    t: DateTime<Utc>,
) -> f64 {
    let lst = local_sidereal_time_at(t, location.longitude_deg);
    let ha = hour_angle_deg(lst, position.ra_deg).to_radians();

    let phi = location.latitude_rad();
    let rho_sin_phi = RHO_SEA_LEVEL * phi.sin();
    let rho_cos_phi = RHO_SEA_LEVEL * phi.cos();

    let dec = position.dec_deg.to_radians();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_ha, cos_ha) = ha.sin_cos();
    let sin_par = horizontal_parallax_rad(position.distance_km).sin();

    let denom = cos_dec - rho_cos_phi * sin_par * cos_ha;
    let delta_ra = (-rho_cos_phi * sin_par * sin_ha).atan2(denom);
    let dec_topo = (sin_dec - rho_sin_phi * sin_par).atan2(denom);

    // H′ = LST − (α + Δα) = H − Δα
    let ha_topo = hour_angle_deg(lst, position.ra_deg + delta_ra.to_degrees()).to_radians();

    altitude_from_hour_angle(phi, dec_topo, ha_topo)
}
