//! Ecliptic ↔ equatorial rotation and angular separation.

use std::f64::consts::TAU;

use crate::position::GeocentricPosition;

/// Mean obliquity of the ecliptic in degrees, linear in days since J2000.0.
///
/// `ε = 23.439° − 3.6e-7° × d`. Shared by the Sun and Moon models.
pub fn mean_obliquity_deg(days_since_j2000: f64) -> f64 {
    23.439 - 0.000_000_36 * days_since_j2000
}

/// Rotate ecliptic longitude/latitude (radians) into equatorial RA/Dec.
///
/// RA is returned in [0, 360) degrees, Dec in [-90, 90] degrees.
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, obliquity_rad: f64) -> GeocentricPosition {
    let (sin_eps, cos_eps) = obliquity_rad.sin_cos();

    let x = lat_rad.cos() * lon_rad.cos();
    let y = lat_rad.cos() * lon_rad.sin();
    let z = lat_rad.sin();

    let y_eq = y * cos_eps - z * sin_eps;
    let z_eq = y * sin_eps + z * cos_eps;

    let mut ra = y_eq.atan2(x);
    if ra < 0.0 {
        ra += TAU;
    }
    let dec = z_eq.clamp(-1.0, 1.0).asin();

    GeocentricPosition {
        ra_deg: ra.to_degrees(),
        dec_deg: dec.to_degrees(),
    }
}

/// Angular separation between two equatorial directions, degrees in [0, 180].
///
/// Spherical law of cosines; the cosine is clamped to [-1, 1] so rounding
/// never produces NaN.
pub fn angular_separation_deg(a: &GeocentricPosition, b: &GeocentricPosition) -> f64 {
    cos_separation(a, b).acos().to_degrees()
}

/// Clamped cosine of the angular separation.
pub(crate) fn cos_separation(a: &GeocentricPosition, b: &GeocentricPosition) -> f64 {
    let (dec_a, dec_b) = (a.dec_rad(), b.dec_rad());
    let d_ra = a.ra_rad() - b.ra_rad();
    let cos_psi = dec_a.sin() * dec_b.sin() + dec_a.cos() * dec_b.cos() * d_ra.cos();
    cos_psi.clamp(-1.0, 1.0)
}
