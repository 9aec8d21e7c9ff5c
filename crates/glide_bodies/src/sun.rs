//! Low-precision geocentric Sun position.
//!
//! Mean anomaly and mean longitude are linear in days since J2000.0; the
//! ecliptic longitude adds a two-term equation of center. The Sun's ecliptic
//! latitude is taken as zero. Accuracy is about 0.01° in RA/Dec over several
//! decades around J2000.0.
//!
//! Source: Astronomical Almanac low-precision solar coordinates (also used by
//! the NOAA calculators).

use chrono::{DateTime, Utc};
use glide_time::days_since_j2000;

use crate::frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use crate::position::GeocentricPosition;

/// Zenith distance of the Sun's center at standard sunrise/sunset (90°50′):
/// 34′ of horizon refraction plus 16′ of solar semidiameter.
pub const STANDARD_ZENITH_DEG: f64 = 90.833;

/// Altitude of the Sun's center at standard sunrise/sunset, ≈ −0.833°.
pub const SUN_HORIZON_ALTITUDE_DEG: f64 = 90.0 - STANDARD_ZENITH_DEG;

/// Geocentric RA/Dec of the Sun at a UTC instant.
pub fn sun_geocentric_position(t: DateTime<Utc>) -> GeocentricPosition {
    let d = days_since_j2000(t);

    let g = (357.529 + 0.985_600_28 * d).to_radians();
    let q = (280.459 + 0.985_647_36 * d).to_radians();

    let lambda = q + 1.915_f64.to_radians() * g.sin() + 0.020_f64.to_radians() * (2.0 * g).sin();
    let eps = mean_obliquity_deg(d).to_radians();

    ecliptic_to_equatorial(lambda, 0.0, eps)
}
