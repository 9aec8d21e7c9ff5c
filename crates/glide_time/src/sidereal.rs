//! Mean sidereal time, linear in days since J2000.0.
//!
//! GMST = 280.46061837° + 360.98564736629° × d, where d = days since J2000.0
//! (UT). The quadratic and higher terms of the full IAU polynomial are below
//! a second of time over a few centuries and are dropped.
//!
//! Source: Meeus, *Astronomical Algorithms*, eq. 12.4 (truncated).

use chrono::{DateTime, Utc};

use crate::angle::normalize_360;
use crate::julian::days_since_j2000;

/// GMST at J2000.0 in degrees.
const GMST_J2000_DEG: f64 = 280.460_618_37;

/// Sidereal rotation rate in degrees per solar day.
const GMST_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(days_since_j2000: f64) -> f64 {
    normalize_360(GMST_J2000_DEG + GMST_RATE_DEG_PER_DAY * days_since_j2000)
}

/// Local Sidereal Time from GMST and observer east longitude, [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg + longitude_east_deg)
}

/// Local Sidereal Time in degrees at a UTC instant.
pub fn local_sidereal_time_at(t: DateTime<Utc>, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_deg(gmst_deg(days_since_j2000(t)), longitude_east_deg)
}
