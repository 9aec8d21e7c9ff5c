//! Time basis for the low-precision Sun/Moon models.
//!
//! This crate provides:
//! - Day counts since J2000.0 (the independent variable of the position series)
//! - Gregorian calendar ↔ Julian Date conversion and Julian centuries
//! - Degree-domain angle normalization helpers
//! - A mean sidereal time model linear in days since J2000.0
//! - An empirical near-horizon refraction approximation
//!
//! Every function here is pure and operates on `chrono::DateTime<Utc>`;
//! callers convert zoned instants to UTC before calling in.

pub mod angle;
pub mod julian;
pub mod refraction;
pub mod sidereal;

pub use angle::{normalize_24, normalize_360, wrap_180, wrap_pi};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, J2000_UNIX_SECONDS, SECONDS_PER_DAY, calendar_to_jd,
    days_since_j2000, julian_centuries, julian_day,
};
pub use refraction::approx_refraction_deg;
pub use sidereal::{gmst_deg, local_sidereal_time_deg, local_sidereal_time_at};
