//! Geocentric Sun and Moon positions from truncated periodic series, and
//! the geocentric → topocentric altitude transformation.
//!
//! This crate provides:
//! - Observer location type ([`GeoLocation`])
//! - Ecliptic → equatorial rotation and angular separation
//! - Sun RA/Dec via the equation of center
//! - Moon RA/Dec via a six-term longitude / four-term latitude series, plus
//!   a five-term distance series
//! - Hour angle, horizontal parallax and altitude for a ground observer
//!
//! Accuracy is at the arc-minute level: enough for civil rise/set and
//! twilight times, not for ephemeris production.

pub mod frames;
pub mod location;
pub mod moon;
pub mod position;
pub mod sun;
pub mod topocentric;

pub use frames::{angular_separation_deg, ecliptic_to_equatorial, mean_obliquity_deg};
pub use location::GeoLocation;
pub use moon::{
    MEAN_MOON_DISTANCE_KM, MOON_SET_EXTRA_DROP_DEG, apparent_horizon_altitude_moon,
    moon_distance_km, moon_geocentric_position, moon_geocentric_position_with_distance,
};
pub use position::{GeocentricPosition, GeocentricPositionWithDistance};
pub use sun::{STANDARD_ZENITH_DEG, SUN_HORIZON_ALTITUDE_DEG, sun_geocentric_position};
pub use topocentric::{
    EARTH_RADIUS_KM, geocentric_altitude_deg, horizontal_parallax_rad, hour_angle_deg,
    topocentric_altitude_deg,
};
