//! Low-precision geocentric Moon position and distance.
//!
//! The Moon's orbit is strongly perturbed by the Sun, so even an
//! arc-minute-level model needs several periodic terms. Longitude keeps the
//! six dominant terms (equation of center, evection, variation, annual
//! equation, reduction to the ecliptic), latitude keeps four, and distance
//! keeps five. All fundamental arguments are linear in time.
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 47 (truncated tables 47.A
//! and 47.B).

use chrono::{DateTime, Utc};
use glide_time::{days_since_j2000, julian_centuries, normalize_360};

use crate::frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use crate::position::{GeocentricPosition, GeocentricPositionWithDistance};

/// Mean Earth–Moon distance in km.
pub const MEAN_MOON_DISTANCE_KM: f64 = 384_400.0;

/// Offset added to the Moon's horizon altitude when detecting moonset.
///
/// The set threshold sits this much above the rise threshold, which pulls
/// the set event ~1 minute earlier and removes a late bias against
/// published tables.
pub const MOON_SET_EXTRA_DROP_DEG: f64 = 0.16;

/// Altitude of the Moon's center at rise/set for the mean distance.
const BASE_HORIZON_DEG: f64 = -0.90;

/// Horizon shift per unit fractional distance deviation.
const HORIZON_DISTANCE_SCALE_DEG: f64 = 0.6;

/// Fundamental lunar arguments in degrees, each in [0, 360).
struct LunarArguments {
    /// Mean longitude of the Moon (L′).
    mean_longitude: f64,
    /// Mean anomaly of the Sun (M).
    sun_anomaly: f64,
    /// Mean anomaly of the Moon (M′).
    moon_anomaly: f64,
    /// Mean elongation of the Moon from the Sun (D).
    elongation: f64,
    /// Argument of latitude (F).
    latitude_argument: f64,
}

impl LunarArguments {
    fn at_days(d: f64) -> Self {
        Self {
            mean_longitude: normalize_360(218.316_447_7 + 13.176_396_48 * d),
            sun_anomaly: normalize_360(357.529_109_2 + 0.985_600_28 * d),
            moon_anomaly: normalize_360(134.963_396_4 + 13.064_992_95 * d),
            elongation: normalize_360(297.850_192_1 + 12.190_749_12 * d),
            latitude_argument: normalize_360(93.272_095_0 + 13.229_350_24 * d),
        }
    }
}

/// Geocentric RA/Dec of the Moon at a UTC instant.
pub fn moon_geocentric_position(t: DateTime<Utc>) -> GeocentricPosition {
    let d = days_since_j2000(t);
    let args = LunarArguments::at_days(d);

    let l = args.mean_longitude.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mm = args.moon_anomaly.to_radians();
    let dd = args.elongation.to_radians();
    let f = args.latitude_argument.to_radians();

    let lon_terms_deg = 6.289 * mm.sin() + 1.274 * (2.0 * dd - mm).sin() + 0.658 * (2.0 * dd).sin()
        + 0.214 * (2.0 * mm).sin()
        - 0.186 * m.sin()
        - 0.114 * (2.0 * f).sin();
    let lambda = l + lon_terms_deg.to_radians();

    let lat_deg = 5.128 * f.sin()
        + 0.280 * (mm + f).sin()
        + 0.277 * (mm - f).sin()
        + 0.173 * (2.0 * dd - f).sin();
    let beta = lat_deg.to_radians();

    let eps = mean_obliquity_deg(d).to_radians();
    ecliptic_to_equatorial(lambda, beta, eps)
}

/// Approximate geocentric Earth–Moon distance in km.
///
/// Parameterized on Julian centuries with the higher-precision century rates
/// of D and M′.
pub fn moon_distance_km(t: DateTime<Utc>) -> f64 {
    let tc = julian_centuries(t);

    let d = normalize_360(297.850_192_1 + 445_267.111_403_4 * tc).to_radians();
    let mm = normalize_360(134.963_396_4 + 477_198.867_505_5 * tc).to_radians();

    385_000.56
        - 20_905.0 * mm.cos()
        - 3_699.0 * (2.0 * d - mm).cos()
        - 2_956.0 * (2.0 * d).cos()
        - 570.0 * (2.0 * mm).cos()
        - 246.0 * (2.0 * d + mm).cos()
}

/// Geocentric RA/Dec and distance of the Moon at a UTC instant.
pub fn moon_geocentric_position_with_distance(t: DateTime<Utc>) -> GeocentricPositionWithDistance {
    let p = moon_geocentric_position(t);
    GeocentricPositionWithDistance {
        ra_deg: p.ra_deg,
        dec_deg: p.dec_deg,
        distance_km: moon_distance_km(t),
    }
}

/// Altitude (degrees) of the Moon's center at which rise/set is declared.
///
/// Baseline −0.90° at the mean distance, shifted linearly with the
/// fractional distance deviation: `h = −0.90 − 0.6 × (Δ − 384400) / 384400`.
/// Near perigee the threshold sits slightly higher, near apogee lower.
/// Non-positive distances fall back to the baseline.
pub fn apparent_horizon_altitude_moon(distance_km: f64) -> f64 {
    if distance_km <= 0.0 {
        return BASE_HORIZON_DEG;
    }
    let frac = (distance_km - MEAN_MOON_DISTANCE_KM) / MEAN_MOON_DISTANCE_KM;
    BASE_HORIZON_DEG - HORIZON_DISTANCE_SCALE_DEG * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: RA 134.688470°, Dec 13.768368°, Δ 368409.7 km
        let t = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
        let p = moon_geocentric_position_with_distance(t);
        assert!((p.ra_deg - 134.688).abs() < 0.3, "ra = {}", p.ra_deg);
        assert!((p.dec_deg - 13.768).abs() < 0.3, "dec = {}", p.dec_deg);
        assert!((p.distance_km - 368_409.7).abs() < 500.0, "distance = {}", p.distance_km);
    }

    #[test]
    fn distance_stays_in_orbit_bounds() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        for hour in (0..24 * 60).step_by(6) {
            let dist = moon_distance_km(start + chrono::TimeDelta::hours(hour));
            assert!(
                (355_000.0..407_500.0).contains(&dist),
                "distance out of bounds: {dist}"
            );
        }
    }

    #[test]
    fn declination_bounded() {
        // Maximum lunar declination is ε + i ≈ 28.6° at a major standstill
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        for hour in (0..24 * 60).step_by(3) {
            let p = moon_geocentric_position(start + chrono::TimeDelta::hours(hour));
            assert!(p.dec_deg.abs() < 29.0, "dec = {}", p.dec_deg);
            assert!((0.0..360.0).contains(&p.ra_deg), "ra = {}", p.ra_deg);
        }
    }

    #[test]
    fn moon_moves_east_about_13_degrees_per_day() {
        let t0 = Utc.with_ymd_and_hms(2025, 11, 30, 0, 0, 0).unwrap();
        let a = moon_geocentric_position(t0);
        let b = moon_geocentric_position(t0 + chrono::TimeDelta::days(1));
        let motion = normalize_360(b.ra_deg - a.ra_deg);
        assert!((10.0..16.0).contains(&motion), "daily RA motion = {motion}°");
    }

    #[test]
    fn horizon_at_mean_distance() {
        let h = apparent_horizon_altitude_moon(MEAN_MOON_DISTANCE_KM);
        assert!((h + 0.90).abs() < 1e-12);
    }

    #[test]
    fn horizon_shifts_with_distance() {
        let perigee = apparent_horizon_altitude_moon(360_000.0);
        let apogee = apparent_horizon_altitude_moon(405_000.0);
        assert!(perigee > -0.90 && apogee < -0.90, "{perigee} {apogee}");
        assert!((perigee - (-0.90 + 0.6 * 24_400.0 / 384_400.0)).abs() < 1e-12);
    }

    #[test]
    fn horizon_falls_back_for_invalid_distance() {
        assert_eq!(apparent_horizon_altitude_moon(0.0), -0.90);
        assert_eq!(apparent_horizon_altitude_moon(-5.0), -0.90);
    }
}
