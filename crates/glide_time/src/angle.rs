//! Angle normalization helpers.
//!
//! Every linear-in-time angle is reduced with one of these before it is fed
//! to a trigonometric function.

use std::f64::consts::{PI, TAU};

/// Reduce degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let d = deg % 360.0;
    let d = if d < 0.0 { d + 360.0 } else { d };
    // -tiny % 360 + 360 rounds to exactly 360
    if d >= 360.0 { 0.0 } else { d }
}

/// Reduce hours to [0, 24).
pub fn normalize_24(hours: f64) -> f64 {
    let h = hours % 24.0;
    let h = if h < 0.0 { h + 24.0 } else { h };
    if h >= 24.0 { 0.0 } else { h }
}

/// Wrap degrees into (-180, 180].
pub fn wrap_180(deg: f64) -> f64 {
    let d = normalize_360(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Wrap radians into (-π, π].
pub fn wrap_pi(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_360_basic() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert!((normalize_360(370.0) - 10.0).abs() < 1e-12);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-730.0) - 350.0).abs() < 1e-12);
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_360_tiny_negative_stays_in_range() {
        let d = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&d), "got {d}");
    }

    #[test]
    fn normalize_24_basic() {
        assert!((normalize_24(25.5) - 1.5).abs() < 1e-12);
        assert!((normalize_24(-1.0) - 23.0).abs() < 1e-12);
        assert_eq!(normalize_24(24.0), 0.0);
    }

    #[test]
    fn wrap_180_range() {
        assert!((wrap_180(190.0) + 170.0).abs() < 1e-12);
        assert!((wrap_180(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(wrap_180(180.0), 180.0);
        assert_eq!(wrap_180(-180.0), 180.0);
        for x in [-1000.0, -359.0, -1.0, 0.0, 1.0, 359.0, 1000.0] {
            let w = wrap_180(x);
            assert!(w > -180.0 && w <= 180.0, "wrap_180({x}) = {w}");
        }
    }

    #[test]
    fn wrap_pi_range() {
        assert!((wrap_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_pi(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
        for x in [-10.0, -PI, -0.1, 0.0, 0.1, PI, 10.0] {
            let w = wrap_pi(x);
            assert!(w > -PI - 1e-12 && w <= PI, "wrap_pi({x}) = {w}");
        }
    }
}
