//! Near-horizon atmospheric refraction.

/// Approximate refraction (degrees) to add to a geometric altitude.
///
/// Saemundsson/Bennett form under standard pressure and temperature:
///
/// `R ≈ 1.02 / tan(h + 10.3 / (h + 5.11))` arcminutes, `h` in degrees.
///
/// Returns 0 below −1°, where the correction is not meaningfully defined.
/// Altitudes between −1° and −0.5° are clamped to −0.5° to keep the inner
/// denominator away from its singularity.
pub fn approx_refraction_deg(altitude_deg: f64) -> f64 {
    if altitude_deg < -1.0 {
        return 0.0;
    }
    let h = altitude_deg.max(-0.5);
    let t = (h + 10.3 / (h + 5.11)).to_radians().tan();
    if t == 0.0 {
        return 0.0;
    }
    (1.02 / t) / 60.0
}
