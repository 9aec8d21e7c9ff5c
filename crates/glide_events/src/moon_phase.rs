//! Lunar illuminated fraction and phase name.
//!
//! Phase is a geocentric property: the observer does not enter. The phase
//! angle is approximated by the Sun–Moon elongation ψ, giving
//! `k = (1 − cos ψ) / 2`.

use chrono::{DateTime, TimeZone, Utc};
use glide_bodies::{angular_separation_deg, moon_geocentric_position, sun_geocentric_position};
use glide_time::normalize_360;
use log::trace;

use crate::moon_phase_types::{MoonPhase, PhaseName};

/// Fraction distance from 0 or 1 still called New or Full.
const NEW_FULL_EPS: f64 = 0.01;

/// Fraction distance from 0.5 still called a quarter.
const QUARTER_TOL: f64 = 0.05;

/// Illuminated fraction, elongation and phase name at `instant`.
pub fn moon_phase_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> MoonPhase<Tz> {
    let utc = instant.with_timezone(&Utc);
    let sun = sun_geocentric_position(utc);
    let moon = moon_geocentric_position(utc);

    let elongation_deg = angular_separation_deg(&sun, &moon);
    let illuminated_fraction = ((1.0 - elongation_deg.to_radians().cos()) / 2.0).clamp(0.0, 1.0);
    let waxing = normalize_360(moon.ra_deg - sun.ra_deg) < 180.0;
    let name = classify_phase(illuminated_fraction, waxing);

    trace!("moon phase at {utc}: k = {illuminated_fraction:.4}, ψ = {elongation_deg:.2}°, {name}");

    MoonPhase {
        instant: instant.clone(),
        illuminated_fraction,
        elongation_deg,
        waxing,
        name,
    }
}

/// Name for an illuminated fraction and waxing flag.
pub fn classify_phase(fraction: f64, waxing: bool) -> PhaseName {
    if fraction < NEW_FULL_EPS {
        PhaseName::NewMoon
    } else if fraction > 1.0 - NEW_FULL_EPS {
        PhaseName::FullMoon
    } else if (fraction - 0.5).abs() < QUARTER_TOL {
        if waxing {
            PhaseName::FirstQuarter
        } else {
            PhaseName::LastQuarter
        }
    } else if fraction < 0.5 {
        if waxing {
            PhaseName::WaxingCrescent
        } else {
            PhaseName::WaningCrescent
        }
    } else if waxing {
        PhaseName::WaxingGibbous
    } else {
        PhaseName::WaningGibbous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta};

    #[test]
    fn classify_thresholds() {
        assert_eq!(classify_phase(0.0, true), PhaseName::NewMoon);
        assert_eq!(classify_phase(0.009, false), PhaseName::NewMoon);
        assert_eq!(classify_phase(0.995, true), PhaseName::FullMoon);
        assert_eq!(classify_phase(0.5, true), PhaseName::FirstQuarter);
        assert_eq!(classify_phase(0.46, false), PhaseName::LastQuarter);
        assert_eq!(classify_phase(0.2, true), PhaseName::WaxingCrescent);
        assert_eq!(classify_phase(0.2, false), PhaseName::WaningCrescent);
        assert_eq!(classify_phase(0.8, true), PhaseName::WaxingGibbous);
        assert_eq!(classify_phase(0.8, false), PhaseName::WaningGibbous);
    }

    #[test]
    fn fraction_stays_in_unit_interval_over_a_month() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        for h in (0..30 * 24).step_by(7) {
            let phase = moon_phase_at(&(start + TimeDelta::hours(h)));
            assert!((0.0..=1.0).contains(&phase.illuminated_fraction));
            assert!((0.0..=180.0).contains(&phase.elongation_deg));
        }
    }

    #[test]
    fn instant_keeps_caller_zone() {
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let t = tz.with_ymd_and_hms(2024, 1, 18, 9, 23, 0).unwrap();
        let phase = moon_phase_at(&t);
        assert_eq!(phase.instant, t);
        assert_eq!(phase.instant.offset(), t.offset());
    }

    #[test]
    fn phase_does_not_depend_on_zone() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 18, 3, 53, 0).unwrap();
        let local = utc.with_timezone(&FixedOffset::west_opt(8 * 3600).unwrap());
        let a = moon_phase_at(&utc);
        let b = moon_phase_at(&local);
        assert_eq!(a.illuminated_fraction, b.illuminated_fraction);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn phase_name_display() {
        assert_eq!(PhaseName::WaningGibbous.to_string(), "Waning Gibbous");
        assert_eq!(PhaseName::ALL.len(), 8);
    }
}
