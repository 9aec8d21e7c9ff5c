//! Julian Date and day-count scales.
//!
//! The Sun and Moon series are parameterized on fractional days since
//! J2000.0 (2000-01-01T12:00:00Z); the lunar distance series uses Julian
//! centuries instead. Both are derived here from a UTC instant. No ΔT or
//! leap-second correction is applied: at arc-minute precision UT ≈ TT.
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 7 (Gregorian calendar only).

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Unix timestamp of 2000-01-01T12:00:00Z.
pub const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Fractional days elapsed between J2000.0 and `t` (negative before the epoch).
pub fn days_since_j2000(t: DateTime<Utc>) -> f64 {
    let whole = (t.timestamp() - J2000_UNIX_SECONDS) as f64;
    let frac = f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    (whole + frac) / SECONDS_PER_DAY
}

/// Julian Date for a Gregorian calendar date with fractional day.
///
/// January and February are treated as months 13 and 14 of the previous
/// year, and the Gregorian century correction `B = 2 − A + ⌊A/4⌋` applies.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date of a UTC instant.
pub fn julian_day(t: DateTime<Utc>) -> f64 {
    let hours = f64::from(t.hour())
        + f64::from(t.minute()) / 60.0
        + f64::from(t.second()) / 3600.0
        + f64::from(t.nanosecond()) / 3.6e12;
    calendar_to_jd(t.year(), t.month(), f64::from(t.day()) + hours / 24.0)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(t: DateTime<Utc>) -> f64 {
    (julian_day(t) - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_unix_seconds_matches_calendar() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(epoch.timestamp(), J2000_UNIX_SECONDS);
        assert_eq!(days_since_j2000(epoch), 0.0);
    }

    #[test]
    fn days_since_j2000_half_day() {
        let t = Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap();
        assert!((days_since_j2000(t) - 0.5).abs() < 1e-12);
        let before = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!((days_since_j2000(before) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn julian_day_at_j2000() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(epoch) - J2000_JD).abs() < 1e-9);
        assert!(julian_centuries(epoch).abs() < 1e-12);
    }

    #[test]
    fn julian_day_meeus_example() {
        // Meeus example 7.a: 1957 October 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn julian_day_january_uses_previous_year() {
        // Meeus example 7.b-style check: 1988 January 27.0 = JD 2447187.5
        let jd = calendar_to_jd(1988, 1, 27.0);
        assert!((jd - 2_447_187.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn julian_day_agrees_with_day_count() {
        let t = Utc.with_ymd_and_hms(2025, 11, 30, 7, 13, 27).unwrap();
        let via_jd = julian_day(t) - J2000_JD;
        let via_days = days_since_j2000(t);
        assert!(
            (via_jd - via_days).abs() < 1e-8,
            "jd-based {via_jd} vs day count {via_days}"
        );
    }

    #[test]
    fn centuries_scale() {
        let t = Utc.with_ymd_and_hms(2100, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_centuries(t) - 1.0).abs() < 1e-9);
    }
}
