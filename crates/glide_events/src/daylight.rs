//! Golden hour and blue hour: intervals where the Sun's center stays inside
//! an altitude band.

use chrono::{DateTime, NaiveDate, TimeZone};
use glide_bodies::GeoLocation;
use glide_search::CrossingDirection;
use log::debug;

use crate::altitude::SunAltitude;
use crate::error::EventError;
use crate::event_types::{DaylightPhases, EventConfig, PhaseWindow};
use crate::riseset::DaySearch;

/// Golden hour band: Sun center between −4° and +6°.
pub const GOLDEN_HOUR_BAND_DEG: (f64, f64) = (-4.0, 6.0);

/// Blue hour band: Sun center between −6° and −4°.
pub const BLUE_HOUR_BAND_DEG: (f64, f64) = (-6.0, -4.0);

/// Morning and evening intervals with the Sun between `low_deg` and `high_deg`.
///
/// Morning runs from the rising crossing of `low_deg` to the rising crossing
/// of `high_deg`; evening from the setting crossing of `high_deg` to the
/// setting crossing of `low_deg`. A window is kept only when its end is
/// after its start. Neither window gives [`EventError::NoRiseOrSet`].
pub fn sun_band_for<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    low_deg: f64,
    high_deg: f64,
    config: &EventConfig,
) -> Result<DaylightPhases<Tz>, EventError> {
    if low_deg.is_nan() || high_deg.is_nan() || low_deg >= high_deg {
        return Err(EventError::InvalidConfig("band low_deg must be below high_deg"));
    }
    let day = DaySearch::new(location, date, tz, config)?;
    let model = SunAltitude::new(*location, config.apply_refraction);

    let window = |start: Option<DateTime<Tz>>, end: Option<DateTime<Tz>>| match (start, end) {
        (Some(start), Some(end)) if end > start => Some(PhaseWindow { start, end }),
        _ => None,
    };

    let morning = window(
        day.find(&model, low_deg, CrossingDirection::Rising),
        day.find(&model, high_deg, CrossingDirection::Rising),
    );
    let evening = window(
        day.find(&model, high_deg, CrossingDirection::Setting),
        day.find(&model, low_deg, CrossingDirection::Setting),
    );

    debug!(
        "sun band [{low_deg}, {high_deg}] on {date}: morning = {}, evening = {}",
        morning.is_some(),
        evening.is_some()
    );

    if morning.is_none() && evening.is_none() {
        return Err(EventError::NoRiseOrSet);
    }
    Ok(DaylightPhases { morning, evening })
}

/// Golden hour windows for the local calendar date.
pub fn golden_hour_for<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    config: &EventConfig,
) -> Result<DaylightPhases<Tz>, EventError> {
    let (low, high) = GOLDEN_HOUR_BAND_DEG;
    sun_band_for(location, date, tz, low, high, config)
}

/// Blue hour windows for the local calendar date.
pub fn blue_hour_for<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    config: &EventConfig,
) -> Result<DaylightPhases<Tz>, EventError> {
    let (low, high) = BLUE_HOUR_BAND_DEG;
    sun_band_for(location, date, tz, low, high, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn phoenix() -> (GeoLocation, FixedOffset) {
        (
            GeoLocation::new(33.4484, -112.074, 0.0),
            FixedOffset::west_opt(7 * 3600).unwrap(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inverted_band_rejected() {
        let (loc, tz) = phoenix();
        let result = sun_band_for(&loc, date(2025, 11, 30), &tz, 6.0, -4.0, &EventConfig::default());
        assert!(matches!(result, Err(EventError::InvalidConfig(_))));
    }

    #[test]
    fn blue_hour_meets_golden_hour() {
        // Blue hour ends where golden hour begins (both at −4°).
        let (loc, tz) = phoenix();
        let config = EventConfig::default();
        let d = date(2025, 11, 30);
        let golden = golden_hour_for(&loc, d, &tz, &config).unwrap();
        let blue = blue_hour_for(&loc, d, &tz, &config).unwrap();
        let gm = golden.morning.expect("golden morning");
        let bm = blue.morning.expect("blue morning");
        assert_eq!(bm.end, gm.start);
        let ge = golden.evening.expect("golden evening");
        let be = blue.evening.expect("blue evening");
        assert_eq!(ge.end, be.start);
    }

    #[test]
    fn windows_have_positive_duration() {
        let (loc, tz) = phoenix();
        let phases = golden_hour_for(&loc, date(2025, 6, 21), &tz, &EventConfig::default()).unwrap();
        for w in [phases.morning, phases.evening].into_iter().flatten() {
            assert!(w.end > w.start);
            assert!(w.duration().num_minutes() > 0);
        }
    }

    #[test]
    fn polar_night_has_no_golden_hour() {
        // Near the North Pole in December the Sun stays below −4°.
        let loc = GeoLocation::new(85.0, 0.0, 0.0);
        let tz = FixedOffset::east_opt(0).unwrap();
        let result = golden_hour_for(&loc, date(2025, 12, 21), &tz, &EventConfig::default());
        assert_eq!(result, Err(EventError::NoRiseOrSet));
    }
}
