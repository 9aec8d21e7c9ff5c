//! Sun and Moon rise/set, twilight and the full solar day.
//!
//! Every search runs over the caller's local civil day (see
//! [`local_day_window`]) and reports the first crossing in each direction.
//! Found instants are re-pinned to the requested local date.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use glide_bodies::{GeoLocation, SUN_HORIZON_ALTITUDE_DEG};
use glide_search::{AltitudeModel, CrossingConfig, CrossingDirection, find_crossing};
use log::{debug, trace};

use crate::altitude::{MoonAltitude, MoonHorizon, SunAltitude};
use crate::error::EventError;
use crate::event_types::{Body, EventConfig, RiseSetEvents, SolarEvent, TwilightKind};
use crate::local_day::{local_day_window, pin_to_local_date};

/// One local day of searching: window, zone and solver settings.
pub(crate) struct DaySearch<'a, Tz: TimeZone> {
    pub date: NaiveDate,
    pub tz: &'a Tz,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub crossing: CrossingConfig,
}

impl<'a, Tz: TimeZone> DaySearch<'a, Tz> {
    /// Validate inputs and resolve the local day window.
    pub fn new(
        location: &GeoLocation,
        date: NaiveDate,
        tz: &'a Tz,
        config: &EventConfig,
    ) -> Result<Self, EventError> {
        location.validate().map_err(EventError::InvalidLocation)?;
        let crossing = config.crossing_config()?;
        let (start, end) = local_day_window(date, tz)?;
        debug!(
            "searching {date} at ({:.4}, {:.4}): window [{start}, {end})",
            location.latitude_deg, location.longitude_deg
        );
        Ok(Self {
            date,
            tz,
            start,
            end,
            crossing,
        })
    }

    /// First crossing of `target_deg` in `direction`, pinned to the local date.
    pub fn find<M: AltitudeModel + ?Sized>(
        &self,
        model: &M,
        target_deg: f64,
        direction: CrossingDirection,
    ) -> Option<DateTime<Tz>> {
        let found = find_crossing(
            model,
            self.start,
            self.end,
            target_deg,
            direction,
            &self.crossing,
        )
        .instant()?;
        let local = pin_to_local_date(found, self.date, self.tz);
        trace!("{direction:?} through {target_deg}° at {found} (local {local:?})");
        Some(local)
    }

    /// Rising and setting crossings, each with its own model.
    fn rise_set<R, S>(
        &self,
        rise_model: &R,
        set_model: &S,
        target_deg: f64,
    ) -> Result<RiseSetEvents<Tz>, EventError>
    where
        R: AltitudeModel + ?Sized,
        S: AltitudeModel + ?Sized,
    {
        let events = RiseSetEvents {
            rise: self.find(rise_model, target_deg, CrossingDirection::Rising),
            set: self.find(set_model, target_deg, CrossingDirection::Setting),
        };
        debug!(
            "{}: rise found = {}, set found = {}",
            self.date,
            events.rise.is_some(),
            events.set.is_some()
        );
        if events.is_empty() {
            return Err(EventError::NoRiseOrSet);
        }
        Ok(events)
    }
}

/// Rise and set of `body` on the local calendar `date` in `tz`.
///
/// The Sun uses the standard −0.833° horizon. The Moon uses its
/// distance-dependent horizon, dropped a further 0.16° for set.
/// Returns [`EventError::NoRiseOrSet`] only when both are absent.
pub fn rise_set_for<Tz: TimeZone>(
    body: Body,
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    config: &EventConfig,
) -> Result<RiseSetEvents<Tz>, EventError> {
    let day = DaySearch::new(location, date, tz, config)?;
    match body {
        Body::Sun => {
            let model = SunAltitude::new(*location, config.apply_refraction);
            day.rise_set(&model, &model, SUN_HORIZON_ALTITUDE_DEG)
        }
        Body::Moon => {
            let rise = MoonAltitude::new(*location, MoonHorizon::Rise, config.apply_refraction);
            let set = MoonAltitude::new(*location, MoonHorizon::Set, config.apply_refraction);
            day.rise_set(&rise, &set, 0.0)
        }
    }
}

/// Sunrise and sunset; shorthand for `rise_set_for(Body::Sun, ..)`.
pub fn sunrise_sunset<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    config: &EventConfig,
) -> Result<RiseSetEvents<Tz>, EventError> {
    rise_set_for(Body::Sun, location, date, tz, config)
}

/// Hours between sunrise and sunset.
///
/// Both events must exist; polar day and polar night give
/// [`EventError::NoRiseOrSet`].
pub fn daylight_hours<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    config: &EventConfig,
) -> Result<f64, EventError> {
    let events = sunrise_sunset(location, date, tz, config)?;
    match (events.rise, events.set) {
        (Some(rise), Some(set)) => {
            let span = set - rise;
            Ok(span.num_milliseconds() as f64 / 3_600_000.0)
        }
        _ => Err(EventError::NoRiseOrSet),
    }
}

/// Dawn (`rise`) and dusk (`set`) for a twilight band.
pub fn twilight_for<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    kind: TwilightKind,
    config: &EventConfig,
) -> Result<RiseSetEvents<Tz>, EventError> {
    let day = DaySearch::new(location, date, tz, config)?;
    let model = SunAltitude::new(*location, config.apply_refraction);
    day.rise_set(&model, &model, kind.altitude_deg())
}

/// All eight solar events of the local day, in [`SolarEvent::ALL`] order.
///
/// Events that do not occur are `None`; this never fails with
/// [`EventError::NoRiseOrSet`].
pub fn solar_events_for<Tz: TimeZone>(
    location: &GeoLocation,
    date: NaiveDate,
    tz: &Tz,
    config: &EventConfig,
) -> Result<Vec<(SolarEvent, Option<DateTime<Tz>>)>, EventError> {
    let day = DaySearch::new(location, date, tz, config)?;
    let model = SunAltitude::new(*location, config.apply_refraction);
    Ok(SolarEvent::ALL
        .iter()
        .map(|&event| {
            (
                event,
                day.find(&model, event.altitude_deg(), event.direction()),
            )
        })
        .collect())
}
