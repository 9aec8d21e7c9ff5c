//! Rise/set, twilight, golden and blue hour, and lunar phase for an observer
//! and a local calendar date.
//!
//! This crate provides:
//! - Sun and Moon rise/set ([`rise_set_for`], [`sunrise_sunset`])
//! - Civil, nautical and astronomical twilight ([`twilight_for`])
//! - All eight solar day events at once ([`solar_events_for`])
//! - Day length ([`daylight_hours`])
//! - Golden and blue hour windows ([`golden_hour_for`], [`blue_hour_for`])
//! - Moon illuminated fraction and phase name ([`moon_phase_at`])
//!
//! Dates are civil dates in any `chrono::TimeZone`; the search covers local
//! midnight to 24 hours later, and results come back in the same zone.
//!
//! ```no_run
//! use chrono::{FixedOffset, NaiveDate};
//! use glide_events::{Body, EventConfig, GeoLocation, rise_set_for};
//!
//! let phoenix = GeoLocation::new(33.4484, -112.074, 0.0);
//! let tz = FixedOffset::west_opt(7 * 3600).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
//! let events = rise_set_for(Body::Moon, &phoenix, date, &tz, &EventConfig::default())?;
//! println!("moonrise {:?}, moonset {:?}", events.rise, events.set);
//! # Ok::<(), glide_events::EventError>(())
//! ```

pub mod altitude;
pub mod daylight;
pub mod error;
pub mod event_types;
pub mod local_day;
pub mod moon_phase;
pub mod moon_phase_types;
pub mod riseset;

pub use altitude::{MoonAltitude, MoonHorizon, SunAltitude};
pub use daylight::{
    BLUE_HOUR_BAND_DEG, GOLDEN_HOUR_BAND_DEG, blue_hour_for, golden_hour_for, sun_band_for,
};
pub use error::EventError;
pub use event_types::{
    Body, DaylightPhases, EventConfig, MAX_SAMPLE_COUNT, PhaseWindow, RiseSetEvents, SolarEvent,
    TwilightKind,
};
pub use glide_bodies::GeoLocation;
pub use local_day::{local_day_window, pin_to_local_date};
pub use moon_phase::{classify_phase, moon_phase_at};
pub use moon_phase_types::{MoonPhase, PhaseName};
pub use riseset::{daylight_hours, rise_set_for, solar_events_for, sunrise_sunset, twilight_for};
