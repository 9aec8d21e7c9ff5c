//! The local civil day in the caller's time zone.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::error::EventError;

/// Search window for a local calendar date: local midnight (earliest
/// mapping when ambiguous) to 24 hours later, both in UTC.
pub fn local_day_window<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
) -> Result<(DateTime<Utc>, DateTime<Utc>), EventError> {
    let midnight = tz
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or(EventError::NonexistentLocalMidnight(date))?;
    let start = midnight.with_timezone(&Utc);
    Ok((start, start + TimeDelta::hours(24)))
}

/// Express `t` in `tz` with its calendar date replaced by `date`, keeping
/// the wall-clock time.
///
/// An ambiguous pinned wall time resolves to the earliest instant. If the
/// pinned wall time does not exist (DST gap), the unpinned local time is
/// returned.
pub fn pin_to_local_date<Tz: TimeZone>(t: DateTime<Utc>, date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let local = t.with_timezone(tz);
    if local.date_naive() == date {
        return local;
    }
    let pinned = date.and_time(local.time());
    tz.from_local_datetime(&pinned).earliest().unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_spans_local_day() {
        let tz = FixedOffset::west_opt(7 * 3600).unwrap();
        let (start, end) = local_day_window(date(2025, 11, 30), &tz).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 11, 30, 7, 0, 0).unwrap());
        assert_eq!(end - start, TimeDelta::hours(24));
    }

    #[test]
    fn window_east_of_greenwich_starts_previous_utc_day() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let (start, _) = local_day_window(date(2025, 1, 1), &tz).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 31, 15, 0, 0).unwrap());
    }

    #[test]
    fn midnight_in_dst_gap_is_an_error() {
        // Chile springs forward at local midnight.
        let tz = chrono_tz::America::Santiago;
        let result = local_day_window(date(2024, 9, 8), &tz);
        assert_eq!(result, Err(EventError::NonexistentLocalMidnight(date(2024, 9, 8))));
    }

    #[test]
    fn same_date_is_untouched() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = Utc.with_ymd_and_hms(2025, 11, 30, 18, 29, 45).unwrap();
        let pinned = pin_to_local_date(t, date(2025, 11, 30), &tz);
        assert_eq!(pinned, t);
        assert_eq!(pinned.hour(), 13);
    }

    #[test]
    fn pinning_keeps_wall_time() {
        let tz = FixedOffset::west_opt(7 * 3600).unwrap();
        // 2025-12-01 01:10 local
        let t = Utc.with_ymd_and_hms(2025, 12, 1, 8, 10, 0).unwrap();
        let pinned = pin_to_local_date(t, date(2025, 11, 30), &tz);
        assert_eq!(pinned.date_naive(), date(2025, 11, 30));
        assert_eq!((pinned.hour(), pinned.minute()), (1, 10));
    }

    #[test]
    fn ambiguous_wall_time_takes_earliest() {
        let tz = chrono_tz::America::New_York;
        // 01:30 EST on 2025-11-03, pinned to the fall-back date where 01:30 occurs twice.
        let t = Utc.with_ymd_and_hms(2025, 11, 3, 6, 30, 0).unwrap();
        let pinned = pin_to_local_date(t, date(2025, 11, 2), &tz);
        assert_eq!(pinned.with_timezone(&Utc), Utc.with_ymd_and_hms(2025, 11, 2, 5, 30, 0).unwrap());
    }

    #[test]
    fn nonexistent_wall_time_falls_back_to_unpinned() {
        let tz = chrono_tz::America::New_York;
        // 02:30 EST on 2025-03-08; 02:30 does not exist on 2025-03-09.
        let t = Utc.with_ymd_and_hms(2025, 3, 8, 7, 30, 0).unwrap();
        let pinned = pin_to_local_date(t, date(2025, 3, 9), &tz);
        assert_eq!(pinned.with_timezone(&Utc), t);
        assert_eq!(pinned.date_naive(), date(2025, 3, 8));
    }
}
