//! Altitude crossing search.
//!
//! Algorithm: sample `f(t) = altitude(t) − target` at equally spaced instants
//! across the window, take the first consecutive pair that brackets a
//! crossing in the requested direction, then bisect that bracket. Later
//! brackets are ignored, so a window with two crossings in the same direction
//! reports the earlier one.

use chrono::{DateTime, TimeDelta, Utc};
use log::trace;

use crate::crossing_types::{CrossingConfig, CrossingDirection, CrossingResult};

/// Altitude of something in the sky, in degrees, as a function of time.
pub trait AltitudeModel {
    fn altitude_deg(&self, t: DateTime<Utc>) -> f64;
}

impl<F> AltitudeModel for F
where
    F: Fn(DateTime<Utc>) -> f64,
{
    fn altitude_deg(&self, t: DateTime<Utc>) -> f64 {
        self(t)
    }
}

/// Smallest bracket width bisection will aim for.
fn min_tolerance() -> TimeDelta {
    TimeDelta::nanoseconds(1)
}

/// Find the first instant in `[window_start, window_end]` where `model`
/// crosses `target_deg` in `direction`.
///
/// A degenerate window (`window_start >= window_end`) or a window without a
/// bracketing sample pair yields [`CrossingResult::NotFound`].
pub fn find_crossing<M>(
    model: &M,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    target_deg: f64,
    direction: CrossingDirection,
    config: &CrossingConfig,
) -> CrossingResult
where
    M: AltitudeModel + ?Sized,
{
    if window_start >= window_end {
        return CrossingResult::NotFound;
    }

    let f = |t: DateTime<Utc>| model.altitude_deg(t) - target_deg;

    let samples = config.sample_count.max(2);
    let intervals = i32::try_from(samples - 1).unwrap_or(i32::MAX);
    let step = (window_end - window_start) / intervals;

    let mut t_prev = window_start;
    let mut f_prev = f(t_prev);

    for i in 1..=intervals {
        let t_curr = if i == intervals {
            window_end
        } else {
            window_start + step * i
        };
        let f_curr = f(t_curr);

        if direction.brackets(f_prev, f_curr) {
            trace!(
                "{direction:?} bracket [{t_prev}, {t_curr}] f = ({f_prev:.4}, {f_curr:.4})"
            );
            let t = bisect(&f, t_prev, f_prev, t_curr, direction, config);
            trace!("{direction:?} crossing of {target_deg}° at {t}");
            return CrossingResult::Found(t);
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    CrossingResult::NotFound
}

/// Narrow a bracket `[t_a, t_b]` until it is within tolerance.
///
/// `f_a` is the offset at `t_a`; the directional condition holds on
/// `(t_a, t_b)` throughout.
fn bisect<F>(
    f: &F,
    mut t_a: DateTime<Utc>,
    mut f_a: f64,
    mut t_b: DateTime<Utc>,
    direction: CrossingDirection,
    config: &CrossingConfig,
) -> DateTime<Utc>
where
    F: Fn(DateTime<Utc>) -> f64,
{
    let tolerance = config.tolerance.max(min_tolerance());

    for _ in 0..config.max_iterations {
        if t_b - t_a <= tolerance {
            break;
        }
        let t_mid = t_a + (t_b - t_a) / 2;
        let f_mid = f(t_mid);

        if direction.brackets(f_a, f_mid) {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    t_a + (t_b - t_a) / 2
}
