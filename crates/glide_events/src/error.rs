//! Error types for event computation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from rise/set, twilight and daylight-phase computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EventError {
    /// Neither event of the requested pair occurs in the local day.
    #[error("body does not rise or set on this date")]
    NoRiseOrSet,
    /// Body name did not parse.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// Twilight kind name did not parse.
    #[error("unknown twilight kind: {0}")]
    UnknownTwilightKind(String),
    /// Observer coordinates out of range or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Solver configuration rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// 00:00 on the requested date falls in a DST gap in the caller's zone.
    #[error("local midnight does not exist on {0} in this time zone")]
    NonexistentLocalMidnight(NaiveDate),
}
