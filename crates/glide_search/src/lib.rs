//! Altitude crossing search.
//!
//! This crate provides:
//! - The [`AltitudeModel`] seam: anything that maps a UTC instant to an
//!   altitude in degrees
//! - [`find_crossing`]: first crossing of a target altitude in a given
//!   direction inside a time window
//!
//! The solver knows nothing about bodies or observers. Callers wrap their
//! position pipeline in an `AltitudeModel` and pick the target.

pub mod crossing;
pub mod crossing_types;

pub use crossing::{AltitudeModel, find_crossing};
pub use crossing_types::{CrossingConfig, CrossingDirection, CrossingResult};
