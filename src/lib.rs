//! Course Unit Access Library
//!
//! This library computes time-gated availability for sequential course units
//! (a fixed seven-day window per unit, offset from the learner's enrollment
//! instant) and generates randomized grid placements for decorative overlay
//! elements, with device-aware density and sizing.

pub mod cli;
pub mod models;
pub mod runtime;
pub mod services;

pub use models::{AnimationVariant, PlacementItem, Remaining, TimerState};
pub use services::placement::{SizeRange, ViewportClass};

use chrono::{DateTime, Utc};
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    InvalidInput(String),
    Timestamp(chrono::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Timestamp(e) => write!(f, "Invalid timestamp: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Timestamp(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Evaluate a unit's access state from a raw enrollment timestamp.
///
/// # Arguments
/// * `enrollment` - RFC 3339 enrollment timestamp
/// * `unit_index` - Zero-based unit position
/// * `total_units` - Optional bound on the unit sequence; when absent, a
///   next unit is assumed to exist
///
/// # Returns
/// The current `TimerState`. A timestamp that fails to parse yields the
/// unavailable sentinel rather than an error.
#[must_use]
pub fn unit_status(enrollment: &str, unit_index: i64, total_units: Option<u32>) -> TimerState {
    unit_status_at(enrollment, unit_index, total_units, Utc::now())
}

/// Evaluate a unit's access state as of an explicit instant.
///
/// Same contract as [`unit_status`], with the clock supplied by the caller
/// so results can be replayed deterministically.
#[must_use]
pub fn unit_status_at(
    enrollment: &str,
    unit_index: i64,
    total_units: Option<u32>,
    now: DateTime<Utc>,
) -> TimerState {
    match services::access::parse_enrollment(enrollment) {
        Ok(enrolled_at) => services::access::evaluate(enrolled_at, unit_index, total_units, now),
        Err(err) => {
            log::warn!("Rejecting enrollment timestamp {enrollment:?}: {err}");
            TimerState::unavailable()
        }
    }
}
