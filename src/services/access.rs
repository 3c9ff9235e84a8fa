//! Access window arithmetic for sequential, time-gated course units.
//!
//! Every unit is reachable for exactly one window, back to back from the
//! enrollment instant: unit `i` opens at `enrollment + i * WINDOW_DAYS` and
//! closes when unit `i + 1` opens. Evaluation re-derives the whole state
//! from the supplied instant; nothing is carried between calls.

use crate::models::{Remaining, TimerState};
use chrono::{DateTime, Duration, Utc};

/// Days each unit stays open. Fixed policy: sequential, non-overlapping,
/// back-to-back windows.
pub const WINDOW_DAYS: i64 = 7;

const SECONDS_PER_DAY: i64 = 86_400;

/// Bounds of one unit's availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessWindow {
    pub unlocks_at: DateTime<Utc>,
    pub locks_at: DateTime<Utc>,
}

impl AccessWindow {
    /// Window for the unit at `unit_index`, offset from enrollment.
    #[must_use]
    pub fn for_unit(enrollment: DateTime<Utc>, unit_index: i64) -> Self {
        let unlocks_at = enrollment + Duration::days(unit_index * WINDOW_DAYS);
        Self {
            unlocks_at,
            locks_at: unlocks_at + Duration::days(WINDOW_DAYS),
        }
    }

    /// A window contains an instant from its unlock (inclusive) to its lock
    /// (exclusive), so adjacent windows never both claim the boundary.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.unlocks_at <= instant && instant < self.locks_at
    }
}

/// Whole days elapsed since enrollment, floored, so any instant before the
/// enrollment timestamp counts as a negative day.
#[must_use]
pub fn days_since_enrollment(enrollment: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(enrollment)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Parse an RFC 3339 enrollment timestamp into UTC.
pub fn parse_enrollment(raw: &str) -> crate::Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim())?;
    Ok(parsed.with_timezone(&Utc))
}

/// Evaluate the access state of `unit_index` as of `now`.
///
/// A negative index, or an index at or past `total_units`, names no unit and
/// yields the unavailable sentinel. An enrollment in the future is evaluated
/// with the same window formulas: the unit reports inactive and both
/// countdowns run until their respective gates.
#[must_use]
pub fn evaluate(
    enrollment: DateTime<Utc>,
    unit_index: i64,
    total_units: Option<u32>,
    now: DateTime<Utc>,
) -> TimerState {
    if unit_index < 0 {
        log::warn!("No unit at negative index {unit_index}");
        return TimerState::unavailable();
    }
    if let Some(total) = total_units {
        if unit_index >= i64::from(total) {
            log::warn!("Unit index {unit_index} is past the course's {total} units");
            return TimerState::unavailable();
        }
    }

    let window = AccessWindow::for_unit(enrollment, unit_index);
    // The learner is shown the unit whose gate opens one full window after
    // the current one closes.
    let next_opens_at = window.locks_at + Duration::days(WINDOW_DAYS);
    let has_next_unit = total_units.is_none_or(|total| unit_index + 1 < i64::from(total));

    TimerState {
        current_unit_time_left: remaining_until(window.locks_at, now),
        next_unit_opens_in: if has_next_unit {
            remaining_until(next_opens_at, now)
        } else {
            Remaining::Unavailable
        },
        is_current_unit_active: window.contains(now),
        has_next_unit,
    }
}

/// Negative or zero spans collapse to `Expired`; durations are never
/// reported as negative numbers.
fn remaining_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Remaining {
    let seconds = deadline.signed_duration_since(now).num_seconds();
    if seconds <= 0 {
        Remaining::Expired
    } else {
        Remaining::Left(seconds.unsigned_abs())
    }
}
