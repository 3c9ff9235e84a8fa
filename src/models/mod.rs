//! Data models for countdown snapshots and overlay placement items

use serde::{Deserialize, Serialize};

/// Time left until a window boundary, or a marker when none applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "seconds", rename_all = "snake_case")]
pub enum Remaining {
    /// The boundary is at or before the evaluation instant.
    Expired,
    /// Whole seconds until the boundary.
    Left(u64),
    /// No meaningful duration exists (bad input or no such unit).
    Unavailable,
}

/// Snapshot of a unit's access state, replaced wholesale on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub current_unit_time_left: Remaining,
    /// Countdown to the gate one full window after the current one closes.
    pub next_unit_opens_in: Remaining,
    pub is_current_unit_active: bool,
    pub has_next_unit: bool,
}

impl TimerState {
    /// Sentinel returned for malformed enrollment input or an out-of-range
    /// unit index.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            current_unit_time_left: Remaining::Unavailable,
            next_unit_opens_in: Remaining::Unavailable,
            is_current_unit_active: false,
            has_next_unit: false,
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }
}

/// Animation applied to a decorative overlay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationVariant {
    Float,
    Pulse,
    Drift,
    Spin,
}

impl AnimationVariant {
    pub const ALL: [AnimationVariant; 4] = [
        AnimationVariant::Float,
        AnimationVariant::Pulse,
        AnimationVariant::Drift,
        AnimationVariant::Spin,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationVariant::Float => "float",
            AnimationVariant::Pulse => "pulse",
            AnimationVariant::Drift => "drift",
            AnimationVariant::Spin => "spin",
        }
    }
}

impl std::fmt::Display for AnimationVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decorative overlay element's computed position and animation.
///
/// Coordinates are normalized percentages of the viewport. Mirroring for
/// right-to-left presentation is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementItem {
    pub top_percent: f64,
    pub left_percent: f64,
    pub size_px: f64,
    pub animation_variant: AnimationVariant,
    pub delay_seconds: f64,
}
