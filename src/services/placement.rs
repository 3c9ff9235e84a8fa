//! Randomized grid placement for decorative overlay elements.
//!
//! The normalized `[0, 100] x [0, 100]` plane is partitioned into a grid
//! sized by viewport class; each item lands inside its own cell at a random
//! offset. Cell ownership bounds worst-case visual overlap but does not
//! exclude it entirely; callers treat overlap as cosmetic, not an error.

use crate::models::{AnimationVariant, PlacementItem};
use rand::Rng;

/// Widths below this classify as `Compact`.
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

/// Upper bound (exclusive) for the random animation start delay, seconds.
const MAX_DELAY_SECONDS: f64 = 4.0;

/// Coarse device-width bucket driving layout density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Compact,
    #[default]
    Wide,
}

impl ViewportClass {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Compact => "compact",
            ViewportClass::Wide => "wide",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "compact" | "mobile" => Some(ViewportClass::Compact),
            "wide" | "desktop" => Some(ViewportClass::Wide),
            _ => None,
        }
    }

    /// Classify a viewport width in pixels.
    #[must_use]
    pub fn from_width(width_px: u32) -> Self {
        if width_px < COMPACT_BREAKPOINT_PX {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    /// Grid columns for this class.
    #[must_use]
    pub fn columns(&self) -> usize {
        match self {
            ViewportClass::Compact => 3,
            ViewportClass::Wide => 6,
        }
    }

    /// Requested count is roughly halved on compact viewports to avoid
    /// crowding; never raised above the request.
    #[must_use]
    pub fn effective_count(&self, requested: usize) -> usize {
        match self {
            ViewportClass::Compact => requested.div_ceil(2),
            ViewportClass::Wide => requested,
        }
    }

    /// Random-offset band inside a cell, as fractions of the cell size.
    /// Compact keeps items nearer the cell center to cut collision risk.
    fn offset_band(&self) -> (f64, f64) {
        match self {
            ViewportClass::Compact => (0.3, 0.7),
            ViewportClass::Wide => (0.2, 0.8),
        }
    }
}

impl std::fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewportClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewportClass::from_label(s).ok_or_else(|| format!("unknown viewport class '{s}'"))
    }
}

/// Inclusive pixel bounds for item sizes on a wide viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    pub min_px: f64,
    pub max_px: f64,
}

impl SizeRange {
    pub fn new(min_px: f64, max_px: f64) -> crate::Result<Self> {
        if !min_px.is_finite() || !max_px.is_finite() || min_px < 0.0 {
            return Err(crate::Error::InvalidInput(format!(
                "Size bounds must be finite and non-negative: {min_px}..{max_px}"
            )));
        }
        if min_px > max_px {
            return Err(crate::Error::InvalidInput(format!(
                "Minimum size {min_px} exceeds maximum {max_px}"
            )));
        }
        Ok(Self { min_px, max_px })
    }

    /// Compact viewports shrink the wide-viewport range.
    #[must_use]
    pub fn for_viewport(&self, viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Compact => Self {
                min_px: self.min_px * 0.6,
                max_px: self.max_px * 0.7,
            },
            ViewportClass::Wide => *self,
        }
    }
}

/// Generate placements for `count` decorative items.
///
/// Items fill grid cells in reading order (row-major, left to right), each
/// offset randomly within its cell, so the emitted count never exceeds the
/// request and no two items share a cell.
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    viewport: ViewportClass,
    size_range: SizeRange,
    rng: &mut R,
) -> Vec<PlacementItem> {
    if count == 0 {
        return Vec::new();
    }

    let effective = viewport.effective_count(count);
    let columns = viewport.columns();
    let rows = effective.div_ceil(columns);
    let cell_width = 100.0 / columns as f64;
    let cell_height = 100.0 / rows as f64;
    let (offset_min, offset_max) = viewport.offset_band();
    let sizes = size_range.for_viewport(viewport);

    log::debug!(
        "Placing {effective} of {count} requested items on a {columns}x{rows} {viewport} grid"
    );

    (0..effective)
        .map(|index| {
            let row = index / columns;
            let col = index % columns;
            let left = (col as f64 + rng.gen_range(offset_min..=offset_max)) * cell_width;
            let top = (row as f64 + rng.gen_range(offset_min..=offset_max)) * cell_height;
            let variant = AnimationVariant::ALL[rng.gen_range(0..AnimationVariant::ALL.len())];

            PlacementItem {
                top_percent: top,
                left_percent: left,
                size_px: rng.gen_range(sizes.min_px..=sizes.max_px),
                animation_variant: variant,
                delay_seconds: rng.gen_range(0.0..MAX_DELAY_SECONDS),
            }
        })
        .collect()
}
