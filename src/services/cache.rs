//! Memoized placement results keyed by generation parameters.
//!
//! Placements are randomized, so regenerating on every render would make the
//! overlay jitter. The cache reruns the generator only when the parameter
//! key changes and hands back the stored slice otherwise.

use crate::models::PlacementItem;
use crate::services::placement::{self, SizeRange, ViewportClass};
use rand::Rng;

/// Parameters a set of placements was generated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementKey {
    pub count: usize,
    pub viewport: ViewportClass,
    pub size_range: SizeRange,
}

/// Single-entry cache holding the most recent generation.
#[derive(Debug, Default)]
pub struct PlacementCache {
    key: Option<PlacementKey>,
    items: Vec<PlacementItem>,
    generations: u64,
}

impl PlacementCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return placements for `key`, generating them only if the key differs
    /// from the cached one.
    pub fn items<R: Rng + ?Sized>(&mut self, key: PlacementKey, rng: &mut R) -> &[PlacementItem] {
        if self.key != Some(key) {
            log::trace!("Placement cache miss for {key:?}");
            self.items = placement::generate(key.count, key.viewport, key.size_range, rng);
            self.key = Some(key);
            self.generations += 1;
        }
        &self.items
    }

    /// How many times the generator actually ran.
    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }
}
