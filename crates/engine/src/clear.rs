//! Clear checking: is the container exactly filled?
//!
//! A stage is clear when every item is placed, every item lies inside the
//! container and no two items share volume. Containment is tested per face
//! with a linear tolerance; overlap is tested on the shared volume, so the
//! same tolerance is compared against a volume there. Face-to-face contact
//! shares no volume and is always allowed.

use boxfill_core::item::{ItemId, PlacedItem};
use boxfill_core::transform::AABB3D;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a stage is not clear.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearFailure {
    /// Not every item is placed.
    CountMismatch {
        /// Items currently placed.
        placed: usize,
        /// Items in the stage.
        expected: usize,
    },
    /// An item sticks out of the container.
    OutOfBounds {
        /// The offending item.
        item: ItemId,
    },
    /// Two items share more volume than tolerated.
    Overlap {
        /// Earlier item in placement order.
        first: ItemId,
        /// Later item in placement order.
        second: ItemId,
        /// Shared volume.
        volume: f64,
    },
}

/// Outcome of a clear check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearReport {
    /// The arrangement fills the container.
    Clear,
    /// The first reason found that it does not.
    NotClear(ClearFailure),
}

impl ClearReport {
    /// Returns true for [`ClearReport::Clear`].
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    /// Returns the failure, if any.
    pub fn failure(&self) -> Option<&ClearFailure> {
        match self {
            Self::Clear => None,
            Self::NotClear(failure) => Some(failure),
        }
    }
}

/// Checks an arrangement and reports the first problem found.
///
/// Items are checked for containment in placement order, then every
/// unordered pair is checked for overlap.
pub fn check_stage(
    container_size: &Vector3<f64>,
    placed_items: &[PlacedItem],
    expected_count: usize,
    tolerance: f64,
) -> ClearReport {
    if placed_items.len() != expected_count {
        return reject(ClearFailure::CountMismatch {
            placed: placed_items.len(),
            expected: expected_count,
        });
    }

    let container = AABB3D::from_center_size(&(container_size * 0.5), container_size);
    let allowed = container.expand(tolerance);

    let bounds: Vec<AABB3D<f64>> = placed_items.iter().map(PlacedItem::bounds).collect();

    for (placed, b) in placed_items.iter().zip(&bounds) {
        if !allowed.contains(b) {
            return reject(ClearFailure::OutOfBounds {
                item: placed.item().id(),
            });
        }
    }

    for i in 0..bounds.len() {
        for j in (i + 1)..bounds.len() {
            let volume = bounds[i].overlap_volume(&bounds[j]);
            if volume > tolerance {
                return reject(ClearFailure::Overlap {
                    first: placed_items[i].item().id(),
                    second: placed_items[j].item().id(),
                    volume,
                });
            }
        }
    }

    ClearReport::Clear
}

/// Returns true if the arrangement is a full, non-overlapping fill.
pub fn is_stage_clear(
    container_size: &Vector3<f64>,
    placed_items: &[PlacedItem],
    expected_count: usize,
    tolerance: f64,
) -> bool {
    check_stage(container_size, placed_items, expected_count, tolerance).is_clear()
}

fn reject(failure: ClearFailure) -> ClearReport {
    log::trace!("Stage not clear: {:?}", failure);
    ClearReport::NotClear(failure)
}

/// Change of the clear state between two checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTransition {
    /// Same state as before.
    Unchanged,
    /// Became clear.
    Cleared,
    /// Was clear and no longer is.
    Uncleared,
}

/// Turns the level-triggered clear boolean into transitions.
///
/// The engine only reports the edges; what to do on them is up to the
/// caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearWatcher {
    was_clear: bool,
}

impl ClearWatcher {
    /// Creates a watcher in the not-clear state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the latest clear state and returns the transition it causes.
    pub fn update(&mut self, is_clear: bool) -> ClearTransition {
        let transition = match (self.was_clear, is_clear) {
            (false, true) => ClearTransition::Cleared,
            (true, false) => ClearTransition::Uncleared,
            _ => ClearTransition::Unchanged,
        };
        self.was_clear = is_clear;
        transition
    }

    /// Returns the last state seen.
    pub fn is_clear(&self) -> bool {
        self.was_clear
    }

    /// Forgets the last state, e.g. when a new round starts.
    pub fn reset(&mut self) {
        self.was_clear = false;
    }
}
