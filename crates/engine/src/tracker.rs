//! Live placement state of one stage.

use crate::clear::{check_stage, ClearReport};
use boxfill_core::item::{ItemData, ItemId, PlacedItem};
use boxfill_core::rotation::RotationState;
use boxfill_core::stage::StageData;
use nalgebra::Vector3;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used by [`PlacementTracker::is_clear`] unless overridden.
pub const DEFAULT_CLEAR_TOLERANCE: f64 = 0.01;

/// Why a placement command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// The item does not belong to this tracker's stage.
    ForeignItem,
    /// The item is already placed; remove it first.
    AlreadyPlaced,
}

/// Result of a placement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlacementEvent {
    /// The item was added.
    Placed(ItemId),
    /// The item was taken out.
    Removed(ItemId),
    /// Nothing to do; the item was not placed.
    Unchanged,
    /// The command was refused and nothing changed.
    Rejected(ItemId, RejectReason),
}

/// The set of placed items for one play round.
///
/// Items are matched by identity: the `Arc<ItemData>` handed out by the
/// stage, not an equal copy. The tracker never drops an existing placement
/// on its own; moving an item is [`PlacementTracker::replace`], or an
/// explicit remove followed by a place.
#[derive(Debug, Clone)]
pub struct PlacementTracker {
    stage: Arc<StageData>,
    placed: Vec<PlacedItem>,
    tolerance: f64,
}

impl PlacementTracker {
    /// Creates an empty tracker for a stage.
    pub fn new(stage: Arc<StageData>) -> Self {
        Self {
            placed: Vec::with_capacity(stage.item_count()),
            stage,
            tolerance: DEFAULT_CLEAR_TOLERANCE,
        }
    }

    /// Sets the clear-check tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the stage being played.
    pub fn stage(&self) -> &Arc<StageData> {
        &self.stage
    }

    /// Returns the clear-check tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Places `item` with its minimum corner at `position`.
    pub fn place(
        &mut self,
        item: &Arc<ItemData>,
        position: Vector3<f64>,
        rotation: RotationState,
    ) -> PlacementEvent {
        if !self.stage.owns(item) {
            return PlacementEvent::Rejected(item.id(), RejectReason::ForeignItem);
        }
        if self.find_by_data(item).is_some() {
            return PlacementEvent::Rejected(item.id(), RejectReason::AlreadyPlaced);
        }

        self.placed.push(PlacedItem::new(item.clone(), position, rotation));
        PlacementEvent::Placed(item.id())
    }

    /// Takes `item` out. Removing an item that is not placed does nothing.
    pub fn remove(&mut self, item: &Arc<ItemData>) -> PlacementEvent {
        match self.placed.iter().position(|p| p.is_for(item)) {
            Some(index) => {
                self.placed.remove(index);
                PlacementEvent::Removed(item.id())
            }
            None => PlacementEvent::Unchanged,
        }
    }

    /// Removes `item` if placed, then places it at the new position.
    pub fn replace(
        &mut self,
        item: &Arc<ItemData>,
        position: Vector3<f64>,
        rotation: RotationState,
    ) -> PlacementEvent {
        if !self.stage.owns(item) {
            return PlacementEvent::Rejected(item.id(), RejectReason::ForeignItem);
        }
        self.remove(item);
        self.place(item, position, rotation)
    }

    /// Finds the placement of `item`.
    pub fn find_by_data(&self, item: &Arc<ItemData>) -> Option<&PlacedItem> {
        self.placed.iter().find(|p| p.is_for(item))
    }

    /// Returns true if `item` is placed.
    pub fn is_placed(&self, item: &Arc<ItemData>) -> bool {
        self.find_by_data(item).is_some()
    }

    /// Returns the placements in the order they were made.
    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Returns the items not yet placed, in stage order.
    pub fn remaining_items(&self) -> impl Iterator<Item = &Arc<ItemData>> + '_ {
        self.stage
            .items()
            .iter()
            .filter(move |item| !self.is_placed(item))
    }

    /// Returns the summed volume of the placed items.
    pub fn filled_volume(&self) -> f64 {
        self.placed.iter().map(|p| p.item().volume()).sum()
    }

    /// Returns the placed volume as a fraction of the container volume.
    pub fn fill_ratio(&self) -> f64 {
        let container = self.stage.container_volume();
        if container <= 0.0 {
            return 0.0;
        }
        self.filled_volume() / container
    }

    /// Checks the current arrangement and reports why it is not clear.
    pub fn check(&self) -> ClearReport {
        check_stage(
            self.stage.container_size(),
            &self.placed,
            self.stage.item_count(),
            self.tolerance,
        )
    }

    /// Returns true if the current arrangement clears the stage.
    pub fn is_clear(&self) -> bool {
        self.check().is_clear()
    }

    /// Removes every placement.
    pub fn reset(&mut self) {
        self.placed.clear();
    }
}
