//! Stage definition: one container and the items that exactly fill it.

use crate::error::{Error, Result};
use crate::item::{ItemData, ItemId};
use nalgebra::Vector3;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative volume error tolerated between the items and the container.
pub const VOLUME_TOLERANCE: f64 = 1e-4;

/// Slack allowed when checking the minimum edge of generated items.
pub const EDGE_EPSILON: f64 = 1e-6;

/// Definition of one play round. Immutable once generated.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StageData {
    container_size: Vector3<f64>,
    items: Vec<Arc<ItemData>>,
    /// Time allowed to clear the stage, in seconds.
    time_limit_secs: f64,
}

impl StageData {
    /// Creates a stage from a container size, its items and a time limit.
    pub fn new(container_size: Vector3<f64>, items: Vec<ItemData>, time_limit_secs: f64) -> Self {
        Self {
            container_size,
            items: items.into_iter().map(Arc::new).collect(),
            time_limit_secs,
        }
    }

    /// Returns the container size.
    pub fn container_size(&self) -> &Vector3<f64> {
        &self.container_size
    }

    /// Returns the items in generation order.
    pub fn items(&self) -> &[Arc<ItemData>] {
        &self.items
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Looks up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Arc<ItemData>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns true if `item` is one of this stage's own item allocations.
    pub fn owns(&self, item: &Arc<ItemData>) -> bool {
        self.items.iter().any(|own| Arc::ptr_eq(own, item))
    }

    /// Returns the time limit in seconds.
    pub fn time_limit_secs(&self) -> f64 {
        self.time_limit_secs
    }

    /// Returns the container volume.
    pub fn container_volume(&self) -> f64 {
        self.container_size.x * self.container_size.y * self.container_size.z
    }

    /// Returns the summed intrinsic volume of all items.
    pub fn item_volume(&self) -> f64 {
        self.items.iter().map(|item| item.volume()).sum()
    }

    /// Checks the generation invariants: every item is well formed, no edge
    /// is shorter than `min_edge_size`, ids are unique and the item volumes
    /// add up to the container volume.
    pub fn validate(&self, min_edge_size: f64) -> Result<()> {
        if self.container_size.iter().any(|&e| e <= 0.0) {
            return Err(Error::InvalidStage(
                "All container dimensions must be positive".into(),
            ));
        }

        for (i, item) in self.items.iter().enumerate() {
            item.validate()?;

            if item.min_edge() < min_edge_size - EDGE_EPSILON {
                return Err(Error::InvalidStage(format!(
                    "Item #{} has an edge of {:.6}, below the minimum {:.6}",
                    item.id(),
                    item.min_edge(),
                    min_edge_size
                )));
            }

            if self.items[..i].iter().any(|other| other.id() == item.id()) {
                return Err(Error::InvalidStage(format!(
                    "Item id {} appears more than once",
                    item.id()
                )));
            }
        }

        let container = self.container_volume();
        let error = (self.item_volume() - container).abs() / container;
        if error > VOLUME_TOLERANCE {
            return Err(Error::InvalidStage(format!(
                "Item volume {:.6} does not match container volume {:.6}",
                self.item_volume(),
                container
            )));
        }

        Ok(())
    }
}

impl fmt::Display for StageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stage: Box=({:.3}, {:.3}, {:.3}), Items={}, TimeLimit={:.1}s",
            self.container_size.x,
            self.container_size.y,
            self.container_size.z,
            self.items.len(),
            self.time_limit_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Color;
    use crate::rotation::RotationState;
    use approx::assert_relative_eq;

    fn item(id: ItemId, x: f64, y: f64, z: f64) -> ItemData {
        ItemData::new(id, Vector3::new(x, y, z), Color::default(), RotationState::identity())
    }

    fn halves() -> StageData {
        StageData::new(
            Vector3::new(2.0, 1.0, 1.0),
            vec![item(0, 1.0, 1.0, 1.0), item(1, 1.0, 1.0, 1.0)],
            60.0,
        )
    }

    #[test]
    fn test_volumes() {
        let stage = halves();
        assert_relative_eq!(stage.container_volume(), 2.0);
        assert_relative_eq!(stage.item_volume(), 2.0);
        assert!(stage.validate(0.5).is_ok());
    }

    #[test]
    fn test_lookup_and_ownership() {
        let stage = halves();
        let first = stage.item(0).unwrap().clone();
        assert!(stage.owns(&first));
        assert!(!stage.owns(&Arc::new(item(0, 1.0, 1.0, 1.0))));
        assert!(stage.item(9).is_none());
    }

    #[test]
    fn test_volume_mismatch_rejected() {
        let stage = StageData::new(Vector3::new(2.0, 1.0, 1.0), vec![item(0, 1.0, 1.0, 1.0)], 60.0);
        assert!(stage.validate(0.5).is_err());
    }

    #[test]
    fn test_min_edge_rejected() {
        let stage = StageData::new(
            Vector3::new(1.0, 1.0, 1.0),
            vec![item(0, 0.2, 1.0, 1.0), item(1, 0.8, 1.0, 1.0)],
            60.0,
        );
        assert!(stage.validate(0.1).is_ok());
        assert!(stage.validate(0.5).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let stage = StageData::new(
            Vector3::new(2.0, 1.0, 1.0),
            vec![item(4, 1.0, 1.0, 1.0), item(4, 1.0, 1.0, 1.0)],
            60.0,
        );
        assert!(stage.validate(0.5).is_err());
    }
}
