//! Item definitions and their placements.

use crate::error::{Error, Result};
use crate::rotation::RotationState;
use crate::transform::AABB3D;
use nalgebra::Vector3;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of an item, unique within one stage.
pub type ItemId = u32;

/// Display color of an item. Cosmetic only; the engine carries it through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel in `[0, 1]`.
    pub r: f32,
    /// Green channel in `[0, 1]`.
    pub g: f32,
    /// Blue channel in `[0, 1]`.
    pub b: f32,
}

impl Color {
    /// Creates a color from RGB channels.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Converts hue, saturation and value (all in `[0, 1]`) to RGB.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        // rem_euclid rounds tiny negative hues up to exactly 1.0
        let sector = h.floor().min(5.0);
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u32 {
            0 => Self::new(v, t, p),
            1 => Self::new(q, v, p),
            2 => Self::new(p, v, t),
            3 => Self::new(p, q, v),
            4 => Self::new(t, p, v),
            _ => Self::new(v, p, q),
        }
    }
}

/// Immutable definition of one puzzle piece.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemData {
    id: ItemId,
    /// Intrinsic (unrotated) size.
    size: Vector3<f64>,
    color: Color,
    /// Orientation the item is first shown in.
    initial_rotation: RotationState,
}

impl ItemData {
    /// Creates a new item definition.
    pub fn new(
        id: ItemId,
        size: Vector3<f64>,
        color: Color,
        initial_rotation: RotationState,
    ) -> Self {
        Self {
            id,
            size,
            color,
            initial_rotation,
        }
    }

    /// Returns the item id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the intrinsic size.
    pub fn size(&self) -> &Vector3<f64> {
        &self.size
    }

    /// Returns the display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the initial display orientation.
    pub fn initial_rotation(&self) -> RotationState {
        self.initial_rotation
    }

    /// Returns the intrinsic volume.
    pub fn volume(&self) -> f64 {
        self.size.x * self.size.y * self.size.z
    }

    /// Returns the shortest intrinsic edge.
    pub fn min_edge(&self) -> f64 {
        self.size.min()
    }

    /// Checks that every edge is positive.
    pub fn validate(&self) -> Result<()> {
        if self.size.iter().any(|&e| e <= 0.0 || !e.is_finite()) {
            return Err(Error::InvalidItem(format!(
                "All dimensions for item #{} must be positive, got {:?}",
                self.id,
                self.size.as_slice()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item#{} Size=({:.3}, {:.3}, {:.3}) {}",
            self.id, self.size.x, self.size.y, self.size.z, self.initial_rotation
        )
    }
}

/// An item put into the container.
///
/// `position` is the item's minimum corner in the container-local frame,
/// where the container's own minimum corner is the origin. A placement is
/// never edited in place; move an item by removing and placing it again.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    item: Arc<ItemData>,
    position: Vector3<f64>,
    rotation: RotationState,
}

impl PlacedItem {
    /// Creates a new placement.
    pub fn new(item: Arc<ItemData>, position: Vector3<f64>, rotation: RotationState) -> Self {
        Self {
            item,
            position,
            rotation,
        }
    }

    /// Returns the placed item definition.
    pub fn item(&self) -> &Arc<ItemData> {
        &self.item
    }

    /// Returns the minimum corner.
    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Returns the current rotation.
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Extent of the item under its current rotation.
    pub fn effective_size(&self) -> Vector3<f64> {
        self.rotation.apply(self.item.size())
    }

    /// Axis-aligned bounds in the container-local frame.
    pub fn bounds(&self) -> AABB3D<f64> {
        let size = self.effective_size();
        let center = self.position + size * 0.5;
        AABB3D::from_center_size(&center, &size)
    }

    /// Returns true if this placement refers to exactly `item` (same
    /// allocation, not merely an equal definition).
    pub fn is_for(&self, item: &Arc<ItemData>) -> bool {
        Arc::ptr_eq(&self.item, item)
    }
}

impl fmt::Display for PlacedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placed Item#{} at ({:.3}, {:.3}, {:.3}) {}",
            self.item.id(),
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation
        )
    }
}
