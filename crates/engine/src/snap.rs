//! Snapping assistance for manual placement.
//!
//! Dragged positions are expressed in the display frame, where the container
//! center is the origin. Placed items live in the container-local frame
//! (container minimum corner at the origin) and are shifted by half the
//! container size before comparing faces.

use boxfill_core::item::PlacedItem;
use nalgebra::Vector3;

/// Snap distance used by callers that have no setting of their own.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.3;

/// Closest snap target seen so far on one axis.
struct AxisSnap {
    best_dist: f64,
    best_shift: f64,
}

impl AxisSnap {
    fn new(threshold: f64) -> Self {
        Self {
            best_dist: threshold,
            best_shift: 0.0,
        }
    }

    /// Considers moving `item_face` onto `target`. Only strictly closer
    /// targets replace the current best, so the first one wins ties.
    fn consider(&mut self, item_face: f64, target: f64) {
        let dist = (item_face - target).abs();
        if dist >= self.best_dist {
            return;
        }
        self.best_dist = dist;
        self.best_shift = target - item_face;
    }
}

/// Nudges a dragged item's center so its faces sit flush with the nearest
/// container wall or placed item face.
///
/// Each axis is handled on its own: the closest target within `threshold`
/// wins, and an axis without one is left as is. Walls are tried before
/// items, and items in the order given.
pub fn snap(
    center: &Vector3<f64>,
    item_extent: &Vector3<f64>,
    container_size: &Vector3<f64>,
    placed_items: &[PlacedItem],
    threshold: f64,
) -> Vector3<f64> {
    let half_item = item_extent * 0.5;
    let offset = -container_size * 0.5;
    let others: Vec<_> = placed_items
        .iter()
        .map(|p| p.bounds().translated(&offset))
        .collect();

    Vector3::from_fn(|axis, _| {
        let item_min = center[axis] - half_item[axis];
        let item_max = center[axis] + half_item[axis];
        let mut best = AxisSnap::new(threshold);

        let wall = container_size[axis] * 0.5;
        best.consider(item_min, -wall);
        best.consider(item_max, wall);

        for other in &others {
            best.consider(item_max, other.axis_min(axis));
            best.consider(item_min, other.axis_max(axis));
        }

        center[axis] + best.best_shift
    })
}

/// Height (y) at which the center of an item dropped at `center` comes to
/// rest, in the container-local frame.
///
/// The item rests on the highest top face among placed items whose x/z
/// footprint overlaps its own, or on the floor at zero.
pub fn drop_height(
    center: &Vector3<f64>,
    item_extent: &Vector3<f64>,
    placed_items: &[PlacedItem],
) -> f64 {
    let half_item = item_extent * 0.5;

    let floor = placed_items
        .iter()
        .map(PlacedItem::bounds)
        .filter(|b| {
            let overlap_x = center.x + half_item.x > b.min_x && center.x - half_item.x < b.max_x;
            let overlap_z = center.z + half_item.z > b.min_z && center.z - half_item.z < b.max_z;
            overlap_x && overlap_z
        })
        .map(|b| b.max_y)
        .fold(0.0_f64, f64::max);

    floor + half_item.y
}

/// Converts a display-frame center to the container-local minimum corner
/// used for placement.
pub fn center_to_corner(
    center: &Vector3<f64>,
    item_extent: &Vector3<f64>,
    container_size: &Vector3<f64>,
) -> Vector3<f64> {
    center - item_extent * 0.5 + container_size * 0.5
}

/// Converts a container-local minimum corner to the display-frame center.
pub fn corner_to_center(
    corner: &Vector3<f64>,
    item_extent: &Vector3<f64>,
    container_size: &Vector3<f64>,
) -> Vector3<f64> {
    corner + item_extent * 0.5 - container_size * 0.5
}
