//! Axis-aligned bounds arithmetic.

use nalgebra::{RealField, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB from its minimum and maximum corners.
    pub fn from_min_max(min: &Vector3<S>, max: &Vector3<S>) -> Self {
        Self::new(min.x, min.y, min.z, max.x, max.y, max.z)
    }

    /// Creates an AABB from a center point and a full size.
    pub fn from_center_size(center: &Vector3<S>, size: &Vector3<S>) -> Self {
        let two = S::one() + S::one();
        let half = size / two;
        Self::from_min_max(&(center - half), &(center + half))
    }

    /// Creates an AABB from its minimum corner and a full size.
    pub fn from_min_size(min: &Vector3<S>, size: &Vector3<S>) -> Self {
        Self::from_min_max(min, &(min + size))
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vector3<S> {
        Vector3::new(self.min_x, self.min_y, self.min_z)
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vector3<S> {
        Vector3::new(self.max_x, self.max_y, self.max_z)
    }

    /// Returns the minimum coordinate along `axis` (0 = x, 1 = y, 2 = z).
    pub fn axis_min(&self, axis: usize) -> S {
        match axis {
            0 => self.min_x,
            1 => self.min_y,
            _ => self.min_z,
        }
    }

    /// Returns the maximum coordinate along `axis` (0 = x, 1 = y, 2 = z).
    pub fn axis_max(&self, axis: usize) -> S {
        match axis {
            0 => self.max_x,
            1 => self.max_y,
            _ => self.max_z,
        }
    }

    /// Returns the width (x dimension) of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the height (y dimension) of the AABB.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the depth (z dimension) of the AABB.
    pub fn depth(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the full size of the AABB.
    pub fn size(&self) -> Vector3<S> {
        Vector3::new(self.width(), self.height(), self.depth())
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.width() * self.height() * self.depth()
    }

    /// Checks if this AABB intersects another AABB (touching counts).
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
            && self.min_z <= other.max_z
            && self.max_z >= other.min_z
    }

    /// Returns the intersection of two AABBs, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        Some(Self {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            min_z: self.min_z.max(other.min_z),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
            max_z: self.max_z.min(other.max_z),
        })
    }

    /// Returns the volume shared by two AABBs. Zero when they are disjoint on
    /// any axis or only touch along a face.
    pub fn overlap_volume(&self, other: &Self) -> S {
        self.intersection(other)
            .map_or_else(S::zero, |shared| shared.volume())
    }

    /// Expands the AABB by a margin on all sides.
    pub fn expand(&self, margin: S) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            min_z: self.min_z - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
            max_z: self.max_z + margin,
        }
    }

    /// Checks if `other` lies entirely inside this AABB (faces may coincide).
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.min_z >= self.min_z
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
            && other.max_z <= self.max_z
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: &Vector3<S>) -> Self {
        Self::from_min_max(&(self.min() + offset), &(self.max() + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb3d_volume() {
        let aabb = AABB3D::new(0.0, 0.0, 0.0, 10.0, 20.0, 30.0);
        assert_relative_eq!(aabb.volume(), 6000.0);
    }

    #[test]
    fn test_from_center_size() {
        let aabb =
            AABB3D::from_center_size(&Vector3::new(1.0, 2.0, 3.0), &Vector3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(aabb.min(), Vector3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(aabb.max(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_overlap_volume() {
        let a = AABB3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let b = AABB3D::new(0.5, 0.0, 0.0, 1.5, 1.0, 1.0);
        assert_relative_eq!(a.overlap_volume(&b), 0.5);

        // Face contact shares no volume
        let c = AABB3D::new(1.0, 0.0, 0.0, 2.0, 1.0, 1.0);
        assert_relative_eq!(a.overlap_volume(&c), 0.0);
        assert!(a.intersects(&c));
        assert_relative_eq!(a.intersection(&c).unwrap().width(), 0.0);

        let far = AABB3D::new(5.0, 5.0, 5.0, 6.0, 6.0, 6.0);
        assert_relative_eq!(a.overlap_volume(&far), 0.0);
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn test_contains_with_expand() {
        let outer = AABB3D::new(0.0, 0.0, 0.0, 2.0, 2.0, 2.0);
        let poking = AABB3D::new(-0.005, 0.0, 0.0, 1.0, 1.0, 1.0);
        assert!(!outer.contains(&poking));
        assert!(outer.expand(0.01).contains(&poking));
    }
}
