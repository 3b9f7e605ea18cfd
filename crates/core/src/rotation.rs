//! Discrete quarter-turn rotations for cuboid items.
//!
//! A [`RotationState`] counts 90° turns about the x, y and z axes. The turns
//! are composed in a fixed order: z first, then x, then y. Every state maps
//! to one of the 24 orientations of a cube, but the 64 raw combinations are
//! stored as-is and never canonicalized. Use [`RotationState::is_equivalent`]
//! when two states must be compared physically.

use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use rand::Rng;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of quarter turns that make a full turn.
const TURNS: i32 = 4;

/// Quarter turn about +x.
fn quarter_x() -> Matrix3<i32> {
    Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0)
}

/// Quarter turn about +y.
fn quarter_y() -> Matrix3<i32> {
    Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0)
}

/// Quarter turn about +z.
fn quarter_z() -> Matrix3<i32> {
    Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1)
}

fn power(base: Matrix3<i32>, turns: u8) -> Matrix3<i32> {
    (0..turns).fold(Matrix3::identity(), |acc, _| base * acc)
}

/// Orientation of an item as quarter-turn counts about each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRotation"))]
pub struct RotationState {
    x: u8,
    y: u8,
    z: u8,
}

/// Unnormalized counts as read from serialized data.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRotation {
    x: i32,
    y: i32,
    z: i32,
}

#[cfg(feature = "serde")]
impl From<RawRotation> for RotationState {
    fn from(raw: RawRotation) -> Self {
        Self::new(raw.x, raw.y, raw.z)
    }
}

impl RotationState {
    /// Creates a rotation state, wrapping every count into `0..4`.
    ///
    /// Negative counts wrap around, so `-1` becomes `3`.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            x: x.rem_euclid(TURNS) as u8,
            y: y.rem_euclid(TURNS) as u8,
            z: z.rem_euclid(TURNS) as u8,
        }
    }

    /// The unrotated orientation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Samples each axis count uniformly from `0..4`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0..TURNS),
            rng.gen_range(0..TURNS),
            rng.gen_range(0..TURNS),
        )
    }

    /// Enumerates all 64 raw states, including physically duplicate ones.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TURNS).flat_map(|x| {
            (0..TURNS).flat_map(move |y| (0..TURNS).map(move |z| Self::new(x, y, z)))
        })
    }

    /// Quarter turns about x.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Quarter turns about y.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Quarter turns about z.
    pub fn z(&self) -> u8 {
        self.z
    }

    /// One more quarter turn about x.
    pub fn rotate_x(&self) -> Self {
        Self::new(self.x as i32 + 1, self.y as i32, self.z as i32)
    }

    /// One more quarter turn about y.
    pub fn rotate_y(&self) -> Self {
        Self::new(self.x as i32, self.y as i32 + 1, self.z as i32)
    }

    /// One more quarter turn about z.
    pub fn rotate_z(&self) -> Self {
        Self::new(self.x as i32, self.y as i32, self.z as i32 + 1)
    }

    /// One quarter turn less about x.
    pub fn rotate_x_reverse(&self) -> Self {
        Self::new(self.x as i32 - 1, self.y as i32, self.z as i32)
    }

    /// One quarter turn less about y.
    pub fn rotate_y_reverse(&self) -> Self {
        Self::new(self.x as i32, self.y as i32 - 1, self.z as i32)
    }

    /// One quarter turn less about z.
    pub fn rotate_z_reverse(&self) -> Self {
        Self::new(self.x as i32, self.y as i32, self.z as i32 - 1)
    }

    /// Exact integer rotation matrix (z applied first, then x, then y).
    pub fn matrix(&self) -> Matrix3<i32> {
        power(quarter_y(), self.y) * power(quarter_x(), self.x) * power(quarter_z(), self.z)
    }

    /// The same rotation as a quaternion, for presentation layers.
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        let qx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.x as f64 * FRAC_PI_2);
        let qy = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.y as f64 * FRAC_PI_2);
        let qz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.z as f64 * FRAC_PI_2);
        qy * qx * qz
    }

    /// Returns true if both states describe the same physical orientation.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.matrix() == other.matrix()
    }

    /// Returns the axis-aligned extent of a box of intrinsic `size` under
    /// this rotation.
    ///
    /// Each standard basis vector is rotated; output axis `i` sums
    /// `|component_j| * size[j]` of the rotated basis vector `i`. Quarter
    /// turns only permute and negate axes, so the result is exact.
    pub fn apply(&self, size: &Vector3<f64>) -> Vector3<f64> {
        let m = self.matrix();
        Vector3::from_fn(|i, _| {
            let basis = m.column(i);
            (0..3).map(|j| basis[j].abs() as f64 * size[j]).sum()
        })
    }
}

impl fmt::Display for RotationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rot({}, {}, {})",
            self.x as u32 * 90,
            self.y as u32 * 90,
            self.z as u32 * 90
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn sample_size() -> Vector3<f64> {
        Vector3::new(1.0, 2.0, 3.0)
    }

    #[test]
    fn test_normalization_wraps_negative() {
        let r = RotationState::new(-1, 5, -8);
        assert_eq!((r.x(), r.y(), r.z()), (3, 1, 0));
    }

    #[test]
    fn test_single_axis_extents() {
        let size = sample_size();
        assert_eq!(RotationState::identity().apply(&size), size);
        assert_eq!(RotationState::new(1, 0, 0).apply(&size), Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(RotationState::new(0, 1, 0).apply(&size), Vector3::new(3.0, 2.0, 1.0));
        assert_eq!(RotationState::new(0, 0, 1).apply(&size), Vector3::new(2.0, 1.0, 3.0));
        assert_eq!(RotationState::new(2, 0, 0).apply(&size), size);
    }

    #[test]
    fn test_composed_extent() {
        // z turn first, then x turn
        let r = RotationState::new(1, 0, 1);
        assert_eq!(r.apply(&sample_size()), Vector3::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_reverse_round_trip() {
        let size = Vector3::new(0.7, 1.9, 4.25);
        for r in RotationState::all() {
            assert_eq!(r.rotate_x().rotate_x_reverse(), r);
            assert_eq!(r.rotate_y_reverse().rotate_y(), r);
            assert_eq!(r.rotate_z().rotate_z_reverse(), r);
            assert_eq!(r.rotate_x().rotate_x_reverse().apply(&size), r.apply(&size));
        }
    }

    #[test]
    fn test_four_turns_restore_extent() {
        let size = sample_size();
        let r = RotationState::new(1, 2, 3);
        let around = r.rotate_y().rotate_y().rotate_y().rotate_y();
        assert_eq!(around, r);
        assert_eq!(around.apply(&size), r.apply(&size));
    }

    #[test]
    fn test_apply_preserves_volume() {
        let size = sample_size();
        for r in RotationState::all() {
            let e = r.apply(&size);
            assert_relative_eq!(e.x * e.y * e.z, 6.0);
        }
    }

    #[test]
    fn test_64_states_cover_24_orientations() {
        let states: Vec<_> = RotationState::all().collect();
        assert_eq!(states.len(), 64);

        let distinct: HashSet<Matrix3<i32>> = states.iter().map(|r| r.matrix()).collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn test_equivalence_without_canonicalizing() {
        // Half turns about x and y equal a half turn about z
        let a = RotationState::new(2, 2, 0);
        let b = RotationState::new(0, 0, 2);
        assert_ne!(a, b);
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&RotationState::identity()));
    }

    #[test]
    fn test_quaternion_matches_matrix() {
        for r in RotationState::all() {
            let q = r.to_quaternion();
            let expected = r.matrix().cast::<f64>();
            assert_relative_eq!(*q.to_rotation_matrix().matrix(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(RotationState::random(&mut a), RotationState::random(&mut b));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RotationState::new(1, 0, 3).to_string(), "Rot(90, 0, 270)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_wraps_counts() {
        let r: RotationState = serde_json::from_str(r#"{ "x": 5, "y": -1, "z": 4 }"#).unwrap();
        assert_eq!(r, RotationState::new(1, 3, 0));
        assert_eq!(r.to_string(), "Rot(90, 270, 0)");

        let json = serde_json::to_string(&RotationState::new(1, 2, 3)).unwrap();
        let back: RotationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RotationState::new(1, 2, 3));
    }
}
