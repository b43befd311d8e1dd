//! Axis-aligned bounding boxes and penetration depths.
//!
//! All collision in the engine is box-versus-box: the sphere is approximated
//! by the cube that encloses it, and every obstacle or floor is an [`Aabb`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its minimum and maximum corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Corner with the smallest coordinate on every axis.
    pub min: Vec3,
    /// Corner with the largest coordinate on every axis.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from explicit corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box centred on `center` with the given edge lengths.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use parallax::Aabb;
    /// let floor = Aabb::from_center_size(Vec3::new(4.0, 0.0, 0.0), Vec3::new(4.0, 0.5, 10.0));
    /// assert_eq!(floor.min, Vec3::new(2.0, -0.25, -5.0));
    /// assert_eq!(floor.max, Vec3::new(6.0, 0.25, 5.0));
    /// ```
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Creates the cube enclosing a sphere.
    #[must_use]
    pub fn around_sphere(center: Vec3, radius: f32) -> Self {
        let extent = Vec3::splat(radius);
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    /// Centre point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths of the box.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns `true` when every edge has positive, finite length.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let size = self.size();
        size.is_finite() && size.cmpgt(Vec3::ZERO).all()
    }

    /// Strict overlap test on the X axis.
    #[must_use]
    pub fn overlaps_x(&self, other: &Self) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// Strict overlap test on the Y axis.
    #[must_use]
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }

    /// Strict overlap test on the Z axis.
    #[must_use]
    pub fn overlaps_z(&self, other: &Self) -> bool {
        self.max.z > other.min.z && self.min.z < other.max.z
    }

    /// Per-face penetration depths of `self` into `other`.
    ///
    /// Depths are only meaningful when the boxes overlap; callers test
    /// overlap first.
    #[must_use]
    pub fn penetration(&self, other: &Self) -> Penetration {
        Penetration {
            left: self.max.x - other.min.x,
            right: other.max.x - self.min.x,
            bottom: self.max.y - other.min.y,
            top: other.max.y - self.min.y,
            back: self.max.z - other.min.z,
            front: other.max.z - self.min.z,
        }
    }
}

/// One-sided penetration depths of a moving box into a static one.
///
/// Each field is the distance the moving box must travel to leave the
/// static box through the named face: `left` pushes it out past the static
/// box's minimum X face, `top` past its maximum Y face, and so on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Penetration {
    /// Entered from the low X side.
    pub left: f32,
    /// Entered from the high X side.
    pub right: f32,
    /// Entered from below.
    pub bottom: f32,
    /// Entered from above.
    pub top: f32,
    /// Entered from the low Z side.
    pub back: f32,
    /// Entered from the high Z side.
    pub front: f32,
}

impl Penetration {
    /// Smallest depth on the X axis.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.left.min(self.right)
    }

    /// Smallest depth on the Y axis.
    #[must_use]
    pub fn min_y(&self) -> f32 {
        self.bottom.min(self.top)
    }

    /// Smallest depth on the Z axis.
    #[must_use]
    pub fn min_z(&self) -> f32 {
        self.back.min(self.front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn unit_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::from_center_size(Vec3::new(x, y, z), Vec3::ONE)
    }

    #[rstest]
    #[case::identical(unit_at(0.0, 0.0, 0.0), true)]
    #[case::touching_faces(unit_at(1.0, 0.0, 0.0), false)]
    #[case::partial(unit_at(0.5, 0.5, 0.5), true)]
    #[case::apart(unit_at(0.0, 3.0, 0.0), false)]
    fn overlap_is_strict(#[case] other: Aabb, #[case] expected: bool) {
        let base = unit_at(0.0, 0.0, 0.0);
        let all = base.overlaps_x(&other) && base.overlaps_y(&other) && base.overlaps_z(&other);
        assert_eq!(all, expected);
    }

    #[test]
    fn penetration_measures_each_face() {
        let moving = Aabb::new(Vec3::new(0.75, 0.0, 0.0), Vec3::new(1.25, 0.5, 0.5));
        let fixed = Aabb::new(Vec3::new(1.0, 0.25, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let depth = moving.penetration(&fixed);
        assert_eq!(depth.left, 0.25);
        assert_eq!(depth.right, 1.25);
        assert_eq!(depth.bottom, 0.25);
        assert_eq!(depth.top, 1.0);
        assert_eq!(depth.min_x(), 0.25);
        assert_eq!(depth.min_z(), 0.5);
    }

    #[rstest]
    #[case::flat(Vec3::new(1.0, 0.0, 1.0), false)]
    #[case::negative(Vec3::new(1.0, -1.0, 1.0), false)]
    #[case::solid(Vec3::new(4.0, 0.5, 10.0), true)]
    fn validity_requires_positive_extent(#[case] size: Vec3, #[case] expected: bool) {
        assert_eq!(Aabb::from_center_size(Vec3::ZERO, size).is_valid(), expected);
    }
}
