//! 3-D Points

use super::{max, min, Axis, Float, Vector3};
use num_traits::Num;
use std::ops::{Add, Index, Sub};

/// A 3-D point; used for triangle vertices, ray origins and box corners.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

/// Creates a new 3-D point.
///
/// * `x`: X-coordinate.
/// * `y`: Y-coordinate.
/// * `z`: Z-coordinate.
pub fn point3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point3 { x, y, z }
}

impl<T: Num + PartialOrd + Copy> Point3<T> {
    /// Returns the component-wise minimum with another point.
    ///
    /// * `other` - The other point.
    pub fn min(&self, other: &Self) -> Self {
        point3(min(self.x, other.x), min(self.y, other.y), min(self.z, other.z))
    }

    /// Returns the component-wise maximum with another point.
    ///
    /// * `other` - The other point.
    pub fn max(&self, other: &Self) -> Self {
        point3(max(self.x, other.x), max(self.y, other.y), max(self.z, other.z))
    }
}

impl<T: Num + Copy> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offset the point by a vector.
    ///
    /// * `v` - The offset.
    fn add(self, v: Vector3<T>) -> Self {
        point3(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Num + Copy> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offset the point by the negated vector.
    ///
    /// * `v` - The offset.
    fn sub(self, v: Vector3<T>) -> Self {
        point3(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: Num + Copy> Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Returns the vector from `other` to this point.
    ///
    /// * `other` - The start point.
    fn sub(self, other: Self) -> Vector3<T> {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> Index<Axis> for Point3<T> {
    type Output = T;

    /// Returns the coordinate along `axis`.
    ///
    /// * `axis` - The axis.
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T> From<Vector3<T>> for Point3<T> {
    /// Returns the point at offset `v` from the origin.
    ///
    /// * `v` - The offset.
    fn from(v: Vector3<T>) -> Self {
        point3(v.x, v.y, v.z)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
