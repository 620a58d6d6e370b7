//! 3-D Vectors

use super::{Axis, Float, Point3};
use num_traits::{Num, Zero};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Dot product trait.
pub trait Dot<V> {
    type Output: Num + Copy;

    /// Returns the dot product.
    ///
    /// * `other` - The other vector.
    fn dot(&self, other: &V) -> Self::Output;
}

/// A 3-D vector; used for ray directions, triangle edges and normals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

impl<T: Num + Copy> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        *self / self.length()
    }

    /// Returns the cross product with another vector. For triangle edges
    /// `(p1 - p0) x (p2 - p0)` this is the face normal.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the component-wise reciprocal. For floating point types a zero
    /// component maps to an infinity carrying the zero's sign.
    pub fn recip(&self) -> Self {
        Self::new(T::one() / self.x, T::one() / self.y, T::one() / self.z)
    }
}

impl<T: Num + Copy> Dot<Vector3<T>> for Vector3<T> {
    type Output = T;

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Num + Copy> Add for Vector3<T> {
    type Output = Self;

    /// Component-wise sum.
    ///
    /// * `other` - The vector to add.
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num + Copy> Sub for Vector3<T> {
    type Output = Self;

    /// Component-wise difference.
    ///
    /// * `other` - The vector to subtract.
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f)
    }
}

impl Mul<Vector3f> for Float {
    type Output = Vector3f;

    /// Scale the vector; used to weight vertices by barycentrics.
    ///
    /// * `v` - The vector.
    fn mul(self, v: Vector3f) -> Vector3f {
        v * self
    }
}

impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector by `1 / f`.
    ///
    /// * `f` - The divisor; must not be zero.
    fn div(self, f: T) -> Self {
        debug_assert!(!f.is_zero());

        self * (T::one() / f)
    }
}

impl<T: Num + Copy + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    /// Reverse the vector.
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Index<Axis> for Vector3<T> {
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

impl<T> From<Point3<T>> for Vector3<T> {
    /// Returns the vector from the origin to `p`.
    ///
    /// * `p` - The point.
    fn from(p: Point3<T>) -> Self {
        Self { x: p.x, y: p.y, z: p.z }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::axis_3d_strategy;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cross_of_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&x), -z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
    }

    #[test]
    fn recip_zero_component_is_signed_infinity() {
        let v = Vector3::new(2.0_f32, 0.0, -0.0).recip();
        assert_eq!(v.x, 0.5);
        assert_eq!(v.y, f32::INFINITY);
        assert_eq!(v.z, f32::NEG_INFINITY);
    }

    #[test]
    fn normalize_has_unit_length() {
        let v = Vector3::new(3.0_f32, 0.0, -4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.normalize(), Vector3::new(0.6, 0.0, -0.8));
    }

    prop_range!(range_f32, f32, -100.0..100.0f32);

    prop_vector3!(
        vector3_f32,
        f32,
        -100.0..100.0f32,
        -100.0..100.0f32,
        -100.0..100.0f32
    );

    proptest! {
        #[test]
        fn dot_f32(v1 in vector3_f32(), v2 in vector3_f32()) {
            prop_assert_eq!(v1.dot(&v2), v1.x * v2.x + v1.y * v2.y + v1.z * v2.z);
        }

        #[test]
        fn cross_is_orthogonal_f32(v1 in vector3_f32(), v2 in vector3_f32()) {
            let c = v1.cross(&v2);
            let tolerance = 1e-3 * (1.0 + v1.length() * v2.length() * v1.length().max(v2.length()));
            prop_assert!(c.dot(&v1).abs() <= tolerance);
            prop_assert!(c.dot(&v2).abs() <= tolerance);
        }

        #[test]
        fn mul_f32(v in vector3_f32(), f in range_f32()) {
            let expected = Vector3::new(v.x * f, v.y * f, v.z * f);
            prop_assert_eq!(v * f, expected);
            prop_assert_eq!(f * v, expected);
        }

        #[test]
        fn index_f32(v in vector3_f32(), axis in axis_3d_strategy()) {
            let expected = match axis {
                Axis::X => v.x,
                Axis::Y => v.y,
                Axis::Z => v.z,
            };
            prop_assert_eq!(v[axis], expected);
        }
    }
}
