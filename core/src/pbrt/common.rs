//! Common

use num_traits::Num;

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// Epsilon below which a ray is considered parallel to a triangle.
pub const PARALLEL_EPSILON: Float = 0.00001;

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn min_max_with_infinity() {
        assert_eq!(min(INFINITY, 1.0), 1.0);
        assert_eq!(max(-INFINITY, 1.0), 1.0);
        assert_eq!(min(-INFINITY, INFINITY), -INFINITY);
        assert_eq!(max(-INFINITY, INFINITY), INFINITY);
    }

    proptest! {
        #[test]
        fn min_max_i32(a in -100..100i32, b in -100..100i32) {
            prop_assert_eq!(min(a, b), a.min(b));
            prop_assert_eq!(max(a, b), a.max(b));
        }
    }
}
