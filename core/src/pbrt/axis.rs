//! Axis

/// Coordinate axis used to pick split directions and index coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
pub fn axis_3d_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_starts_at_x() {
        assert_eq!(Axis::ALL, [Axis::X, Axis::Y, Axis::Z]);
        assert_eq!(Axis::ALL[0], Axis::default());
    }
}
