//! Ray hits

use super::{Float, Point3f, Vector3f, INFINITY};

/// Closest ray/triangle hit found so far during a single query. `t` doubles as
/// the pruning bound for the rest of the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Barycentric weight of the second vertex.
    pub b0: Float,

    /// Barycentric weight of the third vertex.
    pub b1: Float,

    /// Barycentric weight of the first vertex.
    pub b2: Float,

    /// Distance along the ray in units of the ray direction.
    pub t: Float,
}

impl RayHit {
    /// Returns a new hit record.
    ///
    /// * `b0` - Barycentric weight of the second vertex.
    /// * `b1` - Barycentric weight of the third vertex.
    /// * `b2` - Barycentric weight of the first vertex.
    /// * `t`  - Distance along the ray.
    pub fn new(b0: Float, b1: Float, b2: Float, t: Float) -> Self {
        Self { b0, b1, b2, t }
    }

    /// Returns a hit record bounded at `t_max`; only hits closer than `t_max`
    /// will be recorded.
    ///
    /// * `t_max` - Maximum distance.
    pub fn with_t_max(t_max: Float) -> Self {
        Self::new(0.0, 0.0, 0.0, t_max)
    }

    /// Returns true if a hit was recorded. Only meaningful for records that
    /// started at infinity.
    pub fn is_hit(&self) -> bool {
        self.t < INFINITY
    }

    /// Forget the recorded hit so the record can be reused for another query.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overwrite all fields at once.
    pub(crate) fn commit(&mut self, b0: Float, b1: Float, b2: Float, t: Float) {
        self.b0 = b0;
        self.b1 = b1;
        self.b2 = b2;
        self.t = t;
    }

    /// Returns the hit point on the triangle `(p0, p1, p2)` that produced this hit.
    ///
    /// * `p0` - First vertex.
    /// * `p1` - Second vertex.
    /// * `p2` - Third vertex.
    pub fn hit_position(&self, p0: &Point3f, p1: &Point3f, p2: &Point3f) -> Point3f {
        Point3f::from(self.b2 * Vector3f::from(*p0) + self.b0 * Vector3f::from(*p1) + self.b1 * Vector3f::from(*p2))
    }
}

impl Default for RayHit {
    /// Returns an empty hit record with `t` at infinity.
    fn default() -> Self {
        Self::with_t_max(INFINITY)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
