//! Rays

use super::{Dot, Float, Point3f, RayHit, Vector3f, PARALLEL_EPSILON};
use std::fmt::{Debug, Formatter, Result};

/// A Ray
#[derive(Copy, Clone, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction. Need not be normalized.
    d: Vector3f,

    /// Component-wise reciprocal of the direction used by slab tests.
    inv_dir: Vector3f,
}

impl Ray {
    /// Returns a new ray.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self {
            o,
            d,
            inv_dir: d.recip(),
        }
    }

    /// Returns the direction.
    pub fn direction(&self) -> Vector3f {
        self.d
    }

    /// Returns the cached reciprocal of the direction. Zero direction components
    /// give signed infinities.
    pub fn inv_dir(&self) -> Vector3f {
        self.inv_dir
    }

    /// Replace the direction and recompute its reciprocal.
    ///
    /// * `d` - New direction.
    pub fn set_direction(&mut self, d: Vector3f) {
        self.d = d;
        self.inv_dir = d.recip();
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Intersect the ray with the triangle `(p0, p1, p2)` and record the hit if
    /// it is strictly closer than `hit.t`. Back faces, where the normal
    /// `(p1 - p0) x (p2 - p0)` points away from the ray origin, and rays parallel
    /// to the triangle plane never hit.
    ///
    /// Returns `true` if `hit` was updated.
    ///
    /// * `hit` - Closest hit found so far.
    /// * `p0`  - First vertex.
    /// * `p1`  - Second vertex.
    /// * `p2`  - Third vertex.
    pub fn intersect_triangle(&self, hit: &mut RayHit, p0: &Point3f, p1: &Point3f, p2: &Point3f) -> bool {
        let e0 = *p1 - *p0;
        let e2 = *p2 - *p0;

        // Facing test only needs the sign so the normal is left unnormalized;
        // zero-area triangles give a zero normal and are rejected here.
        let n = e0.cross(&e2);
        let q = self.d.cross(&e2);
        let a = e0.dot(&q);
        if n.dot(&self.d) >= 0.0 || a.abs() < PARALLEL_EPSILON {
            return false;
        }

        let s = (self.o - *p0) / a;
        let r = s.cross(&e0);

        let b0 = s.dot(&q);
        let b1 = r.dot(&self.d);
        let b2 = 1.0 - b0 - b1;
        if b0 < 0.0 || b1 < 0.0 || b2 < 0.0 {
            return false;
        }

        let t = e2.dot(&r);
        if t < 0.0 || t >= hit.t {
            return false;
        }

        hit.commit(b0, b1, b2, t);
        true
    }
}

impl Debug for Ray {
    /// Display the ray parameters.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Ray").field("o", &self.o).field("d", &self.d).finish()
    }
}

impl Default for Ray {
    /// Returns a ray at the origin pointing along +x.
    fn default() -> Self {
        Self::new(Point3f::default(), Vector3f::new(1.0, 0.0, 0.0))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
