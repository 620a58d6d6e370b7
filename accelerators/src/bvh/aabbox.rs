//! Axis-aligned primitive box

use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::scene::*;

/// Tight axis-aligned bounding box over a list of scene triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct AABBox {
    /// Minimum corner.
    pub p_min: Point3f,

    /// Maximum corner.
    pub p_max: Point3f,

    /// Triangles owned by this box in the order they were added.
    primitives: Vec<PrimitiveRef>,
}

impl AABBox {
    /// Returns an empty box with inverted infinite corners and no primitives.
    pub fn new() -> Self {
        Self {
            p_min: point3(INFINITY, INFINITY, INFINITY),
            p_max: point3(-INFINITY, -INFINITY, -INFINITY),
            primitives: vec![],
        }
    }

    /// Record the given triangles and compute the tight bounds of all their
    /// vertices.
    ///
    /// * `scene`      - The scene the triangles belong to.
    /// * `primitives` - The triangles.
    pub fn from_scene<S: Scene>(scene: &S, primitives: Vec<PrimitiveRef>) -> Self {
        let mut b = Self::new();
        for prim in primitives {
            for p in scene.triangle(prim) {
                b.expand(&p);
            }
            b.add(prim);
        }
        b
    }

    /// Append a triangle. Neither deduplicates nor reorders, and leaves the
    /// bounds untouched.
    ///
    /// * `prim` - The triangle.
    pub fn add(&mut self, prim: PrimitiveRef) {
        self.primitives.push(prim);
    }

    /// Grow the bounds to include a point.
    ///
    /// * `p` - The point.
    pub fn expand(&mut self, p: &Point3f) {
        self.p_min = self.p_min.min(p);
        self.p_max = self.p_max.max(p);
    }

    /// Returns the triangles in insertion order.
    pub fn primitives(&self) -> &[PrimitiveRef] {
        &self.primitives
    }

    /// Returns the vector from the minimum to the maximum corner.
    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    /// Returns the axis of largest extent. Ties go to the first axis in
    /// `x, y, z` order.
    pub fn maximum_extent(&self) -> Axis {
        let d = self.diagonal();
        let mut axis = Axis::X;
        for a in [Axis::Y, Axis::Z] {
            if d[a] > d[axis] {
                axis = a;
            }
        }
        axis
    }

    /// Slab test. Returns the entry distance if the ray's line overlaps the box.
    ///
    /// The entry distance may be negative; boxes behind or around the ray
    /// origin are reported as hits. An axis along which the ray is parallel and
    /// whose slab products are undefined (`0 * ∞`) does not constrain the
    /// interval.
    ///
    /// * `ray` - The ray.
    pub fn intersect(&self, ray: &Ray) -> Option<Float> {
        let inv_dir = ray.inv_dir();
        let mut t_min = -INFINITY;
        let mut t_max = INFINITY;

        for axis in Axis::ALL {
            let t1 = (self.p_min[axis] - ray.o[axis]) * inv_dir[axis];
            let t2 = (self.p_max[axis] - ray.o[axis]) * inv_dir[axis];
            // A ray lying in a face plane gives `0 * ∞ = NaN`. Seeding the
            // interval from the x slab and folding NaN into min/max would
            // reject the box when that face is on x but keep it on y or z;
            // skipping the axis keeps the box on every axis.
            if t1.is_nan() || t2.is_nan() {
                continue;
            }

            t_min = max(t_min, min(t1, t2));
            t_max = min(t_max, max(t1, t2));
        }

        if t_max >= t_min {
            Some(t_min)
        } else {
            None
        }
    }
}

impl Default for AABBox {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
