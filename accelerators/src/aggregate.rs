//! Aggregates

use crate::{BVHAccel, LinearAccel};
use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::scene::*;
use std::fmt;

/// Ray queries over all triangles of a scene `S`.
pub trait Aggregate<S: Scene> {
    /// Returns the closest triangle hit strictly closer than `hit.t` and
    /// updates `hit`. Returns `None` and leaves `hit` unchanged otherwise.
    ///
    /// * `scene` - The scene the aggregate was built over.
    /// * `ray`   - The ray.
    /// * `hit`   - Closest hit found so far.
    fn intersect(&self, scene: &S, ray: &Ray, hit: &mut RayHit) -> Option<PrimitiveRef>;

    /// Returns true if the ray hits any triangle at `0 <= t < t_max`.
    ///
    /// * `scene` - The scene the aggregate was built over.
    /// * `ray`   - The ray.
    /// * `t_max` - Maximum distance.
    fn intersect_p(&self, scene: &S, ray: &Ray, t_max: Float) -> bool;
}

/// Boxed `Aggregate` chosen at run time.
pub type BoxAggregate<S> = Box<dyn Aggregate<S> + Send + Sync>;

/// Selects an aggregate implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AcceleratorKind {
    /// Median-split bounding volume hierarchy.
    #[default]
    BVH,

    /// Test every triangle.
    Linear,
}

impl AcceleratorKind {
    /// Build the selected aggregate over a scene.
    ///
    /// * `scene` - The scene.
    pub fn build<S: Scene>(self, scene: &S) -> BoxAggregate<S> {
        match self {
            Self::BVH => Box::new(BVHAccel::new(scene)),
            Self::Linear => Box::new(LinearAccel::new(scene)),
        }
    }
}

impl From<&str> for AcceleratorKind {
    /// Returns the accelerator for a name. Unknown names fall back to the BVH.
    ///
    /// * `name` - `bvh` or `linear`.
    fn from(name: &str) -> Self {
        match name {
            "bvh" => Self::BVH,
            "linear" => Self::Linear,
            other => {
                warn!("Accelerator '{}' unknown.  Using 'bvh'.", other);
                Self::BVH
            }
        }
    }
}

impl fmt::Display for AcceleratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BVH => write!(f, "bvh"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> MeshScene {
        let p = vec![point3(2.0, 0.0, 0.0), point3(2.0, 0.0, 1.0), point3(2.0, 1.0, 0.0)];
        MeshScene::from(vec![TriangleMesh::new(p, vec![[0, 1, 2]]).expect("valid mesh")])
    }

    #[test]
    fn names_round_trip() {
        for kind in [AcceleratorKind::BVH, AcceleratorKind::Linear] {
            assert_eq!(AcceleratorKind::from(kind.to_string().as_str()), kind);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_bvh() {
        assert_eq!(AcceleratorKind::from("kdtree"), AcceleratorKind::BVH);
        assert_eq!(AcceleratorKind::default(), AcceleratorKind::BVH);
    }

    #[test]
    fn built_aggregates_agree() {
        let scene = scene();
        let ray = Ray::new(point3(0.0, 0.25, 0.25), Vector3::new(1.0, 0.0, 0.0));

        for kind in [AcceleratorKind::BVH, AcceleratorKind::Linear] {
            let aggregate = kind.build(&scene);
            let mut hit = RayHit::default();
            assert_eq!(aggregate.intersect(&scene, &ray, &mut hit), Some(PrimitiveRef::new(0, 0)));
            assert_eq!(hit.t, 2.0);
            assert!(aggregate.intersect_p(&scene, &ray, 3.0));
            assert!(!aggregate.intersect_p(&scene, &ray, 1.0));
        }
    }
}
