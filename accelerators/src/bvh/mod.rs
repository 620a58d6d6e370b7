//! Bounding Volume Hierarchy.

use crate::Aggregate;
use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::scene::*;

mod aabbox;
mod node;
mod split;

pub use aabbox::*;
pub use node::*;

/// Median-split Bounding Volume Hierarchy Accelerator. The tree is built once
/// over a scene and only read afterwards; it borrows nothing from the scene, so
/// every query takes the scene it was built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BVHAccel {
    /// Root of the tree. `None` for a scene without triangles.
    root: Option<BVHNode>,

    /// Counters gathered during the build.
    stats: BuildStats,
}

impl BVHAccel {
    /// Build a BVH over every triangle of a scene, visited mesh by mesh.
    ///
    /// * `scene` - The scene.
    pub fn new<S: Scene>(scene: &S) -> Self {
        let primitives = scene.primitive_refs();
        let n_primitives = primitives.len();
        if n_primitives == 0 {
            warn!("BVH created for a scene without triangles; every ray will miss.");
            return Self::default();
        }

        let mut stats = BuildStats::default();
        let root = BVHNode::build(scene, primitives, 0, &mut stats);

        info!(
            "BVH created with {} nodes ({} leaves) for {} primitives, max depth {}",
            stats.total_nodes, stats.leaf_nodes, n_primitives, stats.max_depth
        );

        Self {
            root: Some(root),
            stats,
        }
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&BVHNode> {
        self.root.as_ref()
    }

    /// Returns the number of nodes.
    pub fn total_nodes(&self) -> usize {
        self.stats.total_nodes
    }

    /// Returns the number of leaves.
    pub fn leaf_nodes(&self) -> usize {
        self.stats.leaf_nodes
    }

    /// Returns the depth of the deepest node.
    pub fn max_depth(&self) -> usize {
        self.stats.max_depth
    }

    /// Returns the closest triangle hit strictly closer than `hit.t` and
    /// updates `hit` with its barycentrics and distance. If nothing closer is
    /// hit `hit` is left unchanged and `None` is returned.
    ///
    /// * `scene` - The scene the tree was built over.
    /// * `ray`   - The ray.
    /// * `hit`   - Closest hit found so far; start from `RayHit::default()`.
    pub fn intersect<S: Scene>(&self, scene: &S, ray: &Ray, hit: &mut RayHit) -> Option<PrimitiveRef> {
        let root = self.root.as_ref()?;
        let t_entry = root.bounds().intersect(ray)?;
        root.intersect(scene, ray, hit, t_entry)
    }

    /// Returns true if the ray hits any triangle at `0 <= t < t_max`.
    ///
    /// * `scene` - The scene the tree was built over.
    /// * `ray`   - The ray.
    /// * `t_max` - Maximum distance.
    pub fn intersect_p<S: Scene>(&self, scene: &S, ray: &Ray, t_max: Float) -> bool {
        self.root.as_ref().map_or(false, |root| {
            root.bounds()
                .intersect(ray)
                .map_or(false, |t_entry| root.intersect_p(scene, ray, t_max, t_entry))
        })
    }
}

impl<S: Scene> Aggregate<S> for BVHAccel {
    fn intersect(&self, scene: &S, ray: &Ray, hit: &mut RayHit) -> Option<PrimitiveRef> {
        BVHAccel::intersect(self, scene, ray, hit)
    }

    fn intersect_p(&self, scene: &S, ray: &Ray, t_max: Float) -> bool {
        BVHAccel::intersect_p(self, scene, ray, t_max)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_always_misses() {
        let scene = MeshScene::from(vec![TriangleMesh::default(), TriangleMesh::default()]);
        let bvh = BVHAccel::new(&scene);

        assert!(bvh.root().is_none());
        assert_eq!(bvh.total_nodes(), 0);
        assert_eq!(bvh.leaf_nodes(), 0);

        let ray = Ray::default();
        let mut hit = RayHit::default();
        assert_eq!(bvh.intersect(&scene, &ray, &mut hit), None);
        assert_eq!(hit, RayHit::default());
        assert!(!bvh.intersect_p(&scene, &ray, INFINITY));
    }

    #[test]
    fn root_box_miss_leaves_hit_untouched() {
        let p = vec![point3(0.0, 0.0, 0.0), point3(0.0, 0.0, 1.0), point3(0.0, 1.0, 0.0)];
        let scene = MeshScene::from(vec![TriangleMesh::new(p, vec![[0, 1, 2]]).expect("valid mesh")]);
        let bvh = BVHAccel::new(&scene);

        let ray = Ray::new(point3(-1.0, 3.0, 0.5), Vector3::new(1.0, 0.0, 0.0));
        let mut hit = RayHit::default();
        assert_eq!(bvh.intersect(&scene, &ray, &mut hit), None);
        assert_eq!(hit, RayHit::default());
    }
}
