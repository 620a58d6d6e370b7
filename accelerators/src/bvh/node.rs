//! BVH Node

use super::aabbox::*;
use super::split::*;
use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::scene::*;

/// Counters gathered while building a tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of nodes.
    pub total_nodes: usize,

    /// Number of leaves.
    pub leaf_nodes: usize,

    /// Depth of the deepest node; the root is at depth 0.
    pub max_depth: usize,
}

/// A node of the median-split BVH. Leaves own exactly one triangle; interior
/// nodes own exactly two children.
#[derive(Clone, Debug, PartialEq)]
pub struct BVHNode {
    /// Bounds and triangles of the subtree.
    bounds: AABBox,

    /// Split axis. Not set for leaves.
    axis: Option<Axis>,

    /// Split position along `axis`. Only set when the node was split at the
    /// median, i.e. when it has more than two triangles.
    median: Option<Float>,

    /// Left and right subtrees.
    children: Option<Box<[BVHNode; 2]>>,
}

impl BVHNode {
    /// Recursively build a subtree over a non-empty list of triangles.
    ///
    /// * `scene`      - The scene the triangles belong to.
    /// * `primitives` - The triangles.
    /// * `depth`      - Depth of this node.
    /// * `stats`      - Counters to update.
    pub fn build<S: Scene>(scene: &S, primitives: Vec<PrimitiveRef>, depth: usize, stats: &mut BuildStats) -> Self {
        debug_assert!(!primitives.is_empty());

        stats.total_nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        let bounds = AABBox::from_scene(scene, primitives);
        let indent = 2 * depth;
        let n_primitives = bounds.primitives().len();

        match n_primitives {
            0 | 1 => {
                trace!(
                    "{:indent$}-> BVH node: {:?} - {:?} one triangle",
                    "",
                    bounds.p_min,
                    bounds.p_max
                );
                stats.leaf_nodes += 1;
                Self {
                    bounds,
                    axis: None,
                    median: None,
                    children: None,
                }
            }
            2 => {
                let axis = bounds.maximum_extent();
                trace!(
                    "{:indent$}-> BVH node: {:?} - {:?} two triangles, axis {:?}",
                    "",
                    bounds.p_min,
                    bounds.p_max,
                    axis
                );

                let prims = bounds.primitives();
                let left = Self::build(scene, vec![prims[0]], depth + 1, stats);
                let right = Self::build(scene, vec![prims[1]], depth + 1, stats);
                Self {
                    bounds,
                    axis: Some(axis),
                    median: None,
                    children: Some(Box::new([left, right])),
                }
            }
            _ => {
                let axis = bounds.maximum_extent();
                let mut coords = vertex_coordinates(scene, bounds.primitives(), axis);
                let median = find_median(&mut coords);
                trace!(
                    "{:indent$}-> BVH node: {:?} - {:?} axis {:?}, median {}, triangles {}, vertices {}",
                    "",
                    bounds.p_min,
                    bounds.p_max,
                    axis,
                    median,
                    n_primitives,
                    coords.len()
                );

                let (left_prims, right_prims) = partition(scene, bounds.primitives(), axis, median);
                let left = Self::build(scene, left_prims, depth + 1, stats);
                let right = Self::build(scene, right_prims, depth + 1, stats);
                Self {
                    bounds,
                    axis: Some(axis),
                    median: Some(median),
                    children: Some(Box::new([left, right])),
                }
            }
        }
    }

    /// Returns the bounds and triangles of the subtree.
    pub fn bounds(&self) -> &AABBox {
        &self.bounds
    }

    /// Returns the split axis of an interior node.
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Returns the split position of a node that was split at the median.
    pub fn median(&self) -> Option<Float> {
        self.median
    }

    /// Returns the left and right children of an interior node.
    pub fn children(&self) -> Option<&[BVHNode; 2]> {
        self.children.as_deref()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns the triangles of all leaves below this node, depth-first and
    /// left before right.
    pub fn leaves(&self) -> Vec<PrimitiveRef> {
        let mut out = Vec::with_capacity(self.bounds.primitives().len());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<PrimitiveRef>) {
        match self.children() {
            None => out.extend_from_slice(self.bounds.primitives()),
            Some([left, right]) => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Find the closest triangle in the subtree hit strictly closer than
    /// `hit.t`, updating `hit` as closer hits are found.
    ///
    /// Returns the triangle behind the last update of `hit`, if any.
    ///
    /// * `scene`   - The scene the tree was built over.
    /// * `ray`     - The ray.
    /// * `hit`     - Closest hit found so far.
    /// * `t_entry` - Entry distance of the ray into this node's bounds.
    pub fn intersect<S: Scene>(&self, scene: &S, ray: &Ray, hit: &mut RayHit, t_entry: Float) -> Option<PrimitiveRef> {
        if t_entry >= hit.t {
            return None;
        }

        let [left, right] = match self.children() {
            None => {
                let prim = *self.bounds.primitives().first()?;
                let [p0, p1, p2] = scene.triangle(prim);
                return ray.intersect_triangle(hit, &p0, &p1, &p2).then_some(prim);
            }
            Some(children) => children,
        };

        match (left.bounds.intersect(ray), right.bounds.intersect(ray)) {
            (None, None) => None,
            (Some(t_left), None) => left.intersect(scene, ray, hit, t_left),
            (None, Some(t_right)) => right.intersect(scene, ray, hit, t_right),
            (Some(t_left), Some(t_right)) if t_right < t_left => {
                let near = right.intersect(scene, ray, hit, t_right);
                let far = left.intersect(scene, ray, hit, t_left);
                far.or(near)
            }
            (Some(t_left), Some(t_right)) => {
                let near = left.intersect(scene, ray, hit, t_left);
                let far = right.intersect(scene, ray, hit, t_right);
                far.or(near)
            }
        }
    }

    /// Returns true if any triangle in the subtree is hit at `0 <= t < t_max`.
    ///
    /// * `scene`   - The scene the tree was built over.
    /// * `ray`     - The ray.
    /// * `t_max`   - Maximum distance.
    /// * `t_entry` - Entry distance of the ray into this node's bounds.
    pub fn intersect_p<S: Scene>(&self, scene: &S, ray: &Ray, t_max: Float, t_entry: Float) -> bool {
        if t_entry >= t_max {
            return false;
        }

        match self.children() {
            None => self.bounds.primitives().iter().any(|&prim| {
                let [p0, p1, p2] = scene.triangle(prim);
                ray.intersect_triangle(&mut RayHit::with_t_max(t_max), &p0, &p1, &p2)
            }),
            Some(children) => children.iter().any(|child| {
                child
                    .bounds
                    .intersect(ray)
                    .map_or(false, |t| child.intersect_p(scene, ray, t_max, t))
            }),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle facing -x in the plane `x`, covering `[y, y + 1] x [0, 1]`.
    fn wall(x: Float, y: Float) -> TriangleMesh {
        let p = vec![point3(x, y, 0.0), point3(x, y, 1.0), point3(x, y + 1.0, 0.0)];
        TriangleMesh::new(p, vec![[0, 1, 2]]).expect("valid mesh")
    }

    fn build(scene: &MeshScene) -> (BVHNode, BuildStats) {
        let mut stats = BuildStats::default();
        let root = BVHNode::build(scene, scene.primitive_refs(), 0, &mut stats);
        (root, stats)
    }

    #[test]
    fn single_triangle_is_leaf() {
        let scene = MeshScene::from(vec![wall(0.0, 0.0)]);
        let (root, stats) = build(&scene);

        assert!(root.is_leaf());
        assert_eq!(root.axis(), None);
        assert_eq!(root.median(), None);
        assert_eq!(root.leaves(), vec![PrimitiveRef::new(0, 0)]);
        assert_eq!(
            stats,
            BuildStats {
                total_nodes: 1,
                leaf_nodes: 1,
                max_depth: 0
            }
        );
    }

    #[test]
    fn two_triangles_split_in_order_without_median() {
        let scene = MeshScene::from(vec![wall(5.0, 0.0), wall(0.0, 0.0)]);
        let (root, stats) = build(&scene);

        assert_eq!(root.axis(), Some(Axis::X));
        assert_eq!(root.median(), None);
        let [left, right] = root.children().expect("interior node");
        assert_eq!(left.leaves(), vec![PrimitiveRef::new(0, 0)]);
        assert_eq!(right.leaves(), vec![PrimitiveRef::new(1, 0)]);
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.leaf_nodes, 2);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn three_triangles_split_at_median() {
        let scene = MeshScene::from(vec![wall(0.0, 0.0), wall(4.0, 0.0), wall(8.0, 0.0)]);
        let (root, stats) = build(&scene);

        // x coordinates are 0, 0, 0, 4, 4, 4, 8, 8, 8.
        assert_eq!(root.axis(), Some(Axis::X));
        assert_eq!(root.median(), Some(4.0));

        // The middle wall lies on the median and goes to the then empty right.
        let [left, right] = root.children().expect("interior node");
        assert!(left.is_leaf());
        assert_eq!(left.leaves(), vec![PrimitiveRef::new(0, 0)]);
        assert_eq!(right.leaves(), vec![PrimitiveRef::new(1, 0), PrimitiveRef::new(2, 0)]);
        assert_eq!(right.median(), None);
        assert_eq!(root.bounds().p_min, point3(0.0, 0.0, 0.0));
        assert_eq!(root.bounds().p_max, point3(8.0, 1.0, 1.0));
        assert_eq!(stats.total_nodes, 5);
        assert_eq!(stats.leaf_nodes, 3);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn intersect_prunes_beyond_current_hit() {
        let scene = MeshScene::from(vec![wall(0.0, 0.0), wall(4.0, 0.0)]);
        let (root, _) = build(&scene);
        let ray = Ray::new(point3(-1.0, 0.25, 0.25), Vector3::new(1.0, 0.0, 0.0));

        let mut hit = RayHit::with_t_max(0.5);
        assert_eq!(root.intersect(&scene, &ray, &mut hit, 1.0), None);
        assert_eq!(hit, RayHit::with_t_max(0.5));

        let mut hit = RayHit::with_t_max(3.0);
        assert_eq!(root.intersect(&scene, &ray, &mut hit, 1.0), Some(PrimitiveRef::new(0, 0)));
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn intersect_visits_nearer_right_child_first() {
        // Right child is nearer for a ray coming from +x. Walls face +x here.
        let flip = |x: Float| {
            let p = vec![point3(x, 0.0, 0.0), point3(x, 1.0, 0.0), point3(x, 0.0, 1.0)];
            TriangleMesh::new(p, vec![[0, 1, 2]]).expect("valid mesh")
        };
        let scene = MeshScene::from(vec![flip(0.0), flip(4.0)]);
        let (root, _) = build(&scene);
        let ray = Ray::new(point3(10.0, 0.25, 0.25), Vector3::new(-1.0, 0.0, 0.0));

        let mut hit = RayHit::default();
        let t_entry = root.bounds().intersect(&ray).expect("root hit");
        assert_eq!(root.intersect(&scene, &ray, &mut hit, t_entry), Some(PrimitiveRef::new(1, 0)));
        assert_eq!(hit.t, 6.0);
    }

    #[test]
    fn intersect_p_respects_t_max() {
        let scene = MeshScene::from(vec![wall(0.0, 0.0), wall(4.0, 0.0)]);
        let (root, _) = build(&scene);
        let ray = Ray::new(point3(-1.0, 0.25, 0.25), Vector3::new(1.0, 0.0, 0.0));

        assert!(root.intersect_p(&scene, &ray, INFINITY, -1.0));
        assert!(root.intersect_p(&scene, &ray, 1.5, 1.0));
        assert!(!root.intersect_p(&scene, &ray, 1.0, 1.0));

        let miss = Ray::new(point3(-1.0, 5.0, 0.25), Vector3::new(1.0, 0.0, 0.0));
        assert!(!root.intersect_p(&scene, &miss, INFINITY, -1.0));
    }
}
