//! Linear scan

use crate::Aggregate;
use pbrt_core::geometry::*;
use pbrt_core::pbrt::*;
use pbrt_core::scene::*;

/// Tests every triangle of a scene in order. Used where a tree isn't worth
/// building and as the reference answer for the BVH.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearAccel {
    /// Every triangle of the scene, mesh by mesh.
    primitives: Vec<PrimitiveRef>,
}

impl LinearAccel {
    /// Collect the triangles of a scene.
    ///
    /// * `scene` - The scene.
    pub fn new<S: Scene>(scene: &S) -> Self {
        let primitives = scene.primitive_refs();
        info!("Linear accelerator created for {} primitives", primitives.len());
        Self { primitives }
    }

    /// Returns the triangles in scan order.
    pub fn primitives(&self) -> &[PrimitiveRef] {
        &self.primitives
    }

    /// Returns the closest triangle hit strictly closer than `hit.t`. Of
    /// several triangles at the same distance the first in scan order wins.
    ///
    /// * `scene` - The scene.
    /// * `ray`   - The ray.
    /// * `hit`   - Closest hit found so far.
    pub fn intersect<S: Scene>(&self, scene: &S, ray: &Ray, hit: &mut RayHit) -> Option<PrimitiveRef> {
        let mut closest = None;
        for &prim in self.primitives.iter() {
            let [p0, p1, p2] = scene.triangle(prim);
            if ray.intersect_triangle(hit, &p0, &p1, &p2) {
                closest = Some(prim);
            }
        }
        closest
    }

    /// Returns true if the ray hits any triangle at `0 <= t < t_max`.
    ///
    /// * `scene` - The scene.
    /// * `ray`   - The ray.
    /// * `t_max` - Maximum distance.
    pub fn intersect_p<S: Scene>(&self, scene: &S, ray: &Ray, t_max: Float) -> bool {
        self.primitives.iter().any(|&prim| {
            let [p0, p1, p2] = scene.triangle(prim);
            ray.intersect_triangle(&mut RayHit::with_t_max(t_max), &p0, &p1, &p2)
        })
    }
}

impl<S: Scene> Aggregate<S> for LinearAccel {
    fn intersect(&self, scene: &S, ray: &Ray, hit: &mut RayHit) -> Option<PrimitiveRef> {
        LinearAccel::intersect(self, scene, ray, hit)
    }

    fn intersect_p(&self, scene: &S, ray: &Ray, t_max: Float) -> bool {
        LinearAccel::intersect_p(self, scene, ray, t_max)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(x: Float) -> TriangleMesh {
        let p = vec![point3(x, 0.0, 0.0), point3(x, 0.0, 1.0), point3(x, 1.0, 0.0)];
        TriangleMesh::new(p, vec![[0, 1, 2]]).expect("valid mesh")
    }

    #[test]
    fn closest_of_several() {
        let scene = MeshScene::from(vec![wall(6.0), wall(2.0), wall(4.0)]);
        let linear = LinearAccel::new(&scene);
        assert_eq!(linear.primitives().len(), 3);

        let ray = Ray::new(point3(0.0, 0.25, 0.25), Vector3::new(1.0, 0.0, 0.0));
        let mut hit = RayHit::default();
        assert_eq!(linear.intersect(&scene, &ray, &mut hit), Some(PrimitiveRef::new(1, 0)));
        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.b0, 0.25);
        assert_eq!(hit.b1, 0.25);
    }

    #[test]
    fn coincident_triangles_first_wins() {
        let scene = MeshScene::from(vec![wall(3.0), wall(3.0)]);
        let linear = LinearAccel::new(&scene);

        let ray = Ray::new(point3(0.0, 0.25, 0.25), Vector3::new(1.0, 0.0, 0.0));
        let mut hit = RayHit::default();
        assert_eq!(linear.intersect(&scene, &ray, &mut hit), Some(PrimitiveRef::new(0, 0)));
    }

    #[test]
    fn intersect_p_bounded() {
        let scene = MeshScene::from(vec![wall(2.0)]);
        let linear = LinearAccel::new(&scene);
        let ray = Ray::new(point3(0.0, 0.25, 0.25), Vector3::new(1.0, 0.0, 0.0));

        assert!(linear.intersect_p(&scene, &ray, INFINITY));
        assert!(linear.intersect_p(&scene, &ray, 2.5));
        assert!(!linear.intersect_p(&scene, &ray, 2.0));
    }
}
