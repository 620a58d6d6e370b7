//! Ray probe

use accelerators::*;
use core::geometry::*;
use core::pbrt::*;
use core::scene::*;
use std::time::{Duration, Instant};

/// Results of tracing a ray grid through a scene.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProbeStats {
    /// Number of primary rays cast.
    pub rays: usize,

    /// Primary rays that hit a triangle.
    pub hits: usize,

    /// Hits whose shadow ray towards the light is blocked.
    pub occluded: usize,

    /// Time spent building the aggregate.
    pub build_time: Duration,

    /// Time spent tracing primary and shadow rays.
    pub trace_time: Duration,
}

/// Pinhole camera in front of the scene, looking along +z at the near face of
/// the scene bounds, with a point light above it.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    /// Eye position.
    pub eye: Point3f,

    /// Light position.
    pub light: Point3f,

    /// Lower-left corner of the image plane.
    plane_min: Point3f,

    /// Extent of the image plane along x and y.
    plane_size: Vector3f,
}

impl Camera {
    /// Frame the camera around a scene. Fails for a scene without triangles.
    ///
    /// * `scene` - The scene.
    pub fn framing<S: Scene>(scene: &S) -> Result<Self, String> {
        let bounds = AABBox::from_scene(scene, scene.primitive_refs());
        if bounds.primitives().is_empty() {
            return Err(String::from("Cannot frame a scene without triangles."));
        }

        let size = bounds.diagonal();
        let centre_x = 0.5 * (bounds.p_min.x + bounds.p_max.x);
        let centre_y = 0.5 * (bounds.p_min.y + bounds.p_max.y);
        let distance = 2.0 * max(max(size.x, size.y), 1.0);

        Ok(Self {
            eye: point3(centre_x, centre_y, bounds.p_min.z - distance),
            light: point3(centre_x, bounds.p_max.y + distance, bounds.p_min.z - distance),
            plane_min: point3(bounds.p_min.x, bounds.p_min.y, bounds.p_min.z),
            plane_size: Vector3::new(size.x, size.y, 0.0),
        })
    }

    /// Returns one ray per cell of a `width x height` grid on the image plane,
    /// row by row.
    ///
    /// * `width`  - Number of columns.
    /// * `height` - Number of rows.
    pub fn rays(&self, width: usize, height: usize) -> Vec<Ray> {
        let mut rays = Vec::with_capacity(width * height);
        for j in 0..height {
            for i in 0..width {
                let u = (i as Float + 0.5) / width as Float;
                let v = (j as Float + 0.5) / height as Float;
                let target = point3(
                    self.plane_min.x + u * self.plane_size.x,
                    self.plane_min.y + v * self.plane_size.y,
                    self.plane_min.z,
                );
                rays.push(Ray::new(self.eye, target - self.eye));
            }
        }
        rays
    }
}

/// Build an aggregate and trace primary rays through it. Every hit casts a
/// shadow ray towards the light.
///
/// * `scene`  - The scene.
/// * `kind`   - Aggregate to build.
/// * `camera` - Camera to cast from.
/// * `width`  - Ray grid width.
/// * `height` - Ray grid height.
pub fn trace<S: Scene>(scene: &S, kind: AcceleratorKind, camera: &Camera, width: usize, height: usize) -> ProbeStats {
    let start = Instant::now();
    let aggregate = kind.build(scene);
    let build_time = start.elapsed();

    let rays = camera.rays(width, height);
    let mut stats = ProbeStats {
        rays: rays.len(),
        build_time,
        ..ProbeStats::default()
    };

    let start = Instant::now();
    let mut hit = RayHit::default();
    for ray in rays.iter() {
        hit.reset();
        if let Some(prim) = aggregate.intersect(scene, ray, &mut hit) {
            stats.hits += 1;

            let [p0, p1, p2] = scene.triangle(prim);
            let p = hit.hit_position(&p0, &p1, &p2);

            // Starts on the surface. Back faces never hit, so the triangle
            // only blocks its own shadow ray when it faces away from the light.
            let shadow = Ray::new(p, camera.light - p);
            if aggregate.intersect_p(scene, &shadow, 1.0) {
                stats.occluded += 1;
            }
        }
    }
    stats.trace_time = start.elapsed();

    stats
}

/// Check every ray against a linear scan. Returns the number of rays checked,
/// or an error describing the first disagreement.
///
/// * `scene` - The scene.
/// * `rays`  - Rays to check.
pub fn verify<S: Scene>(scene: &S, rays: &[Ray]) -> Result<usize, String> {
    let bvh = BVHAccel::new(scene);
    let linear = LinearAccel::new(scene);

    for (i, ray) in rays.iter().enumerate() {
        let mut expected = RayHit::default();
        let expected_prim = linear.intersect(scene, ray, &mut expected);

        let mut actual = RayHit::default();
        let actual_prim = bvh.intersect(scene, ray, &mut actual);

        if actual_prim.is_some() != expected_prim.is_some() || actual.t != expected.t {
            return Err(format!(
                "Ray {i} {ray:?}: BVH hit {} at t = {}, linear scan hit {} at t = {}.",
                describe(actual_prim),
                actual.t,
                describe(expected_prim),
                expected.t
            ));
        }
    }

    Ok(rays.len())
}

fn describe(prim: Option<PrimitiveRef>) -> String {
    prim.map_or_else(|| String::from("nothing"), |p| p.to_string())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
