//! Procedural scenes

use core::geometry::*;
use core::pbrt::*;
use core::rng::RNG;
use core::scene::*;

/// Number of depth layers in the grid scene.
const GRID_LAYERS: usize = 4;

/// Edge length of a grid quad; quads are spaced one unit apart.
const GRID_QUAD_SIZE: Float = 0.8;

/// Half extent of the cube the soup triangles are placed in.
const SOUP_EXTENT: Float = 10.0;

/// Maximum offset of a soup triangle's vertices from its centre.
const SOUP_TRIANGLE_SIZE: Float = 0.75;

/// Generate a scene by name.
///
/// * `name`      - `grid` or `soup`.
/// * `triangles` - Approximate number of triangles.
/// * `seed`      - Seed for random scenes.
pub fn generate(name: &str, triangles: usize, seed: u64) -> Result<MeshScene, String> {
    if triangles == 0 {
        return Err(String::from("Number of triangles must be positive."));
    }

    match name {
        "grid" => grid(triangles),
        "soup" => soup(triangles, seed),
        _ => Err(format!("Unknown scene '{name}'. Expected 'grid' or 'soup'.")),
    }
}

/// Layers of square grids of unit-spaced quads facing -z. Each layer is
/// shifted by half a cell so layers partially hide one another.
///
/// * `triangles` - Approximate number of triangles.
pub fn grid(triangles: usize) -> Result<MeshScene, String> {
    let side = max(1, ((triangles / (2 * GRID_LAYERS)) as f64).sqrt() as usize);
    debug!("Grid scene with {GRID_LAYERS} layers of {side} x {side} quads");

    let mut scene = MeshScene::new();
    for layer in 0..GRID_LAYERS {
        let offset = 0.5 * (layer % 2) as Float;
        let z = 2.0 * layer as Float;

        let mut p = Vec::with_capacity(4 * side * side);
        let mut indices = Vec::with_capacity(2 * side * side);
        for row in 0..side {
            for col in 0..side {
                let x = col as Float + offset;
                let y = row as Float + offset;
                let base = p.len();
                p.push(point3(x, y, z));
                p.push(point3(x + GRID_QUAD_SIZE, y, z));
                p.push(point3(x + GRID_QUAD_SIZE, y + GRID_QUAD_SIZE, z));
                p.push(point3(x, y + GRID_QUAD_SIZE, z));
                indices.push([base, base + 2, base + 1]);
                indices.push([base, base + 3, base + 2]);
            }
        }
        scene.add(TriangleMesh::new(p, indices)?);
    }
    Ok(scene)
}

/// Randomly placed and oriented small triangles in a cube, in one mesh.
///
/// * `triangles` - Number of triangles.
/// * `seed`      - Seed for the random number generator.
pub fn soup(triangles: usize, seed: u64) -> Result<MeshScene, String> {
    let mut rng = RNG::new(seed);

    let mut p = Vec::with_capacity(3 * triangles);
    let mut indices = Vec::with_capacity(triangles);
    for i in 0..triangles {
        let c = point3(
            rng.uniform_range(-SOUP_EXTENT, SOUP_EXTENT),
            rng.uniform_range(-SOUP_EXTENT, SOUP_EXTENT),
            rng.uniform_range(-SOUP_EXTENT, SOUP_EXTENT),
        );
        for _ in 0..3 {
            let d = Vector3::new(
                rng.uniform_range(-SOUP_TRIANGLE_SIZE, SOUP_TRIANGLE_SIZE),
                rng.uniform_range(-SOUP_TRIANGLE_SIZE, SOUP_TRIANGLE_SIZE),
                rng.uniform_range(-SOUP_TRIANGLE_SIZE, SOUP_TRIANGLE_SIZE),
            );
            p.push(c + d);
        }
        indices.push([3 * i, 3 * i + 1, 3 * i + 2]);
    }

    Ok(MeshScene::from(vec![TriangleMesh::new(p, indices)?]))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scene_is_an_error() {
        assert!(generate("teapot", 10, 0).is_err());
        assert!(generate("grid", 0, 0).is_err());
    }

    #[test]
    fn grid_has_layers_of_quads() {
        let scene = generate("grid", 800, 0).expect("grid scene");
        assert_eq!(scene.object_count(), GRID_LAYERS);

        // 800 / 8 = 100 quads per layer.
        assert_eq!(scene.primitive_count(), GRID_LAYERS * 2 * 100);
    }

    #[test]
    fn grid_quads_face_negative_z() {
        let scene = grid(8).expect("grid scene");
        for prim in scene.primitive_refs() {
            let [p0, p1, p2] = scene.triangle(prim);
            let n = (p1 - p0).cross(&(p2 - p0));
            assert!(n.z < 0.0);
            assert_eq!(n.x, 0.0);
            assert_eq!(n.y, 0.0);
        }
    }

    #[test]
    fn soup_is_reproducible() {
        let a = soup(50, 3).expect("soup scene");
        let b = soup(50, 3).expect("soup scene");
        let c = soup(50, 4).expect("soup scene");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.primitive_count(), 50);
    }

    #[test]
    fn soup_stays_in_cube() {
        let scene = soup(200, 7).expect("soup scene");
        let limit = SOUP_EXTENT + SOUP_TRIANGLE_SIZE;
        for prim in scene.primitive_refs() {
            for p in scene.triangle(prim) {
                assert!(p.x.abs() <= limit && p.y.abs() <= limit && p.z.abs() <= limit);
            }
        }
    }
}
