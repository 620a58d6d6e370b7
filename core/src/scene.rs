//! Scene

use crate::geometry::*;
use std::fmt;

/// Identifies one triangle of one mesh in a scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveRef {
    /// Index of the mesh in the scene.
    pub object: usize,

    /// Index of the triangle in the mesh.
    pub primitive: usize,
}

impl PrimitiveRef {
    /// Create a new `PrimitiveRef`.
    ///
    /// * `object`    - Index of the mesh in the scene.
    /// * `primitive` - Index of the triangle in the mesh.
    pub fn new(object: usize, primitive: usize) -> Self {
        Self { object, primitive }
    }
}

impl fmt::Display for PrimitiveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.object, self.primitive)
    }
}

/// Read-only access to an indexed triangle mesh.
pub trait Mesh {
    /// Returns the vertex positions.
    fn vertex_positions(&self) -> &[Point3f];

    /// Returns the triangles as index triples into `vertex_positions()`.
    fn triangle_indices(&self) -> &[[usize; 3]];
}

/// Read-only access to the meshes of a scene.
pub trait Scene {
    type Mesh: Mesh;

    /// Returns the number of meshes.
    fn object_count(&self) -> usize;

    /// Returns the mesh at `index`.
    ///
    /// * `index` - Index of the mesh.
    fn object(&self, index: usize) -> &Self::Mesh;

    /// Returns the three vertices of a triangle.
    ///
    /// * `prim` - The triangle.
    fn triangle(&self, prim: PrimitiveRef) -> [Point3f; 3] {
        let mesh = self.object(prim.object);
        let positions = mesh.vertex_positions();
        let [i0, i1, i2] = mesh.triangle_indices()[prim.primitive];
        [positions[i0], positions[i1], positions[i2]]
    }

    /// Returns every triangle in the scene, mesh by mesh and in mesh order.
    fn primitive_refs(&self) -> Vec<PrimitiveRef> {
        (0..self.object_count())
            .flat_map(|object| {
                let n = self.object(object).triangle_indices().len();
                (0..n).map(move |primitive| PrimitiveRef::new(object, primitive))
            })
            .collect()
    }

    /// Returns the total number of triangles.
    fn primitive_count(&self) -> usize {
        (0..self.object_count())
            .map(|object| self.object(object).triangle_indices().len())
            .sum()
    }
}

/// An indexed triangle mesh whose indices have been validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    p: Vec<Point3f>,

    /// Vertex indices, three per triangle.
    indices: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Create a new `TriangleMesh`. Fails if any index is out of range.
    ///
    /// * `p`       - Vertex positions.
    /// * `indices` - Vertex indices, three per triangle.
    pub fn new(p: Vec<Point3f>, indices: Vec<[usize; 3]>) -> Result<Self, String> {
        let n_vertices = p.len();
        for (i, triangle) in indices.iter().enumerate() {
            if let Some(bad) = triangle.iter().find(|&&v| v >= n_vertices) {
                return Err(format!(
                    "Triangle {i} references vertex {bad} but the mesh has {n_vertices} vertices."
                ));
            }
        }
        Ok(Self { p, indices })
    }

    /// Returns the number of triangles.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Mesh for TriangleMesh {
    fn vertex_positions(&self) -> &[Point3f] {
        &self.p
    }

    fn triangle_indices(&self) -> &[[usize; 3]] {
        &self.indices
    }
}

/// A scene made of in-memory triangle meshes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshScene {
    meshes: Vec<TriangleMesh>,
}

impl MeshScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mesh and return its object index.
    ///
    /// * `mesh` - The mesh.
    pub fn add(&mut self, mesh: TriangleMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }
}

impl From<Vec<TriangleMesh>> for MeshScene {
    fn from(meshes: Vec<TriangleMesh>) -> Self {
        Self { meshes }
    }
}

impl Scene for MeshScene {
    type Mesh = TriangleMesh;

    fn object_count(&self) -> usize {
        self.meshes.len()
    }

    fn object(&self, index: usize) -> &TriangleMesh {
        &self.meshes[index]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
