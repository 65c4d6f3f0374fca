//! # Mesh Buffers
//!
//! Vertex and triangle buffers produced by the mesher and handed to the
//! mesh finisher.

use glam::DVec3;

use crate::error::MeshResult;
use crate::topology;

/// A triangle mesh with vertices and indices.
///
/// Insertion order is the canonical vertex index. Triangle winding is
/// significant: counter-clockwise seen from outside the solid.
///
/// # Example
///
/// ```rust
/// use terrain_mesh::MeshBuffers;
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffers::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl MeshBuffers {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from existing buffers, checking every index.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        let mesh = Self::from_parts_unchecked(vertices, triangles);
        topology::check_indices(&mesh)?;
        Ok(mesh)
    }

    /// Creates a mesh from buffers whose indices are valid by construction.
    pub(crate) fn from_parts_unchecked(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    /// Consumes the mesh, returning vertices and triangles.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals = None;
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangle windings.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Signed volume enclosed by the triangles.
    ///
    /// Positive when the windings face outward. Only meaningful for a
    /// closed mesh.
    pub fn signed_volume(&self) -> f64 {
        (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.corners(i);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Reverses the winding of one triangle.
    #[inline]
    pub fn flip_triangle(&mut self, index: usize) {
        self.triangles[index].swap(1, 2);
        self.normals = None;
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}
