//! # Mesh Export
//!
//! Flat render buffers and binary STL output.
//!
//! ## Binary STL layout
//!
//! ```text
//! 80 bytes   header (model name, zero padded)
//! u32        triangle count
//! per triangle, 50 bytes:
//!     3 x f32  face normal
//!     9 x f32  three vertices
//!     u16      attribute byte count (0)
//! ```
//!
//! All values are little-endian.

use std::io::Write;

use config::constants::STL_HEADER_BYTES;
use glam::DVec3;

use crate::error::MeshResult;
use crate::mesh::MeshBuffers;

/// Unrolled, flat-shaded buffers: one vertex per triangle corner, each
/// carrying its face normal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBuffers {
    /// Corner positions as [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Face normal per corner as [x, y, z, x, y, z, ...]
    pub normals: Vec<f32>,
}

impl RenderBuffers {
    /// Unrolls a mesh into render buffers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use terrain_mesh::{MeshBuffers, RenderBuffers};
    ///
    /// let mesh = MeshBuffers::from_parts(
    ///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
    ///     vec![[0, 1, 2]],
    /// ).unwrap();
    /// let buffers = RenderBuffers::from_mesh(&mesh);
    /// assert_eq!(buffers.vertex_count(), 3);
    /// assert_eq!(&buffers.normals[..3], &[0.0, 0.0, 1.0]);
    /// ```
    pub fn from_mesh(mesh: &MeshBuffers) -> Self {
        let corners = mesh.triangle_count() * 3;
        let mut positions = Vec::with_capacity(corners * 3);
        let mut normals = Vec::with_capacity(corners * 3);

        for index in 0..mesh.triangle_count() {
            let corners = mesh.corners(index);
            let normal = face_normal(corners);
            for corner in corners {
                positions.extend(to_f32(corner));
                normals.extend(to_f32(normal));
            }
        }

        Self { positions, normals }
    }

    /// Number of unrolled vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Sequential indices `0..vertex_count`.
    pub fn indices(&self) -> Vec<u32> {
        (0..self.vertex_count() as u32).collect()
    }
}

/// Unit normal of a triangle from its winding, zero if degenerate.
#[inline]
pub fn face_normal([a, b, c]: [DVec3; 3]) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Writes a mesh as binary STL.
///
/// The model name fills the header, truncated to fit.
pub fn write_stl<W: Write>(mesh: &MeshBuffers, name: &str, mut writer: W) -> MeshResult<()> {
    let mut header = [0u8; STL_HEADER_BYTES];
    let name = name.as_bytes();
    let len = name.len().min(STL_HEADER_BYTES);
    header[..len].copy_from_slice(&name[..len]);
    writer.write_all(&header)?;
    writer.write_all(&(mesh.triangle_count() as u32).to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        let corners = mesh.corners(index);
        write_vec3(&mut writer, face_normal(corners))?;
        for corner in corners {
            write_vec3(&mut writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    tracing::debug!(triangles = mesh.triangle_count(), "wrote binary STL");
    Ok(())
}

fn write_vec3<W: Write>(writer: &mut W, v: DVec3) -> std::io::Result<()> {
    for component in to_f32(v) {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}

#[inline]
fn to_f32(v: DVec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}
