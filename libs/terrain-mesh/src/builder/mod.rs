//! # Terrain Mesher
//!
//! Turns a height grid into a closed solid: the sampled surface on top,
//! four vertical skirt walls down to a flat base plane, and a floor.
//!
//! ## Pipeline
//!
//! ```text
//! HeightGrid → base elevation → surface vertices → skirt vertices
//!            → surface triangles → wall triangles → floor triangles
//! ```
//!
//! The output is watertight only after coincident vertices are welded: the
//! skirt corners and, on low terrain, the border samples share positions
//! without sharing indices. See [`crate::finish`].

mod floor;
mod surface;
mod walls;

#[cfg(test)]
mod tests;

use asc_grid::HeightGrid;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::base_plane::base_elevation;
use crate::error::MeshResult;
use crate::layout::{FloorStyle, SkirtLayout};
use crate::mesh::MeshBuffers;

/// Options for building a terrain mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    /// Floor triangulation
    pub floor: FloorStyle,
    /// Add the grid's georeferenced origin to every x/y coordinate
    pub translate_to_origin: bool,
    /// Fixed base plane elevation instead of the one derived from the relief
    pub base_elevation: Option<f64>,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            floor: FloorStyle::Perimeter,
            translate_to_origin: false,
            base_elevation: None,
        }
    }
}

/// Builds a solid terrain mesh with default options.
///
/// # Example
///
/// ```rust
/// use asc_grid::HeightGrid;
/// use terrain_mesh::build_mesh;
///
/// let grid = HeightGrid::from_elevations(2, 2, 1.0, vec![5.0; 4]).unwrap();
/// let mesh = build_mesh(&grid).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn build_mesh(grid: &HeightGrid) -> MeshResult<MeshBuffers> {
    build_mesh_with(grid, &MeshOptions::default())
}

/// Builds a solid terrain mesh.
///
/// # Errors
///
/// - `EmptyMesh` when the grid has fewer than two rows or columns
/// - `TooManyVertices` / `TooManyTriangles` when the grid exceeds the limits
#[tracing::instrument(skip_all, fields(rows = grid.rows(), columns = grid.columns()))]
pub fn build_mesh_with(grid: &HeightGrid, options: &MeshOptions) -> MeshResult<MeshBuffers> {
    let layout = SkirtLayout::for_grid(grid)?;
    let base_z = options
        .base_elevation
        .unwrap_or_else(|| base_elevation(grid.elevation_range()));
    tracing::debug!(base_z, "base plane");

    let mut vertices = surface::vertices(grid);
    vertices.reserve_exact(layout.vertex_count() - vertices.len());
    walls::push_skirt_vertices(&layout, grid.cell_size(), base_z, &mut vertices);
    debug_assert_eq!(vertices.len(), layout.vertex_count());

    let mut triangles = surface::triangles(&layout);
    triangles.reserve_exact(layout.triangle_count(options.floor) - triangles.len());
    walls::push_wall_triangles(&layout, &mut triangles);
    floor::push_floor_triangles(&layout, options.floor, &mut triangles);
    debug_assert_eq!(triangles.len(), layout.triangle_count(options.floor));

    let mut mesh = MeshBuffers::from_parts_unchecked(vertices, triangles);
    if options.translate_to_origin {
        mesh.translate(DVec3::new(grid.origin_x(), grid.origin_y(), 0.0));
    }

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        floor = ?options.floor,
        "built terrain mesh"
    );
    Ok(mesh)
}

/// Planar position of grid node `(x, y)`.
///
/// Surface and skirt vertices both go through here so that coincident
/// positions are bit-identical.
#[inline]
fn planar(x: usize, y: usize, cell_size: f64) -> (f64, f64) {
    (x as f64 * cell_size, y as f64 * cell_size)
}
