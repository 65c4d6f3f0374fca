//! # Mesh Finisher
//!
//! Post-processing that turns the mesher's raw buffers into a watertight
//! solid. The mesher emits skirt vertices that coincide with surface border
//! vertices and with each other at the corners; only after welding do the
//! walls, surface and floor share edges.
//!
//! ## Steps
//!
//! 1. Weld vertices closer than epsilon
//! 2. Drop triangles that collapsed onto an edge or a point
//! 3. Drop vertices no triangle references
//! 4. Orient every triangle outward

mod weld;
mod winding;


pub use weld::{merge_vertices, remove_collapsed_triangles, remove_unreferenced_vertices};
pub use winding::fix_winding;

use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffers;
use crate::topology::check_indices;

/// Counts of what a finisher changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishReport {
    /// Vertices merged into an earlier coincident vertex
    pub merged_vertices: usize,
    /// Triangles removed because they had fewer than three distinct corners
    pub collapsed_triangles: usize,
    /// Vertices removed because nothing referenced them
    pub removed_vertices: usize,
    /// Triangle winding reversals
    pub flipped_triangles: usize,
}

/// A finished mesh together with its report.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedMesh {
    /// Cleaned mesh with vertex normals
    pub mesh: MeshBuffers,
    /// What the finisher changed
    pub report: FinishReport,
}

/// Post-processing applied to raw mesher output.
pub trait MeshFinisher {
    /// Consumes raw buffers and returns the finished mesh.
    fn finish(&self, mesh: MeshBuffers) -> MeshResult<FinishedMesh>;
}

/// Welds coincident vertices, removes degenerate geometry and orients the
/// result outward.
///
/// # Example
///
/// ```rust
/// use asc_grid::HeightGrid;
/// use terrain_mesh::{build_mesh, is_edge_manifold, MeshFinisher, WeldingFinisher};
///
/// let grid = HeightGrid::from_elevations(3, 3, 10.0, vec![
///     0.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
///     0.0, 0.0, 0.0,
/// ]).unwrap();
/// let finished = WeldingFinisher::default().finish(build_mesh(&grid).unwrap()).unwrap();
/// assert!(is_edge_manifold(&finished.mesh));
/// assert!(finished.mesh.signed_volume() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeldingFinisher {
    /// Positions closer than this are treated as one vertex
    pub epsilon: f64,
}

impl Default for WeldingFinisher {
    fn default() -> Self {
        Self {
            epsilon: VERTEX_MERGE_EPSILON,
        }
    }
}

impl WeldingFinisher {
    /// Creates a finisher with a custom weld distance.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Weld distance actually used; non-positive values fall back to
    /// [`EPSILON`].
    fn weld_epsilon(&self) -> f64 {
        if self.epsilon.is_finite() && self.epsilon > 0.0 {
            self.epsilon
        } else {
            EPSILON
        }
    }
}

impl MeshFinisher for WeldingFinisher {
    #[tracing::instrument(
        name = "weld",
        skip_all,
        fields(vertices = mesh.vertex_count(), triangles = mesh.triangle_count())
    )]
    fn finish(&self, mut mesh: MeshBuffers) -> MeshResult<FinishedMesh> {
        check_indices(&mesh)?;

        let merged_vertices = merge_vertices(&mut mesh, self.weld_epsilon());
        let collapsed_triangles = remove_collapsed_triangles(&mut mesh);
        let removed_vertices = remove_unreferenced_vertices(&mut mesh);
        if mesh.is_empty() {
            return Err(MeshError::empty("every triangle collapsed while welding"));
        }
        let flipped_triangles = fix_winding(&mut mesh);
        mesh.compute_normals();

        let report = FinishReport {
            merged_vertices,
            collapsed_triangles,
            removed_vertices,
            flipped_triangles,
        };
        tracing::debug!(
            ?report,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "finished mesh"
        );
        Ok(FinishedMesh { mesh, report })
    }
}
