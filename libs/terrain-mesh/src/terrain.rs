//! # Terrain Pipeline
//!
//! ASC file → height grid → raw solid → finished solid.

use std::path::Path;

use asc_grid::{load_path, GridHeader, HeightGrid, LoadOptions};
use serde::{Deserialize, Serialize};

use crate::builder::{build_mesh_with, MeshOptions};
use crate::error::MeshResult;
use crate::finish::{FinishReport, MeshFinisher, WeldingFinisher};
use crate::mesh::MeshBuffers;

/// Options for the whole pipeline.
///
/// # Example
///
/// ```rust
/// use terrain_mesh::{FloorStyle, TerrainOptions};
///
/// let options: TerrainOptions = serde_json::from_str(
///     r#"{ "load": { "rows": "lenient" }, "mesh": { "floor": "quad" } }"#,
/// ).unwrap();
/// assert_eq!(options.mesh.floor, FloorStyle::Quad);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainOptions {
    /// Grid loading options
    pub load: LoadOptions,
    /// Mesh building options
    pub mesh: MeshOptions,
}

/// A finished terrain solid.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainModel {
    /// Model name, the source file name for loaded terrain
    pub name: String,
    /// Header of the source grid
    pub header: GridHeader,
    /// Closed, outward-oriented mesh
    pub mesh: MeshBuffers,
    /// What the finisher changed
    pub report: FinishReport,
}

/// Builds and finishes a solid for an already loaded grid.
pub fn mesh_grid(
    name: impl Into<String>,
    grid: &HeightGrid,
    options: &TerrainOptions,
    finisher: &impl MeshFinisher,
) -> MeshResult<TerrainModel> {
    let raw = build_mesh_with(grid, &options.mesh)?;
    let finished = finisher.finish(raw)?;
    Ok(TerrainModel {
        name: name.into(),
        header: grid.header().clone(),
        mesh: finished.mesh,
        report: finished.report,
    })
}

/// Reads an ASC file and returns its finished terrain solid.
///
/// The model is named after the file name.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_terrain(path: impl AsRef<Path>, options: &TerrainOptions) -> MeshResult<TerrainModel> {
    let path = path.as_ref();
    let grid = load_path(path, &options.load)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "terrain".to_string());

    let model = mesh_grid(name, &grid, options, &WeldingFinisher::default())?;
    tracing::info!(
        name = %model.name,
        vertices = model.mesh.vertex_count(),
        triangles = model.mesh.triangle_count(),
        "terrain ready"
    );
    Ok(model)
}
