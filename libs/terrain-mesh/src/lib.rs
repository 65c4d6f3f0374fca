//! # Terrain Mesh
//!
//! Closed solid meshes from height grids.
//!
//! ## Architecture
//!
//! ```text
//! HeightGrid → builder (surface + skirts + floor) → MeshBuffers
//!            → finisher (weld, clean, orient) → watertight solid
//!            → export (render buffers, binary STL)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use asc_grid::HeightGrid;
//! use terrain_mesh::{build_mesh, is_edge_manifold, MeshFinisher, WeldingFinisher};
//!
//! let grid = HeightGrid::from_elevations(2, 2, 1.0, vec![
//!     100.0, 101.0,
//!     102.0, 105.0,
//! ]).unwrap();
//! let raw = build_mesh(&grid).unwrap();
//! assert_eq!(raw.vertex_count(), 12);
//!
//! let solid = WeldingFinisher::default().finish(raw).unwrap().mesh;
//! assert!(is_edge_manifold(&solid));
//! assert!(solid.signed_volume() > 0.0);
//! ```

pub mod base_plane;
pub mod builder;
pub mod error;
pub mod export;
pub mod finish;
pub mod layout;
pub mod mesh;
pub mod terrain;
pub mod topology;

pub use base_plane::base_elevation;
pub use builder::{build_mesh, build_mesh_with, MeshOptions};
pub use error::{MeshError, MeshResult};
pub use export::{face_normal, write_stl, RenderBuffers};
pub use finish::{FinishReport, FinishedMesh, MeshFinisher, WeldingFinisher};
pub use layout::{FloorStyle, SkirtLayout};
pub use mesh::MeshBuffers;
pub use terrain::{mesh_grid, read_terrain, TerrainModel, TerrainOptions};
pub use topology::{
    check_closed, check_indices, edge_use_counts, is_consistently_oriented, is_edge_manifold,
};
