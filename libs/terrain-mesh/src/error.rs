//! # Mesh Errors
//!
//! Error types for terrain mesh generation. There is no partial success:
//! either a complete mesh is produced or one of these is returned.

use asc_grid::GridError;
use thiserror::Error;

/// Errors that can occur during terrain mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Loading the height grid failed
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// No solid could be produced
    #[error("Empty mesh: {message}")]
    EmptyMesh { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// A triangle references a vertex that does not exist
    #[error("Triangle {triangle} references vertex {index}, mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// An edge is not shared by exactly two triangles
    #[error("Mesh is not manifold: {message}")]
    NonManifold { message: String },

    /// Writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an empty mesh error.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::EmptyMesh {
            message: message.into(),
        }
    }

    /// Creates a non-manifold error.
    pub fn non_manifold(message: impl Into<String>) -> Self {
        Self::NonManifold {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;
    use asc_grid::HeaderField;

    #[test]
    fn test_grid_error_converts() {
        let err: MeshError = GridError::missing(HeaderField::CellSize).into();
        assert!(err.to_string().contains("CELLSIZE"));
    }

    #[test]
    fn test_empty_mesh_display() {
        let err = MeshError::empty("1 x 5 grid has no cells");
        assert_eq!(err.to_string(), "Empty mesh: 1 x 5 grid has no cells");
    }
}
