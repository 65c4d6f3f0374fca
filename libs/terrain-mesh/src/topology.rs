//! # Topology Checks
//!
//! Edge bookkeeping used to verify that a mesh is a closed, consistently
//! oriented 2-manifold.

use std::collections::HashMap;

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffers;

/// An edge between two vertex indices.
///
/// Directed as stored; [`Edge::undirected`] puts the smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub u32, pub u32);

impl Edge {
    /// Canonical form with the smaller index first.
    #[inline]
    pub fn undirected(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            Edge(self.1, self.0)
        }
    }

    /// The same edge walked the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Edge(self.1, self.0)
    }
}

/// The three directed edges of a triangle, following its winding.
#[inline]
pub fn triangle_edges([a, b, c]: [u32; 3]) -> [Edge; 3] {
    [Edge(a, b), Edge(b, c), Edge(c, a)]
}

/// Counts how many triangles use each undirected edge.
pub fn edge_use_counts(mesh: &MeshBuffers) -> HashMap<Edge, usize> {
    let mut counts = HashMap::with_capacity(mesh.triangle_count() * 3 / 2);
    for &tri in mesh.triangles() {
        for edge in triangle_edges(tri) {
            *counts.entry(edge.undirected()).or_insert(0) += 1;
        }
    }
    counts
}

/// Counts how many triangles walk each directed edge.
fn directed_edge_counts(mesh: &MeshBuffers) -> HashMap<Edge, usize> {
    let mut counts = HashMap::with_capacity(mesh.triangle_count() * 3);
    for &tri in mesh.triangles() {
        for edge in triangle_edges(tri) {
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

/// Fails on the first triangle index that is not a vertex of the mesh.
pub fn check_indices(mesh: &MeshBuffers) -> MeshResult<()> {
    let vertex_count = mesh.vertex_count();
    for (triangle, tri) in mesh.triangles().iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfBounds {
                triangle,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// True when every undirected edge is shared by exactly two triangles.
pub fn is_edge_manifold(mesh: &MeshBuffers) -> bool {
    !mesh.is_empty() && edge_use_counts(mesh).values().all(|&count| count == 2)
}

/// True when every directed edge is walked once and its reverse is present,
/// i.e. neighbouring triangles agree on which side is outside.
pub fn is_consistently_oriented(mesh: &MeshBuffers) -> bool {
    let counts = directed_edge_counts(mesh);
    !counts.is_empty()
        && counts
            .iter()
            .all(|(edge, &count)| count == 1 && counts.get(&edge.reversed()) == Some(&1))
}

/// Fails with [`MeshError::NonManifold`] naming the first edge that is not
/// shared by exactly two triangles.
pub fn check_closed(mesh: &MeshBuffers) -> MeshResult<()> {
    if mesh.is_empty() {
        return Err(MeshError::empty("mesh has no triangles"));
    }
    let counts = edge_use_counts(mesh);
    let mut bad: Vec<_> = counts.into_iter().filter(|&(_, count)| count != 2).collect();
    bad.sort_unstable();
    match bad.first() {
        None => Ok(()),
        Some((Edge(a, b), count)) => Err(MeshError::non_manifold(format!(
            "edge ({a}, {b}) is used by {count} triangles ({} bad edges)",
            bad.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn tetrahedron() -> MeshBuffers {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let triangles = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];
        MeshBuffers::from_parts(vertices, triangles).unwrap()
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        let mesh = tetrahedron();
        assert!(is_edge_manifold(&mesh));
        assert!(is_consistently_oriented(&mesh));
        assert!(check_closed(&mesh).is_ok());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_edge_use_counts() {
        let counts = edge_use_counts(&tetrahedron());
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[&Edge(0, 1)], 2);
    }

    #[test]
    fn test_flipped_face_is_manifold_but_not_oriented() {
        let mut mesh = tetrahedron();
        mesh.flip_triangle(2);
        assert!(is_edge_manifold(&mesh));
        assert!(!is_consistently_oriented(&mesh));
    }

    #[test]
    fn test_open_mesh_fails_check_closed() {
        let (vertices, mut triangles) = tetrahedron().into_parts();
        triangles.pop();
        let mesh = MeshBuffers::from_parts(vertices, triangles).unwrap();
        assert!(!is_edge_manifold(&mesh));
        let err = check_closed(&mesh).unwrap_err();
        assert!(matches!(err, MeshError::NonManifold { .. }));
        assert!(err.to_string().contains("edge (0, 2)"));
    }

    #[test]
    fn test_check_indices_reports_first_bad_triangle() {
        let mesh = MeshBuffers::from_parts_unchecked(
            vec![DVec3::ZERO; 3],
            vec![[0, 1, 2], [0, 7, 2]],
        );
        match check_indices(&mesh) {
            Err(MeshError::IndexOutOfBounds {
                triangle,
                index,
                vertex_count,
            }) => {
                assert_eq!(triangle, 1);
                assert_eq!(index, 7);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_empty_mesh_is_not_closed() {
        let mesh = MeshBuffers::new();
        assert!(!is_edge_manifold(&mesh));
        assert!(!is_consistently_oriented(&mesh));
        assert!(matches!(check_closed(&mesh), Err(MeshError::EmptyMesh { .. })));
    }
}
