//! Vertex welding and buffer compaction.

use std::collections::HashMap;

use glam::DVec3;

use crate::mesh::MeshBuffers;

/// Merges vertices whose positions fall in the same epsilon cell.
///
/// Each coordinate is divided by `epsilon` and rounded to the nearest
/// integer; vertices with equal rounded coordinates are one vertex. Two
/// points closer than `epsilon` can still land in neighbouring cells when
/// they straddle a cell boundary, so only positions that agree to well under
/// `epsilon` are guaranteed to merge. The first vertex of each cell survives
/// and keeps its relative order. Returns the number of vertices merged away.
pub fn merge_vertices(mesh: &mut MeshBuffers, epsilon: f64) -> usize {
    let (vertices, triangles) = std::mem::take(mesh).into_parts();
    let before = vertices.len();

    let mut cells: HashMap<[u64; 3], u32> = HashMap::with_capacity(before);
    let mut welded = Vec::with_capacity(before);
    let remap: Vec<u32> = vertices
        .into_iter()
        .map(|position| {
            *cells.entry(cell_of(position, epsilon)).or_insert_with(|| {
                welded.push(position);
                (welded.len() - 1) as u32
            })
        })
        .collect();

    let triangles = triangles
        .into_iter()
        .map(|tri| tri.map(|i| remap[i as usize]))
        .collect();

    let merged = before - welded.len();
    *mesh = MeshBuffers::from_parts_unchecked(welded, triangles);
    merged
}

/// Drops triangles with fewer than three distinct indices.
///
/// Returns the number of triangles removed.
pub fn remove_collapsed_triangles(mesh: &mut MeshBuffers) -> usize {
    let (vertices, mut triangles) = std::mem::take(mesh).into_parts();
    let before = triangles.len();
    triangles.retain(|&[a, b, c]| a != b && b != c && c != a);
    let removed = before - triangles.len();
    *mesh = MeshBuffers::from_parts_unchecked(vertices, triangles);
    removed
}

/// Drops vertices no triangle references and compacts the indices.
///
/// Returns the number of vertices removed.
pub fn remove_unreferenced_vertices(mesh: &mut MeshBuffers) -> usize {
    let (vertices, triangles) = std::mem::take(mesh).into_parts();
    let mut used = vec![false; vertices.len()];
    for &index in triangles.iter().flatten() {
        used[index as usize] = true;
    }

    let mut remap = vec![u32::MAX; vertices.len()];
    let mut kept = Vec::with_capacity(vertices.len());
    for (index, position) in vertices.iter().enumerate() {
        if used[index] {
            remap[index] = kept.len() as u32;
            kept.push(*position);
        }
    }

    let triangles = triangles
        .into_iter()
        .map(|tri| tri.map(|i| remap[i as usize]))
        .collect();

    let removed = vertices.len() - kept.len();
    *mesh = MeshBuffers::from_parts_unchecked(kept, triangles);
    removed
}

/// Rounded cell coordinates, keyed by their bit pattern.
///
/// Kept as `f64` so no magnitude saturates into a shared cell. Adding
/// `0.0` folds `-0.0` into `0.0`.
#[inline]
fn cell_of(position: DVec3, epsilon: f64) -> [u64; 3] {
    let q = (position / epsilon).round();
    [(q.x + 0.0).to_bits(), (q.y + 0.0).to_bits(), (q.z + 0.0).to_bits()]
}
