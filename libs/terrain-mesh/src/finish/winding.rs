//! Consistent outward orientation.

use std::collections::{HashMap, VecDeque};

use crate::mesh::MeshBuffers;
use crate::topology::{triangle_edges, Edge};

/// Orients every triangle consistently with its neighbours, then outward.
///
/// Each connected patch is walked breadth-first from its first triangle. A
/// neighbour that runs a shared edge in the same direction as the current
/// triangle is flipped. If the resulting signed volume is negative, every
/// triangle is flipped. Returns the number of flips performed.
pub fn fix_winding(mesh: &mut MeshBuffers) -> usize {
    let triangle_count = mesh.triangle_count();
    let mut neighbours: HashMap<Edge, Vec<usize>> = HashMap::with_capacity(triangle_count * 3 / 2);
    for (index, &tri) in mesh.triangles().iter().enumerate() {
        for edge in triangle_edges(tri) {
            neighbours.entry(edge.undirected()).or_default().push(index);
        }
    }

    let mut flipped = 0;
    let mut visited = vec![false; triangle_count];
    let mut queue = VecDeque::new();

    for seed in 0..triangle_count {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            for edge in triangle_edges(mesh.triangle(current)) {
                let Some(adjacent) = neighbours.get(&edge.undirected()) else {
                    continue;
                };
                for &other in adjacent {
                    if visited[other] {
                        continue;
                    }
                    visited[other] = true;
                    if triangle_edges(mesh.triangle(other)).contains(&edge) {
                        mesh.flip_triangle(other);
                        flipped += 1;
                    }
                    queue.push_back(other);
                }
            }
        }
    }

    if mesh.signed_volume() < 0.0 {
        for index in 0..triangle_count {
            mesh.flip_triangle(index);
        }
        flipped += triangle_count;
    }

    flipped
}
