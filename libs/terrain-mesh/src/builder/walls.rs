//! Skirt vertices on the base plane and the four vertical walls.

use glam::DVec3;

use super::planar;
use crate::layout::SkirtLayout;

/// Appends the top, right, bottom and left skirt blocks, in that order.
pub(super) fn push_skirt_vertices(
    layout: &SkirtLayout,
    cell_size: f64,
    base_z: f64,
    vertices: &mut Vec<DVec3>,
) {
    let last_column = layout.columns() - 1;
    let last_row = layout.rows() - 1;
    let at = |x, y| {
        let (x, y) = planar(x, y, cell_size);
        DVec3::new(x, y, base_z)
    };

    vertices.extend((0..layout.columns()).map(|x| at(x, 0)));
    vertices.extend((0..layout.rows()).map(|y| at(last_column, y)));
    vertices.extend((0..layout.columns()).map(|x| at(x, last_row)));
    vertices.extend((0..layout.rows()).map(|y| at(0, y)));
}

/// Appends two triangles per border segment, wound to face outward.
pub(super) fn push_wall_triangles(layout: &SkirtLayout, triangles: &mut Vec<[u32; 3]>) {
    let last_column = layout.columns() - 1;
    let last_row = layout.rows() - 1;

    for x in 0..last_column {
        // Front wall, y = 0
        let (a, b) = (layout.surface_index(x, 0), layout.surface_index(x + 1, 0));
        let (sa, sb) = (layout.top_skirt_index(x), layout.top_skirt_index(x + 1));
        triangles.push([a, sa, b]);
        triangles.push([b, sa, sb]);

        // Back wall, y = last row
        let (a, b) = (
            layout.surface_index(x, last_row),
            layout.surface_index(x + 1, last_row),
        );
        let (sa, sb) = (layout.bottom_skirt_index(x), layout.bottom_skirt_index(x + 1));
        triangles.push([b, sa, a]);
        triangles.push([sb, sa, b]);
    }

    for y in 0..last_row {
        // Right wall, x = last column
        let (a, b) = (
            layout.surface_index(last_column, y),
            layout.surface_index(last_column, y + 1),
        );
        let (sa, sb) = (layout.right_skirt_index(y), layout.right_skirt_index(y + 1));
        triangles.push([b, a, sa]);
        triangles.push([b, sa, sb]);

        // Left wall, x = 0
        let (a, b) = (layout.surface_index(0, y), layout.surface_index(0, y + 1));
        let (sa, sb) = (layout.left_skirt_index(y), layout.left_skirt_index(y + 1));
        triangles.push([sa, a, b]);
        triangles.push([sb, sa, b]);
    }
}
