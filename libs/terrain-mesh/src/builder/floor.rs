//! Floor triangulation on the base plane, facing -Z.

use crate::layout::{FloorStyle, SkirtLayout};

/// Appends the floor triangles for the chosen style.
pub(super) fn push_floor_triangles(
    layout: &SkirtLayout,
    floor: FloorStyle,
    triangles: &mut Vec<[u32; 3]>,
) {
    match floor {
        FloorStyle::Perimeter => push_perimeter_floor(layout, triangles),
        FloorStyle::Quad => push_quad_floor(layout, triangles),
    }
}

/// Triangulates the floor over every skirt vertex.
///
/// A fan from the second top-skirt vertex covers the left column, a fan from
/// the second-to-last bottom-skirt vertex covers the right column, and a
/// strip between the top and bottom skirt rows fills the middle. Each wall's
/// bottom edge ends up shared with exactly one floor triangle.
fn push_perimeter_floor(layout: &SkirtLayout, triangles: &mut Vec<[u32; 3]>) {
    let columns = layout.columns();
    let top = |x| layout.top_skirt_index(x);
    let bottom = |x| layout.bottom_skirt_index(x);

    let left_apex = top(1);
    for y in 0..layout.rows() - 1 {
        triangles.push([left_apex, layout.left_skirt_index(y), layout.left_skirt_index(y + 1)]);
    }

    let right_apex = bottom(columns - 2);
    for y in 0..layout.rows() - 1 {
        triangles.push([right_apex, layout.right_skirt_index(y + 1), layout.right_skirt_index(y)]);
    }

    for x in 0..columns - 2 {
        triangles.push([top(x + 1), bottom(x + 1), top(x + 2)]);
        triangles.push([top(x + 1), bottom(x), bottom(x + 1)]);
    }
}

/// Two triangles spanning the skirt corners.
fn push_quad_floor(layout: &SkirtLayout, triangles: &mut Vec<[u32; 3]>) {
    let near_left = layout.top_skirt_index(0);
    let near_right = layout.right_skirt_index(0);
    let far_left = layout.bottom_skirt_index(0);
    let far_right = layout.bottom_skirt_index(layout.columns() - 1);
    triangles.push([far_left, near_right, near_left]);
    triangles.push([far_left, far_right, near_right]);
}
